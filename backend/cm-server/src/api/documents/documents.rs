//! Document REST API handlers.
//!
//! Documents are metadata records (name, category, dates); file blobs
//! live outside this service.

use crate::api::documents::list_documents_query::ExpiringDocumentsQuery;
use crate::api::extractors::org_context::OrgContext;
use crate::{
    ApiError, ApiResult, AppState, CreateDocumentRequest, DeleteResponse, DocumentDto,
    DocumentListResponse, DocumentResponse, ListDocumentsQuery, UpdateDocumentRequest,
};

use cm_core::{
    Document, DocumentCategory, EXPIRY_WARNING_DAYS, ErrorLocation, Permission,
};
use cm_db::{AthleteRepository, DocumentRepository};

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/documents
pub async fn list_documents(
    State(state): State<AppState>,
    ctx: OrgContext,
    Query(query): Query<ListDocumentsQuery>,
) -> ApiResult<Json<DocumentListResponse>> {
    let scope = ctx.authorize(Permission::DocumentView)?;

    let repo = DocumentRepository::new(state.pool.clone());
    let documents = match query.athlete_id.as_deref() {
        Some(athlete_id) => {
            let athlete_id = Uuid::parse_str(athlete_id)?;
            repo.find_by_athlete(scope.organization_id(), athlete_id)
                .await?
        }
        None => repo.find_all(scope.organization_id()).await?,
    };

    let today = Utc::now().date_naive();
    Ok(Json(DocumentListResponse {
        documents: documents
            .into_iter()
            .map(|d| DocumentDto::from_document(d, today))
            .collect(),
    }))
}

/// GET /api/v1/documents/expiring
///
/// Documents whose expiry falls within the horizon, soonest first
pub async fn list_expiring_documents(
    State(state): State<AppState>,
    ctx: OrgContext,
    Query(query): Query<ExpiringDocumentsQuery>,
) -> ApiResult<Json<DocumentListResponse>> {
    let scope = ctx.authorize(Permission::DocumentView)?;

    let within_days = query.within_days.unwrap_or(EXPIRY_WARNING_DAYS);
    if within_days <= 0 {
        return Err(ApiError::Validation {
            message: "within_days must be greater than 0".to_string(),
            field: Some("within_days".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let today = Utc::now().date_naive();
    let horizon = today + Duration::days(within_days);

    let repo = DocumentRepository::new(state.pool.clone());
    let documents = repo
        .find_expiring(scope.organization_id(), today, horizon)
        .await?;

    Ok(Json(DocumentListResponse {
        documents: documents
            .into_iter()
            .map(|d| DocumentDto::from_document(d, today))
            .collect(),
    }))
}

/// GET /api/v1/documents/{id}
pub async fn get_document(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
) -> ApiResult<Json<DocumentResponse>> {
    let scope = ctx.authorize(Permission::DocumentView)?;
    let document_id = Uuid::parse_str(&id)?;

    let repo = DocumentRepository::new(state.pool.clone());
    let document = repo
        .find_by_id(scope.organization_id(), document_id)
        .await?
        .ok_or_else(|| document_not_found(&id))?;

    Ok(Json(DocumentResponse {
        document: DocumentDto::from_document(document, Utc::now().date_naive()),
    }))
}

/// POST /api/v1/documents
pub async fn create_document(
    State(state): State<AppState>,
    ctx: OrgContext,
    Json(req): Json<CreateDocumentRequest>,
) -> ApiResult<Json<DocumentResponse>> {
    let scope = ctx.authorize(Permission::DocumentUpload)?;

    if req.name.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Document name is required".to_string(),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let athlete_id = Uuid::parse_str(&req.athlete_id)?;
    let category = DocumentCategory::from_str(&req.category)?;

    // The athlete must exist in the resolved organization
    AthleteRepository::new(state.pool.clone())
        .find_by_id(scope.organization_id(), athlete_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Athlete {} not found", athlete_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let mut document = Document::new(
        scope.organization_id(),
        athlete_id,
        req.name.clone(),
        category,
    );
    document.issued_at = parse_opt_document_date(req.issued_at.as_deref(), "issued_at")?;
    document.expires_at = parse_opt_document_date(req.expires_at.as_deref(), "expires_at")?;

    let repo = DocumentRepository::new(state.pool.clone());
    repo.create(&document).await?;

    log::info!("Created document {} via REST API", document.id);

    Ok(Json(DocumentResponse {
        document: DocumentDto::from_document(document, Utc::now().date_naive()),
    }))
}

/// PUT /api/v1/documents/{id}
pub async fn update_document(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
    Json(req): Json<UpdateDocumentRequest>,
) -> ApiResult<Json<DocumentResponse>> {
    let scope = ctx.authorize(Permission::DocumentUpdate)?;
    let document_id = Uuid::parse_str(&id)?;

    let repo = DocumentRepository::new(state.pool.clone());
    let mut document = repo
        .find_by_id(scope.organization_id(), document_id)
        .await?
        .ok_or_else(|| document_not_found(&id))?;

    if let Some(name) = req.name {
        document.name = name;
    }
    if let Some(ref category) = req.category {
        document.category = DocumentCategory::from_str(category)?;
    }
    if let Some(ref issued_at) = req.issued_at {
        document.issued_at = if issued_at.is_empty() {
            None
        } else {
            parse_opt_document_date(Some(issued_at.as_str()), "issued_at")?
        };
    }
    if let Some(ref expires_at) = req.expires_at {
        document.expires_at = if expires_at.is_empty() {
            None
        } else {
            parse_opt_document_date(Some(expires_at.as_str()), "expires_at")?
        };
    }
    document.updated_at = Utc::now();

    repo.update(&document).await?;

    log::info!("Updated document {} via REST API", document.id);

    Ok(Json(DocumentResponse {
        document: DocumentDto::from_document(document, Utc::now().date_naive()),
    }))
}

/// DELETE /api/v1/documents/{id}
pub async fn delete_document(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let scope = ctx.authorize(Permission::DocumentDelete)?;
    let document_id = Uuid::parse_str(&id)?;

    let repo = DocumentRepository::new(state.pool.clone());
    repo.find_by_id(scope.organization_id(), document_id)
        .await?
        .ok_or_else(|| document_not_found(&id))?;

    repo.delete(scope.organization_id(), document_id).await?;

    log::info!("Deleted document {} via REST API", document_id);

    Ok(Json(DeleteResponse {
        deleted_id: document_id.to_string(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn document_not_found(id: &str) -> ApiError {
    ApiError::NotFound {
        message: format!("Document {} not found", id),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn parse_opt_document_date(value: Option<&str>, field: &str) -> ApiResult<Option<NaiveDate>> {
    value
        .map(|v| {
            NaiveDate::parse_from_str(v, "%Y-%m-%d").map_err(|_| ApiError::Validation {
                message: format!("Invalid {} '{}': expected YYYY-MM-DD", field, v),
                field: Some(field.to_string()),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()
}
