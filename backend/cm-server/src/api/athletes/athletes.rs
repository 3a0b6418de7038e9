//! Athlete REST API handlers

use crate::api::athletes::athlete_list_response::Pagination;
use crate::api::extractors::org_context::OrgContext;
use crate::{
    ApiError, ApiResult, AppState, AthleteDto, AthleteListResponse, AthleteResponse,
    CreateAthleteRequest, DeleteResponse, ListAthletesQuery, UpdateAthleteRequest,
};

use cm_core::{Athlete, AthleteStatus, ErrorLocation, Permission};
use cm_db::{AthleteFilter, AthleteRepository};

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/athletes
///
/// List athletes in the resolved organization with optional filters
/// and pagination
pub async fn list_athletes(
    State(state): State<AppState>,
    ctx: OrgContext,
    Query(query): Query<ListAthletesQuery>,
) -> ApiResult<Json<AthleteListResponse>> {
    let scope = ctx.authorize(Permission::AthleteView)?;

    let page = query.page.max(1);
    let limit = query.limit.clamp(1, 100);

    let status = query
        .status
        .as_deref()
        .map(AthleteStatus::from_str)
        .transpose()?;
    let team_id = query
        .team_id
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()?;

    let filter = AthleteFilter {
        search: query.search.clone(),
        team_id,
        status,
        uses_transport: query.uses_transport,
        limit: Some(limit),
        offset: Some((page - 1) * limit),
    };

    let repo = AthleteRepository::new(state.pool.clone());
    let athletes = repo.find_all(scope.organization_id(), &filter).await?;

    let unpaged = AthleteFilter {
        limit: None,
        offset: None,
        ..filter
    };
    let total = repo
        .count_filtered(scope.organization_id(), &unpaged)
        .await?;

    Ok(Json(AthleteListResponse {
        athletes: athletes.into_iter().map(AthleteDto::from).collect(),
        pagination: Pagination {
            page,
            limit,
            total,
            total_pages: (total + limit - 1) / limit,
        },
    }))
}

/// GET /api/v1/athletes/{id}
pub async fn get_athlete(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
) -> ApiResult<Json<AthleteResponse>> {
    let scope = ctx.authorize(Permission::AthleteView)?;
    let athlete_id = Uuid::parse_str(&id)?;

    let repo = AthleteRepository::new(state.pool.clone());
    let athlete = repo
        .find_by_id(scope.organization_id(), athlete_id)
        .await?
        .ok_or_else(|| athlete_not_found(&id))?;

    Ok(Json(AthleteResponse {
        athlete: athlete.into(),
    }))
}

/// POST /api/v1/athletes
///
/// Create an athlete. The organization always comes from the resolved
/// tenant; an organization_id in the body is ignored.
pub async fn create_athlete(
    State(state): State<AppState>,
    ctx: OrgContext,
    Json(req): Json<CreateAthleteRequest>,
) -> ApiResult<Json<AthleteResponse>> {
    let scope = ctx.authorize(Permission::AthleteCreate)?;

    if req.first_name.trim().is_empty() || req.last_name.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "First and last name are required".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let birth_date = parse_birth_date(&req.birth_date)?;

    let mut athlete = Athlete::new(
        scope.organization_id(),
        req.first_name.clone(),
        req.last_name.clone(),
        birth_date,
    );
    athlete.team_id = req.team_id.as_deref().map(Uuid::parse_str).transpose()?;
    athlete.email = req.email.clone();
    athlete.phone = req.phone.clone();
    athlete.fiscal_code = req.fiscal_code.clone();
    if let Some(ref status) = req.status {
        athlete.status = AthleteStatus::from_str(status)?;
    }
    if let Some(uses_transport) = req.uses_transport {
        athlete.uses_transport = uses_transport;
    }
    athlete.transport_zone_id = req
        .transport_zone_id
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()?;

    let repo = AthleteRepository::new(state.pool.clone());
    repo.create(&athlete).await?;

    log::info!("Created athlete {} via REST API", athlete.id);

    Ok(Json(AthleteResponse {
        athlete: athlete.into(),
    }))
}

/// PUT /api/v1/athletes/{id}
pub async fn update_athlete(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
    Json(req): Json<UpdateAthleteRequest>,
) -> ApiResult<Json<AthleteResponse>> {
    let scope = ctx.authorize(Permission::AthleteUpdate)?;
    let athlete_id = Uuid::parse_str(&id)?;

    let repo = AthleteRepository::new(state.pool.clone());
    let mut athlete = repo
        .find_by_id(scope.organization_id(), athlete_id)
        .await?
        .ok_or_else(|| athlete_not_found(&id))?;

    if let Some(ref first_name) = req.first_name {
        athlete.first_name = first_name.clone();
    }
    if let Some(ref last_name) = req.last_name {
        athlete.last_name = last_name.clone();
    }
    if let Some(ref birth_date) = req.birth_date {
        athlete.birth_date = parse_birth_date(birth_date)?;
    }
    if let Some(ref team_id) = req.team_id {
        athlete.team_id = if team_id.is_empty() {
            None
        } else {
            Some(Uuid::parse_str(team_id)?)
        };
    }
    if let Some(ref email) = req.email {
        athlete.email = Some(email.clone());
    }
    if let Some(ref phone) = req.phone {
        athlete.phone = Some(phone.clone());
    }
    if let Some(ref fiscal_code) = req.fiscal_code {
        athlete.fiscal_code = Some(fiscal_code.clone());
    }
    if let Some(ref status) = req.status {
        athlete.status = AthleteStatus::from_str(status)?;
    }
    if let Some(uses_transport) = req.uses_transport {
        athlete.uses_transport = uses_transport;
    }
    if let Some(ref zone_id) = req.transport_zone_id {
        athlete.transport_zone_id = if zone_id.is_empty() {
            None
        } else {
            Some(Uuid::parse_str(zone_id)?)
        };
    }
    athlete.updated_at = Utc::now();

    repo.update(&athlete).await?;

    log::info!("Updated athlete {} via REST API", athlete.id);

    Ok(Json(AthleteResponse {
        athlete: athlete.into(),
    }))
}

/// DELETE /api/v1/athletes/{id}
pub async fn delete_athlete(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let scope = ctx.authorize(Permission::AthleteDelete)?;
    let athlete_id = Uuid::parse_str(&id)?;

    let repo = AthleteRepository::new(state.pool.clone());
    repo.find_by_id(scope.organization_id(), athlete_id)
        .await?
        .ok_or_else(|| athlete_not_found(&id))?;

    repo.delete(scope.organization_id(), athlete_id).await?;

    log::info!("Deleted athlete {} via REST API", athlete_id);

    Ok(Json(DeleteResponse {
        deleted_id: athlete_id.to_string(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn athlete_not_found(id: &str) -> ApiError {
    ApiError::NotFound {
        message: format!("Athlete {} not found", id),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn parse_birth_date(value: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ApiError::Validation {
        message: format!("Invalid birth_date '{}': expected YYYY-MM-DD", value),
        field: Some("birth_date".into()),
        location: ErrorLocation::from(Location::caller()),
    })
}
