//! Payment REST API handlers

use crate::api::extractors::org_context::OrgContext;
use crate::{
    ApiError, ApiResult, AppState, CreatePaymentRequest, DeleteResponse, ListPaymentsQuery,
    PaymentDto, PaymentListResponse, PaymentResponse, RecordPaymentRequest, UpdatePaymentRequest,
};

use cm_core::{ErrorLocation, Payment, PaymentStatus, Permission};
use cm_db::{AthleteRepository, PaymentRepository};

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

/// GET /api/v1/payments
pub async fn list_payments(
    State(state): State<AppState>,
    ctx: OrgContext,
    Query(query): Query<ListPaymentsQuery>,
) -> ApiResult<Json<PaymentListResponse>> {
    let scope = ctx.authorize(Permission::PaymentView)?;

    let status = query
        .status
        .as_deref()
        .map(PaymentStatus::from_str)
        .transpose()?;

    let repo = PaymentRepository::new(state.pool.clone());
    let payments = match query.athlete_id.as_deref() {
        Some(athlete_id) => {
            let athlete_id = Uuid::parse_str(athlete_id)?;
            let all = repo
                .find_by_athlete(scope.organization_id(), athlete_id)
                .await?;
            match status {
                Some(status) => all.into_iter().filter(|p| p.status == status).collect(),
                None => all,
            }
        }
        None => repo.find_all(scope.organization_id(), status).await?,
    };

    Ok(Json(PaymentListResponse {
        payments: payments.into_iter().map(PaymentDto::from).collect(),
    }))
}

/// GET /api/v1/payments/{id}
pub async fn get_payment(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
) -> ApiResult<Json<PaymentResponse>> {
    let scope = ctx.authorize(Permission::PaymentView)?;
    let payment_id = Uuid::parse_str(&id)?;

    let repo = PaymentRepository::new(state.pool.clone());
    let payment = repo
        .find_by_id(scope.organization_id(), payment_id)
        .await?
        .ok_or_else(|| payment_not_found(&id))?;

    Ok(Json(PaymentResponse {
        payment: payment.into(),
    }))
}

/// POST /api/v1/payments
pub async fn create_payment(
    State(state): State<AppState>,
    ctx: OrgContext,
    Json(req): Json<CreatePaymentRequest>,
) -> ApiResult<Json<PaymentResponse>> {
    let scope = ctx.authorize(Permission::PaymentCreate)?;

    if req.amount_cents <= 0 {
        return Err(ApiError::Validation {
            message: "amount_cents must be greater than 0".to_string(),
            field: Some("amount_cents".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if req.description.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Description is required".to_string(),
            field: Some("description".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let athlete_id = Uuid::parse_str(&req.athlete_id)?;
    let due_date = parse_due_date(&req.due_date)?;

    // The athlete must exist in the resolved organization
    AthleteRepository::new(state.pool.clone())
        .find_by_id(scope.organization_id(), athlete_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Athlete {} not found", athlete_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let mut payment = Payment::new(
        scope.organization_id(),
        athlete_id,
        req.description.clone(),
        req.amount_cents,
        due_date,
    );
    if let Some(ref currency) = req.currency {
        payment.currency = currency.clone();
    }

    let repo = PaymentRepository::new(state.pool.clone());
    repo.create(&payment).await?;

    log::info!("Created payment {} via REST API", payment.id);

    Ok(Json(PaymentResponse {
        payment: payment.into(),
    }))
}

/// PUT /api/v1/payments/{id}
pub async fn update_payment(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
    Json(req): Json<UpdatePaymentRequest>,
) -> ApiResult<Json<PaymentResponse>> {
    let scope = ctx.authorize(Permission::PaymentUpdate)?;
    let payment_id = Uuid::parse_str(&id)?;

    let repo = PaymentRepository::new(state.pool.clone());
    let mut payment = repo
        .find_by_id(scope.organization_id(), payment_id)
        .await?
        .ok_or_else(|| payment_not_found(&id))?;

    if let Some(description) = req.description {
        payment.description = description;
    }
    if let Some(amount_cents) = req.amount_cents {
        if amount_cents <= 0 {
            return Err(ApiError::Validation {
                message: "amount_cents must be greater than 0".to_string(),
                field: Some("amount_cents".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        payment.amount_cents = amount_cents;
    }
    if let Some(ref due_date) = req.due_date {
        payment.due_date = parse_due_date(due_date)?;
    }
    if let Some(ref status) = req.status {
        payment.status = PaymentStatus::from_str(status)?;
    }
    payment.updated_at = Utc::now();

    repo.update(&payment).await?;

    log::info!("Updated payment {} via REST API", payment.id);

    Ok(Json(PaymentResponse {
        payment: payment.into(),
    }))
}

/// POST /api/v1/payments/{id}/record
///
/// Mark a pending or overdue payment as settled
pub async fn record_payment(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
    Json(req): Json<RecordPaymentRequest>,
) -> ApiResult<Json<PaymentResponse>> {
    let scope = ctx.authorize(Permission::PaymentRecord)?;
    let payment_id = Uuid::parse_str(&id)?;

    let repo = PaymentRepository::new(state.pool.clone());
    let mut payment = repo
        .find_by_id(scope.organization_id(), payment_id)
        .await?
        .ok_or_else(|| payment_not_found(&id))?;

    if payment.status == PaymentStatus::Paid {
        return Err(ApiError::Conflict {
            message: "Payment is already recorded as paid".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if payment.status == PaymentStatus::Cancelled {
        return Err(ApiError::Conflict {
            message: "Cancelled payments cannot be recorded".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    payment.record(req.method.clone(), Utc::now());
    repo.update(&payment).await?;

    log::info!("Recorded payment {} via REST API", payment.id);

    Ok(Json(PaymentResponse {
        payment: payment.into(),
    }))
}

/// DELETE /api/v1/payments/{id}
pub async fn delete_payment(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let scope = ctx.authorize(Permission::PaymentUpdate)?;
    let payment_id = Uuid::parse_str(&id)?;

    let repo = PaymentRepository::new(state.pool.clone());
    repo.find_by_id(scope.organization_id(), payment_id)
        .await?
        .ok_or_else(|| payment_not_found(&id))?;

    repo.delete(scope.organization_id(), payment_id).await?;

    log::info!("Deleted payment {} via REST API", payment_id);

    Ok(Json(DeleteResponse {
        deleted_id: payment_id.to_string(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn payment_not_found(id: &str) -> ApiError {
    ApiError::NotFound {
        message: format!("Payment {} not found", id),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn parse_due_date(value: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ApiError::Validation {
        message: format!("Invalid due_date '{}': expected YYYY-MM-DD", value),
        field: Some("due_date".into()),
        location: ErrorLocation::from(Location::caller()),
    })
}
