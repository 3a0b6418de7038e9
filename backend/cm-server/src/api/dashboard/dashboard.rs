//! Dashboard REST API handler

use crate::api::extractors::org_context::OrgContext;
use crate::{ApiResult, AppState, DashboardSummaryResponse};

use cm_core::{EXPIRY_WARNING_DAYS, PaymentStatus, Permission};
use cm_db::{
    AthleteRepository, DocumentRepository, MatchRepository, PaymentRepository, TeamRepository,
};

use axum::{Json, extract::State};
use chrono::{Duration, Utc};

/// GET /api/v1/dashboard/summary
pub async fn dashboard_summary(
    State(state): State<AppState>,
    ctx: OrgContext,
) -> ApiResult<Json<DashboardSummaryResponse>> {
    let scope = ctx.authorize(Permission::ReportView)?;
    let organization_id = scope.organization_id();

    let now = Utc::now();
    let today = now.date_naive();
    let horizon = today + Duration::days(EXPIRY_WARNING_DAYS);

    let athletes = AthleteRepository::new(state.pool.clone())
        .count(organization_id)
        .await?;
    let teams = TeamRepository::new(state.pool.clone())
        .count(organization_id)
        .await?;
    let pending_payments = PaymentRepository::new(state.pool.clone())
        .count_by_status(organization_id, PaymentStatus::Pending)
        .await?;
    let expiring_documents = DocumentRepository::new(state.pool.clone())
        .count_expiring(organization_id, today, horizon)
        .await?;
    let upcoming_matches = MatchRepository::new(state.pool.clone())
        .count_upcoming(organization_id, now)
        .await?;

    Ok(Json(DashboardSummaryResponse {
        athletes,
        teams,
        pending_payments,
        expiring_documents,
        upcoming_matches,
    }))
}
