//! Match REST API handlers

use crate::api::extractors::org_context::OrgContext;
use crate::{
    ApiError, ApiResult, AppState, CreateMatchRequest, DeleteResponse, MatchDto, MatchListResponse,
    MatchResponse, MatchResultRequest, UpdateMatchRequest,
};

use cm_core::{ErrorLocation, Match, MatchStatus, Permission};
use cm_db::{MatchRepository, TeamRepository};

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/matches
pub async fn list_matches(
    State(state): State<AppState>,
    ctx: OrgContext,
) -> ApiResult<Json<MatchListResponse>> {
    let scope = ctx.authorize(Permission::MatchView)?;

    let repo = MatchRepository::new(state.pool.clone());
    let matches = repo.find_all(scope.organization_id()).await?;

    Ok(Json(MatchListResponse {
        matches: matches.into_iter().map(MatchDto::from).collect(),
    }))
}

/// GET /api/v1/matches/upcoming
pub async fn list_upcoming_matches(
    State(state): State<AppState>,
    ctx: OrgContext,
) -> ApiResult<Json<MatchListResponse>> {
    let scope = ctx.authorize(Permission::MatchView)?;

    let repo = MatchRepository::new(state.pool.clone());
    let matches = repo
        .find_upcoming(scope.organization_id(), Utc::now())
        .await?;

    Ok(Json(MatchListResponse {
        matches: matches.into_iter().map(MatchDto::from).collect(),
    }))
}

/// GET /api/v1/matches/{id}
pub async fn get_match(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
) -> ApiResult<Json<MatchResponse>> {
    let scope = ctx.authorize(Permission::MatchView)?;
    let match_id = Uuid::parse_str(&id)?;

    let repo = MatchRepository::new(state.pool.clone());
    let fixture = repo
        .find_by_id(scope.organization_id(), match_id)
        .await?
        .ok_or_else(|| match_not_found(&id))?;

    Ok(Json(MatchResponse {
        fixture: fixture.into(),
    }))
}

/// POST /api/v1/matches
pub async fn create_match(
    State(state): State<AppState>,
    ctx: OrgContext,
    Json(req): Json<CreateMatchRequest>,
) -> ApiResult<Json<MatchResponse>> {
    let scope = ctx.authorize(Permission::MatchCreate)?;

    if req.opponent.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Opponent is required".to_string(),
            field: Some("opponent".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let team_id = Uuid::parse_str(&req.team_id)?;
    let kickoff_at = parse_kickoff(req.kickoff_at)?;

    // The team must exist in the resolved organization
    TeamRepository::new(state.pool.clone())
        .find_by_id(scope.organization_id(), team_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Team {} not found", team_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let mut fixture = Match::new(
        scope.organization_id(),
        team_id,
        req.opponent.clone(),
        kickoff_at,
    );
    fixture.venue = req.venue.clone();
    if let Some(is_home) = req.is_home {
        fixture.is_home = is_home;
    }

    let repo = MatchRepository::new(state.pool.clone());
    repo.create(&fixture).await?;

    log::info!("Created match {} via REST API", fixture.id);

    Ok(Json(MatchResponse {
        fixture: fixture.into(),
    }))
}

/// PUT /api/v1/matches/{id}
pub async fn update_match(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
    Json(req): Json<UpdateMatchRequest>,
) -> ApiResult<Json<MatchResponse>> {
    let scope = ctx.authorize(Permission::MatchUpdate)?;
    let match_id = Uuid::parse_str(&id)?;

    let repo = MatchRepository::new(state.pool.clone());
    let mut fixture = repo
        .find_by_id(scope.organization_id(), match_id)
        .await?
        .ok_or_else(|| match_not_found(&id))?;

    if let Some(opponent) = req.opponent {
        fixture.opponent = opponent;
    }
    if let Some(venue) = req.venue {
        fixture.venue = Some(venue);
    }
    if let Some(is_home) = req.is_home {
        fixture.is_home = is_home;
    }
    if let Some(kickoff_at) = req.kickoff_at {
        fixture.kickoff_at = parse_kickoff(kickoff_at)?;
    }
    if let Some(ref status) = req.status {
        fixture.status = MatchStatus::from_str(status)?;
    }
    fixture.updated_at = Utc::now();

    repo.update(&fixture).await?;

    log::info!("Updated match {} via REST API", fixture.id);

    Ok(Json(MatchResponse {
        fixture: fixture.into(),
    }))
}

/// POST /api/v1/matches/{id}/result
///
/// Record the final score and mark the fixture played
pub async fn record_match_result(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
    Json(req): Json<MatchResultRequest>,
) -> ApiResult<Json<MatchResponse>> {
    let scope = ctx.authorize(Permission::MatchUpdateResults)?;
    let match_id = Uuid::parse_str(&id)?;

    if req.home_score < 0 || req.away_score < 0 {
        return Err(ApiError::Validation {
            message: "Scores cannot be negative".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = MatchRepository::new(state.pool.clone());
    let mut fixture = repo
        .find_by_id(scope.organization_id(), match_id)
        .await?
        .ok_or_else(|| match_not_found(&id))?;

    if fixture.status == MatchStatus::Cancelled {
        return Err(ApiError::Conflict {
            message: "Cancelled matches cannot receive a result".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    fixture.record_result(req.home_score, req.away_score, Utc::now());
    repo.update(&fixture).await?;

    log::info!("Recorded result for match {} via REST API", fixture.id);

    Ok(Json(MatchResponse {
        fixture: fixture.into(),
    }))
}

/// DELETE /api/v1/matches/{id}
pub async fn delete_match(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let scope = ctx.authorize(Permission::MatchDelete)?;
    let match_id = Uuid::parse_str(&id)?;

    let repo = MatchRepository::new(state.pool.clone());
    repo.find_by_id(scope.organization_id(), match_id)
        .await?
        .ok_or_else(|| match_not_found(&id))?;

    repo.delete(scope.organization_id(), match_id).await?;

    log::info!("Deleted match {} via REST API", match_id);

    Ok(Json(DeleteResponse {
        deleted_id: match_id.to_string(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn match_not_found(id: &str) -> ApiError {
    ApiError::NotFound {
        message: format!("Match {} not found", id),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn parse_kickoff(timestamp: i64) -> ApiResult<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0).ok_or_else(|| ApiError::Validation {
        message: format!("Invalid kickoff_at timestamp: {}", timestamp),
        field: Some("kickoff_at".into()),
        location: ErrorLocation::from(Location::caller()),
    })
}
