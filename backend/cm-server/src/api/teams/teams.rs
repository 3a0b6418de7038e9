//! Team REST API handlers

use crate::api::extractors::org_context::OrgContext;
use crate::{
    ApiError, ApiResult, AppState, AthleteDto, CreateTeamRequest, DeleteResponse, TeamDto,
    TeamListResponse, TeamResponse, UpdateTeamRequest,
};

use cm_core::{ErrorLocation, Permission, Team};
use cm_db::{AthleteRepository, TeamRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// Roster listing for one team
#[derive(Debug, Serialize)]
pub struct TeamRosterResponse {
    pub team: TeamDto,
    pub athletes: Vec<AthleteDto>,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/teams
pub async fn list_teams(
    State(state): State<AppState>,
    ctx: OrgContext,
) -> ApiResult<Json<TeamListResponse>> {
    let scope = ctx.authorize(Permission::TeamView)?;

    let repo = TeamRepository::new(state.pool.clone());
    let teams = repo.find_all(scope.organization_id()).await?;

    Ok(Json(TeamListResponse {
        teams: teams.into_iter().map(TeamDto::from).collect(),
    }))
}

/// GET /api/v1/teams/{id}
pub async fn get_team(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
) -> ApiResult<Json<TeamResponse>> {
    let scope = ctx.authorize(Permission::TeamView)?;
    let team_id = Uuid::parse_str(&id)?;

    let repo = TeamRepository::new(state.pool.clone());
    let team = repo
        .find_by_id(scope.organization_id(), team_id)
        .await?
        .ok_or_else(|| team_not_found(&id))?;

    Ok(Json(TeamResponse { team: team.into() }))
}

/// GET /api/v1/teams/{id}/athletes
///
/// The team's roster
pub async fn get_team_roster(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
) -> ApiResult<Json<TeamRosterResponse>> {
    let scope = ctx.authorize(Permission::TeamView)?;
    let team_id = Uuid::parse_str(&id)?;

    let teams = TeamRepository::new(state.pool.clone());
    let team = teams
        .find_by_id(scope.organization_id(), team_id)
        .await?
        .ok_or_else(|| team_not_found(&id))?;

    let athletes = AthleteRepository::new(state.pool.clone())
        .find_by_team(scope.organization_id(), team_id)
        .await?;

    Ok(Json(TeamRosterResponse {
        team: team.into(),
        athletes: athletes.into_iter().map(AthleteDto::from).collect(),
    }))
}

/// POST /api/v1/teams
pub async fn create_team(
    State(state): State<AppState>,
    ctx: OrgContext,
    Json(req): Json<CreateTeamRequest>,
) -> ApiResult<Json<TeamResponse>> {
    let scope = ctx.authorize(Permission::TeamCreate)?;

    if req.name.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Team name is required".to_string(),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let mut team = Team::new(
        scope.organization_id(),
        req.name.clone(),
        req.category.clone(),
        req.season.clone(),
    );
    team.coach_name = req.coach_name.clone();

    let repo = TeamRepository::new(state.pool.clone());
    repo.create(&team).await?;

    log::info!("Created team {} via REST API", team.id);

    Ok(Json(TeamResponse { team: team.into() }))
}

/// PUT /api/v1/teams/{id}
pub async fn update_team(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
    Json(req): Json<UpdateTeamRequest>,
) -> ApiResult<Json<TeamResponse>> {
    let scope = ctx.authorize(Permission::TeamUpdate)?;
    let team_id = Uuid::parse_str(&id)?;

    let repo = TeamRepository::new(state.pool.clone());
    let mut team = repo
        .find_by_id(scope.organization_id(), team_id)
        .await?
        .ok_or_else(|| team_not_found(&id))?;

    if let Some(name) = req.name {
        team.name = name;
    }
    if let Some(category) = req.category {
        team.category = category;
    }
    if let Some(season) = req.season {
        team.season = season;
    }
    if let Some(coach_name) = req.coach_name {
        team.coach_name = Some(coach_name);
    }
    team.updated_at = Utc::now();

    repo.update(&team).await?;

    log::info!("Updated team {} via REST API", team.id);

    Ok(Json(TeamResponse { team: team.into() }))
}

/// DELETE /api/v1/teams/{id}
///
/// Fails while athletes are still assigned to the team.
pub async fn delete_team(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let scope = ctx.authorize(Permission::TeamDelete)?;
    let team_id = Uuid::parse_str(&id)?;

    let repo = TeamRepository::new(state.pool.clone());
    repo.find_by_id(scope.organization_id(), team_id)
        .await?
        .ok_or_else(|| team_not_found(&id))?;

    let roster = AthleteRepository::new(state.pool.clone())
        .find_by_team(scope.organization_id(), team_id)
        .await?;
    if !roster.is_empty() {
        return Err(ApiError::Validation {
            message: format!(
                "Cannot delete team with {} assigned athlete(s). Reassign them first.",
                roster.len()
            ),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    repo.delete(scope.organization_id(), team_id).await?;

    log::info!("Deleted team {} via REST API", team_id);

    Ok(Json(DeleteResponse {
        deleted_id: team_id.to_string(),
    }))
}

#[track_caller]
fn team_not_found(id: &str) -> ApiError {
    ApiError::NotFound {
        message: format!("Team {} not found", id),
        location: ErrorLocation::from(Location::caller()),
    }
}
