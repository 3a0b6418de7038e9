//! Role REST API handlers

use crate::api::extractors::org_context::OrgContext;
use crate::{
    ApiError, ApiResult, AppState, CreateRoleRequest, DeleteResponse, RoleDto, RoleListResponse,
    RoleResponse, UpdateRoleRequest,
};

use cm_core::{ErrorLocation, Permission, PermissionSet, Role};
use cm_db::RoleRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/roles
pub async fn list_roles(
    State(state): State<AppState>,
    ctx: OrgContext,
) -> ApiResult<Json<RoleListResponse>> {
    let scope = ctx.authorize(Permission::RoleView)?;

    let repo = RoleRepository::new(state.pool.clone());
    let roles = repo.find_all(scope.organization_id()).await?;

    Ok(Json(RoleListResponse {
        roles: roles.into_iter().map(RoleDto::from).collect(),
    }))
}

/// POST /api/v1/roles
pub async fn create_role(
    State(state): State<AppState>,
    ctx: OrgContext,
    Json(req): Json<CreateRoleRequest>,
) -> ApiResult<Json<RoleResponse>> {
    let scope = ctx.authorize(Permission::RoleManage)?;

    if req.name.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Role name is required".to_string(),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let permissions = PermissionSet::from_strings(&req.permissions)?;

    let repo = RoleRepository::new(state.pool.clone());
    if repo
        .find_by_name(scope.organization_id(), &req.name)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict {
            message: format!("Role '{}' already exists", req.name),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let mut role = Role::new(scope.organization_id(), req.name, permissions);
    role.description = req.description;

    let mut tx = state.pool.begin().await?;
    RoleRepository::create(&mut tx, &role).await?;
    tx.commit().await?;

    log::info!("Created role {} via REST API", role.id);

    Ok(Json(RoleResponse { role: role.into() }))
}

/// PUT /api/v1/roles/{id}
pub async fn update_role(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
    Json(req): Json<UpdateRoleRequest>,
) -> ApiResult<Json<RoleResponse>> {
    let scope = ctx.authorize(Permission::RoleManage)?;
    let role_id = Uuid::parse_str(&id)?;

    let repo = RoleRepository::new(state.pool.clone());
    let mut role = repo
        .find_by_id(scope.organization_id(), role_id)
        .await?
        .ok_or_else(|| role_not_found(&id))?;

    if role.is_system && req.permissions.is_some() {
        return Err(ApiError::Validation {
            message: "System role permissions cannot be changed".to_string(),
            field: Some("permissions".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if let Some(name) = req.name {
        role.name = name;
    }
    if let Some(description) = req.description {
        role.description = Some(description);
    }
    if let Some(ref permissions) = req.permissions {
        role.permissions = PermissionSet::from_strings(permissions)?;
    }
    role.updated_at = Utc::now();

    repo.update(&role).await?;

    log::info!("Updated role {} via REST API", role.id);

    Ok(Json(RoleResponse { role: role.into() }))
}

/// DELETE /api/v1/roles/{id}
pub async fn delete_role(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let scope = ctx.authorize(Permission::RoleManage)?;
    let role_id = Uuid::parse_str(&id)?;

    let repo = RoleRepository::new(state.pool.clone());
    let role = repo
        .find_by_id(scope.organization_id(), role_id)
        .await?
        .ok_or_else(|| role_not_found(&id))?;

    if role.is_system {
        return Err(ApiError::Validation {
            message: "System roles cannot be deleted".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    repo.delete(scope.organization_id(), role_id).await?;

    log::info!("Deleted role {} via REST API", role_id);

    Ok(Json(DeleteResponse {
        deleted_id: role_id.to_string(),
    }))
}

#[track_caller]
fn role_not_found(id: &str) -> ApiError {
    ApiError::NotFound {
        message: format!("Role {} not found", id),
        location: ErrorLocation::from(Location::caller()),
    }
}
