//! Organization membership handlers: list members, change a member's
//! role, remove a member.

use crate::api::extractors::org_context::OrgContext;
use crate::{
    ApiError, ApiResult, AppState, DeleteResponse, MemberDto, MemberListResponse,
    UpdateMemberRoleRequest,
};

use cm_core::{ErrorLocation, Permission};
use cm_db::{RoleRepository, UserOrganizationRepository, UserRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/users
///
/// List the current organization's members with their roles
pub async fn list_members(
    State(state): State<AppState>,
    ctx: OrgContext,
) -> ApiResult<Json<MemberListResponse>> {
    let scope = ctx.authorize(Permission::UserView)?;

    let links = UserOrganizationRepository::new(state.pool.clone());
    let memberships = links.find_for_organization(scope.organization_id()).await?;

    let users = UserRepository::new(state.pool.clone());
    let roles = RoleRepository::new(state.pool.clone());

    let mut members = Vec::with_capacity(memberships.len());
    for membership in &memberships {
        let Some(user) = users.find_by_id(membership.user_id).await? else {
            continue;
        };
        let role = roles
            .find_by_id(scope.organization_id(), membership.role_id)
            .await?;

        members.push(MemberDto {
            user_id: user.id.to_string(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: role.map(|r| r.name).unwrap_or_default(),
            is_default: membership.is_default,
            joined_at: membership.created_at.timestamp(),
        });
    }

    Ok(Json(MemberListResponse { members }))
}

/// PUT /api/v1/users/{user_id}/role
pub async fn update_member_role(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(user_id): Path<String>,
    Json(req): Json<UpdateMemberRoleRequest>,
) -> ApiResult<Json<MemberListResponse>> {
    let scope = ctx.authorize(Permission::UserManage)?;
    let user_id = Uuid::parse_str(&user_id)?;
    let role_id = Uuid::parse_str(&req.role_id)?;

    let links = UserOrganizationRepository::new(state.pool.clone());
    links
        .find(user_id, scope.organization_id())
        .await?
        .ok_or_else(|| member_not_found(user_id))?;

    // The role must belong to this organization
    RoleRepository::new(state.pool.clone())
        .find_by_id(scope.organization_id(), role_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Role {} not found", role_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    links
        .update_role(scope.organization_id(), user_id, role_id)
        .await?;

    log::info!(
        "Changed role of user {} in organization {} via REST API",
        user_id,
        scope.organization_id()
    );

    list_members(State(state), ctx).await
}

/// DELETE /api/v1/users/{user_id}
///
/// Remove a member from the current organization. The account itself
/// is untouched; only the membership link goes away.
pub async fn remove_member(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(user_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let scope = ctx.authorize(Permission::UserManage)?;
    let user_id = Uuid::parse_str(&user_id)?;

    if ctx.user_id()? == user_id {
        return Err(ApiError::Validation {
            message: "You cannot remove yourself from the organization".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let links = UserOrganizationRepository::new(state.pool.clone());
    links
        .find(user_id, scope.organization_id())
        .await?
        .ok_or_else(|| member_not_found(user_id))?;

    links.delete(scope.organization_id(), user_id).await?;

    log::info!(
        "Removed user {} from organization {} via REST API",
        user_id,
        scope.organization_id()
    );

    Ok(Json(DeleteResponse {
        deleted_id: user_id.to_string(),
    }))
}

#[track_caller]
fn member_not_found(user_id: Uuid) -> ApiError {
    ApiError::NotFound {
        message: format!("User {} is not a member of this organization", user_id),
        location: ErrorLocation::from(Location::caller()),
    }
}
