//! Organization REST API handlers.
//!
//! Listing every organization and creating one are platform operations
//! reserved for super admins; reading and updating the current
//! organization are gated by the org-settings permissions.

use crate::{
    ApiError, ApiResult, AppState, AuthSession, CreateOrganizationRequest, OrganizationDto,
    OrganizationListResponse, OrganizationResponse, UpdateOrganizationRequest,
};
use crate::api::extractors::org_context::OrgContext;

use cm_core::{ErrorLocation, Organization, Permission, Role, default_roles};
use cm_db::{OrganizationRepository, RoleRepository};

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use cm_core::OrganizationPlan;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/organizations
///
/// List all organizations (super admin only)
pub async fn list_organizations(
    State(state): State<AppState>,
    AuthSession(claims): AuthSession,
) -> ApiResult<Json<OrganizationListResponse>> {
    require_super_admin(&claims)?;

    let repo = OrganizationRepository::new(state.pool.clone());
    let organizations = repo.find_all().await?;

    Ok(Json(OrganizationListResponse {
        organizations: organizations.into_iter().map(OrganizationDto::from).collect(),
    }))
}

/// POST /api/v1/organizations
///
/// Provision a new organization with its default roles (super admin only)
pub async fn create_organization(
    State(state): State<AppState>,
    AuthSession(claims): AuthSession,
    Json(req): Json<CreateOrganizationRequest>,
) -> ApiResult<Json<OrganizationResponse>> {
    require_super_admin(&claims)?;

    if req.name.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Organization name is required".to_string(),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let base = Organization::subdomain_from_name(&req.name);
    let subdomain = req.subdomain.clone().unwrap_or_else(|| base.clone());
    let code = req
        .code
        .clone()
        .unwrap_or_else(|| base.to_uppercase());

    let repo = OrganizationRepository::new(state.pool.clone());
    if repo.find_by_subdomain(&subdomain).await?.is_some() {
        return Err(ApiError::Conflict {
            message: format!("Subdomain '{}' is already taken", subdomain),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let mut organization = Organization::new(req.name.clone(), code, subdomain);
    if let Some(ref plan) = req.plan {
        organization.plan = OrganizationPlan::from_str(plan)?;
    }
    if let Some(max_users) = req.max_users {
        organization.max_users = max_users;
    }

    let mut tx = state.pool.begin().await?;
    OrganizationRepository::create(&mut tx, &organization).await?;
    for template in default_roles() {
        let mut role = Role::new(
            organization.id,
            template.name.to_string(),
            template.permissions,
        );
        role.description = Some(template.description.to_string());
        role.is_system = true;
        RoleRepository::create(&mut tx, &role).await?;
    }
    tx.commit().await?;

    log::info!("Created organization {} via REST API", organization.id);

    Ok(Json(OrganizationResponse {
        organization: organization.into(),
    }))
}

/// GET /api/v1/organizations/{id}
pub async fn get_organization(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
) -> ApiResult<Json<OrganizationResponse>> {
    let scope = ctx.authorize(Permission::OrgSettingsView)?;
    let organization_id = resolve_own_organization(&ctx, &scope, &id)?;

    let repo = OrganizationRepository::new(state.pool.clone());
    let organization = repo
        .find_by_id(organization_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Organization {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(OrganizationResponse {
        organization: organization.into(),
    }))
}

/// PUT /api/v1/organizations/{id}
pub async fn update_organization(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
    Json(req): Json<UpdateOrganizationRequest>,
) -> ApiResult<Json<OrganizationResponse>> {
    let scope = ctx.authorize(Permission::OrgSettingsUpdate)?;
    let organization_id = resolve_own_organization(&ctx, &scope, &id)?;

    let repo = OrganizationRepository::new(state.pool.clone());
    let mut organization = repo
        .find_by_id(organization_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Organization {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if let Some(name) = req.name {
        organization.name = name;
    }
    if let Some(code) = req.code {
        organization.code = code;
    }
    if let Some(ref plan) = req.plan {
        organization.plan = OrganizationPlan::from_str(plan)?;
    }
    // Deactivation and member limits are platform decisions
    if req.is_active.is_some() || req.max_users.is_some() {
        require_super_admin(&ctx.claims)?;
        if let Some(is_active) = req.is_active {
            organization.is_active = is_active;
        }
        if let Some(max_users) = req.max_users {
            organization.max_users = max_users;
        }
    }
    organization.updated_at = Utc::now();

    repo.update(&organization).await?;

    log::info!("Updated organization {} via REST API", organization.id);

    Ok(Json(OrganizationResponse {
        organization: organization.into(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn require_super_admin(claims: &cm_auth::Claims) -> ApiResult<()> {
    if claims.is_super_admin {
        Ok(())
    } else {
        Err(ApiError::Forbidden {
            message: "Super admin access required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Members may only address the organization their request resolved to;
/// super admins may address any.
fn resolve_own_organization(
    ctx: &OrgContext,
    scope: &crate::TenantScope,
    id: &str,
) -> ApiResult<Uuid> {
    let requested = Uuid::parse_str(id)?;
    if requested != scope.organization_id() && !ctx.claims.is_super_admin {
        return Err(ApiError::Forbidden {
            message: "Access denied to this organization".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(requested)
}
