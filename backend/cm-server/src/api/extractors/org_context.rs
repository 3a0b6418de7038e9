//! Organization resolution: the TokenVerified -> TenantResolved step.
//!
//! Resolution order, first match wins: explicit header, host
//! sub-domain, query parameter, the claim's own organization, and for
//! super admins the session-memoized or configured default. A request
//! that resolves nothing fails with ORGANIZATION_REQUIRED.

use crate::api::extractors::auth_session::AuthSession;
use crate::api::extractors::tenant_scope::TenantScope;
use crate::{ApiError, ApiResult, AppState};

use cm_auth::tenant::{ORGANIZATION_HEADER, ORGANIZATION_QUERY_PARAM, TenantSelector, select_tenant};
use cm_auth::{Claims, TenantContext};
use cm_core::{ErrorLocation, Organization, Permission};
use cm_db::{OrganizationRepository, RoleRepository, UserOrganizationRepository};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// Verified claims plus the organization resolved for this request.
/// The claims may differ from the raw token: resolving a different
/// organization swaps in that organization's role and permissions, and
/// super admins get their default organization filled in.
pub struct OrgContext {
    pub claims: Claims,
    pub organization: TenantContext,
}

impl OrgContext {
    /// Gate on a capability; success yields the tenant scope used for
    /// every subsequent read filter and write stamp.
    #[track_caller]
    pub fn authorize(&self, permission: Permission) -> ApiResult<TenantScope> {
        cm_auth::authorize(&self.claims, permission)?;
        Ok(TenantScope::new(self.organization.organization_id))
    }

    /// Gate on a role-name allow-list
    #[track_caller]
    pub fn authorize_role(&self, allowed_roles: &[&str]) -> ApiResult<TenantScope> {
        cm_auth::authorize_role(&self.claims, allowed_roles)?;
        Ok(TenantScope::new(self.organization.organization_id))
    }

    #[track_caller]
    pub fn user_id(&self) -> ApiResult<Uuid> {
        Ok(self.claims.user_id()?)
    }
}

impl FromRequestParts<AppState> for OrgContext {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let AuthSession(mut claims) = AuthSession::from_request_parts(parts, state).await?;

            let header = parts
                .headers
                .get(ORGANIZATION_HEADER)
                .and_then(|v| v.to_str().ok());
            let host = parts
                .headers
                .get(http::header::HOST)
                .and_then(|v| v.to_str().ok());
            let query = parts.uri.query().and_then(organization_query_param);

            let selector = select_tenant(header, host, query);

            let repo = OrganizationRepository::new(state.pool.clone());
            let organization = match selector {
                Some(TenantSelector::Header(id)) | Some(TenantSelector::Query(id)) => {
                    let id = Uuid::parse_str(&id).map_err(|e| ApiError::BadRequest {
                        message: format!("Invalid organization id '{}': {}", id, e),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                    repo.find_by_id(id)
                        .await?
                        .ok_or_else(|| organization_not_found(&id.to_string()))?
                }
                Some(TenantSelector::Subdomain(label)) => repo
                    .find_by_subdomain(&label)
                    .await?
                    .ok_or_else(|| organization_not_found(&label))?,
                None => resolve_fallback(state, &repo, &claims).await?,
            };

            if !organization.is_active {
                return Err(ApiError::Forbidden {
                    message: "Organization is not active".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            bind_claims(state, &mut claims, &organization).await?;

            Ok(OrgContext {
                claims,
                organization: TenantContext::new(
                    organization.id,
                    organization.name,
                    organization.code,
                ),
            })
        }
    }
}

/// No request source named an organization: fall back to the claim's
/// own, then (super admins only) the memoized or configured default.
async fn resolve_fallback(
    state: &AppState,
    repo: &OrganizationRepository,
    claims: &Claims,
) -> ApiResult<Organization> {
    if let Some(id) = claims.organization_uuid()? {
        return repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| organization_not_found(&id.to_string()));
    }

    if !claims.is_super_admin {
        return Err(ApiError::OrganizationRequired {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let user_id = claims.user_id()?;
    let default_id = match state.session_store.organization_for(user_id).await {
        Some(remembered) => remembered,
        None => state.auth_config.default_organization_uuid().ok_or_else(|| {
            ApiError::OrganizationRequired {
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    };

    let organization = repo
        .find_by_id(default_id)
        .await?
        .ok_or_else(|| organization_not_found(&default_id.to_string()))?;

    // Memoize so every later request in this session resolves the same
    state
        .session_store
        .remember_organization(user_id, organization.id)
        .await;

    Ok(organization)
}

/// Rebind the claims to the resolved organization. A member resolving
/// an organization other than the token's must hold a membership link
/// there; its role replaces the token's role and permissions.
async fn bind_claims(
    state: &AppState,
    claims: &mut Claims,
    organization: &Organization,
) -> ApiResult<()> {
    if claims.is_super_admin {
        claims.organization_id = Some(organization.id.to_string());
        return Ok(());
    }

    if claims.organization_uuid()? == Some(organization.id) {
        return Ok(());
    }

    let links = UserOrganizationRepository::new(state.pool.clone());
    let link = links
        .find(claims.user_id()?, organization.id)
        .await?
        .ok_or_else(|| ApiError::Forbidden {
            message: "Access denied to this organization".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let role = RoleRepository::new(state.pool.clone())
        .find_by_id(organization.id, link.role_id)
        .await?
        .ok_or_else(|| ApiError::Internal {
            message: "Membership references a missing role".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    claims.organization_id = Some(organization.id.to_string());
    claims.role = Some(role.name);
    claims.permissions = role.permissions;

    Ok(())
}

/// Pull `organizationId` out of a raw query string
fn organization_query_param(query: &str) -> Option<&str> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == ORGANIZATION_QUERY_PARAM).then_some(value)
    })
}

#[track_caller]
fn organization_not_found(identifier: &str) -> ApiError {
    ApiError::NotFound {
        message: format!("Organization {} not found", identifier),
        location: ErrorLocation::from(Location::caller()),
    }
}
