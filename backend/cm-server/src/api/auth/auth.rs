//! Authentication handlers: login, registration, token refresh and
//! organization switching.

use crate::{
    ApiError, ApiResult, AppState, AuthSession, LoginRequest, LoginResponse, MembershipDto,
    MyOrganizationsResponse, OrganizationChoice, OrganizationChoicesResponse, OrganizationSummary,
    RefreshRequest, RegisterRequest, SwitchOrganizationRequest, SwitchOrganizationResponse,
    TokenPairResponse, UserDto,
};

use cm_auth::{Claims, RefreshClaims, hash_password, verify_password};
use cm_core::{ErrorLocation, Organization, Role, User, UserOrganization, default_roles};
use cm_db::{
    OrganizationRepository, RoleRepository, UserOrganizationRepository, UserRepository,
};

use std::panic::Location;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use chrono::{Duration, Utc};
use uuid::Uuid;

/// Failed attempts before the account locks
const MAX_LOGIN_ATTEMPTS: i32 = 5;
/// Lockout length after too many failures
const LOCK_MINUTES: i64 = 30;
/// Role assigned when joining an existing organization
const JOIN_ROLE: &str = "Staff";
/// Role assigned to an organization's founder
const FOUNDER_ROLE: &str = "Admin";

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Response> {
    state.login_limiter.check(&req.email)?;

    let users = UserRepository::new(state.pool.clone());
    let user = users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let now = Utc::now();
    if user.is_locked(now) {
        return Err(ApiError::Unauthorized {
            message: "Account is locked. Please try again later.".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if !verify_password(&req.password, &user.password_hash)? {
        let attempts = user.failed_login_attempts + 1;
        let locked_until = if attempts >= MAX_LOGIN_ATTEMPTS {
            log::warn!(
                "Account locked for user {} after {} failed attempts",
                user.email,
                attempts
            );
            Some(now + Duration::minutes(LOCK_MINUTES))
        } else {
            None
        };
        users
            .record_failed_login(user.id, attempts, locked_until)
            .await?;
        return Err(invalid_credentials());
    }

    if !user.is_active {
        return Err(invalid_credentials());
    }

    users.record_successful_login(user.id, now).await?;

    // Super admins authenticate without a tenant
    if user.is_super_admin {
        let (access_token, refresh_token) = issue_super_admin_tokens(&state, &user)?;
        log::info!("Super admin {} logged in", user.email);
        return Ok(Json(LoginResponse {
            user: UserDto::from_user(&user, Some("SUPER_ADMIN")),
            organization: None,
            access_token,
            refresh_token,
        })
        .into_response());
    }

    let links = UserOrganizationRepository::new(state.pool.clone());
    let memberships = links.find_for_user(user.id).await?;

    let membership = match pick_membership(&req.organization_id, &memberships)? {
        Some(membership) => membership,
        None => {
            // Multiple organizations and no default: the client must choose
            let choices = membership_choices(&state, &memberships).await?;
            return Ok(Json(OrganizationChoicesResponse {
                requires_organization_selection: true,
                organizations: choices,
            })
            .into_response());
        }
    };

    let organization = load_active_organization(&state, membership.organization_id).await?;
    let role = load_role(&state, organization.id, membership.role_id).await?;

    let (access_token, refresh_token) = issue_member_tokens(&state, &user, organization.id, &role)?;

    log::info!(
        "User {} logged in to organization {}",
        user.email,
        organization.name
    );

    Ok(Json(LoginResponse {
        user: UserDto::from_user(&user, Some(&role.name)),
        organization: Some(OrganizationSummary::from(&organization)),
        access_token,
        refresh_token,
    })
    .into_response())
}

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<LoginResponse>> {
    validate_registration(&req)?;

    let users = UserRepository::new(state.pool.clone());
    if users.find_by_email(&req.email).await?.is_some() {
        return Err(ApiError::Conflict {
            message: "User with this email already exists".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let password_hash = hash_password(&req.password)?;
    let mut user = User::new(
        req.email.clone(),
        password_hash,
        req.first_name.clone(),
        req.last_name.clone(),
    );
    user.phone = req.phone.clone();

    let (organization, role) = if let Some(ref name) = req.organization_name {
        register_with_new_organization(&state, &user, name).await?
    } else {
        let Some(organization_id) = req.organization_id.as_deref() else {
            unreachable!("validate_registration ensures an organization id or name")
        };
        register_into_organization(&state, &user, organization_id).await?
    };

    let (access_token, refresh_token) = issue_member_tokens(&state, &user, organization.id, &role)?;

    log::info!(
        "New user registered: {} for organization {}",
        user.email,
        organization.name
    );

    Ok(Json(LoginResponse {
        user: UserDto::from_user(&user, Some(&role.name)),
        organization: Some(OrganizationSummary::from(&organization)),
        access_token,
        refresh_token,
    }))
}

/// POST /api/v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> ApiResult<Json<TokenPairResponse>> {
    let refresh_claims = state.refresh_codec.verify_refresh(&req.refresh_token)?;

    let user_id = Uuid::parse_str(&refresh_claims.sub).map_err(|_| ApiError::TokenMalformed {
        message: "Refresh token subject is not a valid UUID".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let users = UserRepository::new(state.pool.clone());
    let user = users
        .find_by_id(user_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| ApiError::Unauthorized {
            message: "Invalid refresh token".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if user.is_super_admin {
        let (access_token, refresh_token) = issue_super_admin_tokens(&state, &user)?;
        return Ok(Json(TokenPairResponse {
            access_token,
            refresh_token,
        }));
    }

    let organization_id = refresh_claims
        .organization_id
        .as_deref()
        .and_then(|id| Uuid::parse_str(id).ok())
        .ok_or_else(|| ApiError::Unauthorized {
            message: "Refresh token carries no organization".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let links = UserOrganizationRepository::new(state.pool.clone());
    let membership = links
        .find(user.id, organization_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized {
            message: "User no longer has access to this organization".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let role = load_role(&state, organization_id, membership.role_id).await?;
    let (access_token, refresh_token) = issue_member_tokens(&state, &user, organization_id, &role)?;

    Ok(Json(TokenPairResponse {
        access_token,
        refresh_token,
    }))
}

/// POST /api/v1/auth/switch-organization
///
/// Re-points the session at another organization the caller belongs to
/// and makes it the default for future logins.
pub async fn switch_organization(
    State(state): State<AppState>,
    AuthSession(claims): AuthSession,
    Json(req): Json<SwitchOrganizationRequest>,
) -> ApiResult<Json<SwitchOrganizationResponse>> {
    let user_id = claims.user_id()?;
    let organization_id = Uuid::parse_str(&req.organization_id)?;

    let organization = load_active_organization(&state, organization_id).await?;

    let users = UserRepository::new(state.pool.clone());
    let user = users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if user.is_super_admin {
        // No membership needed; remember the choice for this session
        state
            .session_store
            .remember_organization(user_id, organization.id)
            .await;
        let (access_token, refresh_token) = issue_super_admin_tokens(&state, &user)?;
        log::info!(
            "Super admin {} switched to organization {}",
            user.email,
            organization.name
        );
        return Ok(Json(SwitchOrganizationResponse {
            organization: OrganizationSummary::from(&organization),
            role: None,
            access_token,
            refresh_token,
        }));
    }

    let links = UserOrganizationRepository::new(state.pool.clone());
    let membership = links
        .find(user_id, organization.id)
        .await?
        .ok_or_else(|| ApiError::Forbidden {
            message: "User does not belong to this organization".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let role = load_role(&state, organization.id, membership.role_id).await?;

    let mut tx = state.pool.begin().await?;
    UserOrganizationRepository::set_default(&mut tx, user_id, organization.id).await?;
    tx.commit().await?;

    let (access_token, refresh_token) = issue_member_tokens(&state, &user, organization.id, &role)?;

    log::info!(
        "User {} switched to organization {}",
        user.email,
        organization.name
    );

    Ok(Json(SwitchOrganizationResponse {
        organization: OrganizationSummary::from(&organization),
        role: Some(role.name),
        access_token,
        refresh_token,
    }))
}

/// GET /api/v1/auth/organizations
///
/// The organizations the caller belongs to, for the org picker
pub async fn my_organizations(
    State(state): State<AppState>,
    AuthSession(claims): AuthSession,
) -> ApiResult<Json<MyOrganizationsResponse>> {
    let user_id = claims.user_id()?;

    let links = UserOrganizationRepository::new(state.pool.clone());
    let memberships = links.find_for_user(user_id).await?;

    let organizations = OrganizationRepository::new(state.pool.clone());
    let roles = RoleRepository::new(state.pool.clone());

    let mut result = Vec::with_capacity(memberships.len());
    for membership in &memberships {
        let Some(organization) = organizations.find_by_id(membership.organization_id).await?
        else {
            continue;
        };
        if !organization.is_active {
            continue;
        }
        let role = roles
            .find_by_id(membership.organization_id, membership.role_id)
            .await?;

        result.push(MembershipDto {
            id: organization.id.to_string(),
            name: organization.name,
            subdomain: organization.subdomain,
            role: role.map(|r| r.name).unwrap_or_default(),
            is_default: membership.is_default,
        });
    }

    Ok(Json(MyOrganizationsResponse {
        organizations: result,
    }))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized {
        message: "Invalid credentials".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

fn validate_registration(req: &RegisterRequest) -> ApiResult<()> {
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(ApiError::Validation {
            message: "A valid email address is required".to_string(),
            field: Some("email".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if req.password.len() < 8 {
        return Err(ApiError::Validation {
            message: "Password must be at least 8 characters".to_string(),
            field: Some("password".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if req.first_name.trim().is_empty() || req.last_name.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "First and last name are required".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if req.organization_id.is_none() && req.organization_name.is_none() {
        return Err(ApiError::BadRequest {
            message: "Organization ID or name required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

/// Pick the membership to log into: explicit request first, then a
/// single membership, then the default-flagged one. `Ok(None)` means
/// the client must choose.
fn pick_membership<'a>(
    requested: &Option<String>,
    memberships: &'a [UserOrganization],
) -> ApiResult<Option<&'a UserOrganization>> {
    if let Some(requested) = requested {
        let requested_id = Uuid::parse_str(requested)?;
        let membership = memberships
            .iter()
            .find(|m| m.organization_id == requested_id)
            .ok_or_else(|| ApiError::Forbidden {
                message: "User does not belong to this organization".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        return Ok(Some(membership));
    }

    match memberships {
        [] => Err(ApiError::Unauthorized {
            message: "User has no organization access".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
        [only] => Ok(Some(only)),
        many => Ok(many.iter().find(|m| m.is_default)),
    }
}

async fn membership_choices(
    state: &AppState,
    memberships: &[UserOrganization],
) -> ApiResult<Vec<OrganizationChoice>> {
    let organizations = OrganizationRepository::new(state.pool.clone());
    let roles = RoleRepository::new(state.pool.clone());

    let mut choices = Vec::with_capacity(memberships.len());
    for membership in memberships {
        let Some(organization) = organizations.find_by_id(membership.organization_id).await?
        else {
            continue;
        };
        if !organization.is_active {
            continue;
        }
        let role = roles
            .find_by_id(membership.organization_id, membership.role_id)
            .await?;

        choices.push(OrganizationChoice {
            id: organization.id.to_string(),
            name: organization.name,
            subdomain: organization.subdomain,
            role: role.map(|r| r.name).unwrap_or_default(),
        });
    }

    Ok(choices)
}

async fn load_active_organization(
    state: &AppState,
    organization_id: Uuid,
) -> ApiResult<Organization> {
    let organization = OrganizationRepository::new(state.pool.clone())
        .find_by_id(organization_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Organization {} not found", organization_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if !organization.is_active {
        return Err(ApiError::Forbidden {
            message: "Organization is not active".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(organization)
}

async fn load_role(state: &AppState, organization_id: Uuid, role_id: Uuid) -> ApiResult<Role> {
    RoleRepository::new(state.pool.clone())
        .find_by_id(organization_id, role_id)
        .await?
        .ok_or_else(|| ApiError::Internal {
            message: "Membership references a missing role".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

fn issue_member_tokens(
    state: &AppState,
    user: &User,
    organization_id: Uuid,
    role: &Role,
) -> ApiResult<(String, String)> {
    let now = Utc::now();
    let claims = Claims::for_member(
        user.id,
        user.email.clone(),
        organization_id,
        role.name.clone(),
        role.permissions.clone(),
        now,
        state.auth_config.access_ttl_secs,
    );
    let access_token = state.token_codec.issue(&claims)?;

    let refresh_claims = RefreshClaims::new(
        user.id,
        Some(organization_id),
        now,
        state.auth_config.refresh_ttl_secs,
    );
    let refresh_token = state.refresh_codec.issue_refresh(&refresh_claims)?;

    Ok((access_token, refresh_token))
}

fn issue_super_admin_tokens(state: &AppState, user: &User) -> ApiResult<(String, String)> {
    let now = Utc::now();
    let claims = Claims::for_super_admin(
        user.id,
        user.email.clone(),
        now,
        state.auth_config.access_ttl_secs,
    );
    let access_token = state.token_codec.issue(&claims)?;

    let refresh_claims = RefreshClaims::new(user.id, None, now, state.auth_config.refresh_ttl_secs);
    let refresh_token = state.refresh_codec.issue_refresh(&refresh_claims)?;

    Ok((access_token, refresh_token))
}

/// Create the organization, its default roles, the founding user and
/// the Admin membership in one transaction.
async fn register_with_new_organization(
    state: &AppState,
    user: &User,
    organization_name: &str,
) -> ApiResult<(Organization, Role)> {
    let organizations = OrganizationRepository::new(state.pool.clone());

    let base = Organization::subdomain_from_name(organization_name);
    if base.is_empty() {
        return Err(ApiError::Validation {
            message: "Organization name must contain letters or digits".to_string(),
            field: Some("organization_name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // Ensure the subdomain is unique
    let mut subdomain = base.clone();
    let mut counter = 1;
    while organizations.find_by_subdomain(&subdomain).await?.is_some() {
        subdomain = format!("{}-{}", base, counter);
        counter += 1;
    }

    let organization = Organization::new(
        organization_name.to_string(),
        base.to_uppercase(),
        subdomain,
    );

    let mut admin_role: Option<Role> = None;
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
        if role.name == FOUNDER_ROLE {
            admin_role = Some(role);
        }
    }

    let admin_role = admin_role.ok_or_else(|| ApiError::Internal {
        message: "Default role set has no Admin role".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    UserRepository::create(&mut tx, user).await?;
    let link = UserOrganization::new(user.id, organization.id, admin_role.id, true);
    UserOrganizationRepository::create(&mut tx, &link).await?;

    tx.commit().await?;

    log::info!(
        "New organization created: {} with admin {}",
        organization.name,
        user.email
    );

    Ok((organization, admin_role))
}

/// Join an existing organization with the default Staff role
async fn register_into_organization(
    state: &AppState,
    user: &User,
    organization_id: &str,
) -> ApiResult<(Organization, Role)> {
    let organization_id = Uuid::parse_str(organization_id).map_err(|_| ApiError::BadRequest {
        message: "Invalid organization ID".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let organizations = OrganizationRepository::new(state.pool.clone());
    let organization = organizations
        .find_by_id(organization_id)
        .await?
        .ok_or_else(|| ApiError::BadRequest {
            message: "Invalid organization ID".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let member_count = organizations.count_members(organization.id).await?;
    if member_count >= organization.max_users as i64 {
        return Err(ApiError::Forbidden {
            message: "Organization has reached its user limit".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let role = RoleRepository::new(state.pool.clone())
        .find_by_name(organization.id, JOIN_ROLE)
        .await?
        .ok_or_else(|| ApiError::Internal {
            message: "Default role not found for organization".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let mut tx = state.pool.begin().await?;
    UserRepository::create(&mut tx, user).await?;
    let link = UserOrganization::new(user.id, organization.id, role.id, true);
    UserOrganizationRepository::create(&mut tx, &link).await?;
    tx.commit().await?;

    Ok((organization, role))
}
