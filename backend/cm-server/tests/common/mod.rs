#![allow(dead_code)]

//! Test infrastructure for cm-server API tests

use cm_auth::{Claims, LoginRateLimiter};
use cm_config::AuthConfig;
use cm_core::{Organization, PermissionSet, Role, User, UserOrganization};
use cm_db::{OrganizationRepository, RoleRepository, UserOrganizationRepository, UserRepository};
use cm_server::AppState;

use axum::body::Body;
use axum::http::Request;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes!!";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/cm-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: Some(TEST_SECRET.to_string()),
        refresh_secret: None,
        access_ttl_secs: 3600,
        refresh_ttl_secs: 7 * 24 * 3600,
        default_organization_id: None,
    }
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    AppState::new(pool, test_auth_config(), LoginRateLimiter::default())
}

/// Create AppState with a configured super-admin default organization
pub async fn create_test_app_state_with_default_org(default_organization: Uuid) -> AppState {
    let pool = create_test_pool().await;
    let auth_config = AuthConfig {
        default_organization_id: Some(default_organization.to_string()),
        ..test_auth_config()
    };
    AppState::new(pool, auth_config, LoginRateLimiter::default())
}

/// Insert an organization with the given subdomain
pub async fn seed_organization(pool: &SqlitePool, subdomain: &str) -> Organization {
    let organization = Organization::new(
        format!("{} FC", subdomain),
        subdomain.to_uppercase(),
        subdomain.to_string(),
    );

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    OrganizationRepository::create(&mut conn, &organization)
        .await
        .expect("Failed to insert organization");

    organization
}

/// Insert an organization with a caller-chosen id (for wiring a
/// configured default organization to seeded data)
pub async fn seed_organization_with_id(
    pool: &SqlitePool,
    id: Uuid,
    subdomain: &str,
) -> Organization {
    let mut organization = Organization::new(
        format!("{} FC", subdomain),
        subdomain.to_uppercase(),
        subdomain.to_string(),
    );
    organization.id = id;

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    OrganizationRepository::create(&mut conn, &organization)
        .await
        .expect("Failed to insert organization");

    organization
}

/// Insert a user with the given password
pub async fn seed_user(pool: &SqlitePool, email: &str, password: &str) -> User {
    let password_hash = cm_auth::hash_password(password).expect("Failed to hash password");
    let user = User::new(
        email.to_string(),
        password_hash,
        "Test".to_string(),
        "User".to_string(),
    );

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    UserRepository::create(&mut conn, &user)
        .await
        .expect("Failed to insert user");

    user
}

/// Insert a super admin user
pub async fn seed_super_admin(pool: &SqlitePool, email: &str, password: &str) -> User {
    let password_hash = cm_auth::hash_password(password).expect("Failed to hash password");
    let mut user = User::new(
        email.to_string(),
        password_hash,
        "Super".to_string(),
        "Admin".to_string(),
    );
    user.is_super_admin = true;

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    UserRepository::create(&mut conn, &user)
        .await
        .expect("Failed to insert super admin");

    user
}

/// Insert a role
pub async fn seed_role(
    pool: &SqlitePool,
    organization_id: Uuid,
    name: &str,
    permissions: PermissionSet,
) -> Role {
    let role = Role::new(organization_id, name.to_string(), permissions);

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    RoleRepository::create(&mut conn, &role)
        .await
        .expect("Failed to insert role");

    role
}

/// Link a user to an organization
pub async fn seed_membership(
    pool: &SqlitePool,
    user_id: Uuid,
    organization_id: Uuid,
    role_id: Uuid,
    is_default: bool,
) {
    let link = UserOrganization::new(user_id, organization_id, role_id, is_default);

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    UserOrganizationRepository::create(&mut conn, &link)
        .await
        .expect("Failed to insert membership");
}

/// Access token for an organization member
pub fn member_token(state: &AppState, user: &User, organization_id: Uuid, role: &Role) -> String {
    let claims = Claims::for_member(
        user.id,
        user.email.clone(),
        organization_id,
        role.name.clone(),
        role.permissions.clone(),
        Utc::now(),
        3600,
    );
    state
        .token_codec
        .issue(&claims)
        .expect("Failed to issue test token")
}

/// Access token for a member who has not picked an organization yet
pub fn floating_member_token(state: &AppState, user: &User) -> String {
    let mut claims = Claims::for_member(
        user.id,
        user.email.clone(),
        Uuid::new_v4(),
        "Staff".to_string(),
        PermissionSet::empty(),
        Utc::now(),
        3600,
    );
    claims.organization_id = None;
    claims.role = None;
    state
        .token_codec
        .issue(&claims)
        .expect("Failed to issue test token")
}

/// Access token for a super admin
pub fn super_admin_token(state: &AppState, user: &User) -> String {
    let claims = Claims::for_super_admin(user.id, user.email.clone(), Utc::now(), 3600);
    state
        .token_codec
        .issue(&claims)
        .expect("Failed to issue test token")
}

/// Build a request with optional bearer token and JSON body
pub fn api_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Parse a response body as JSON
pub async fn response_json(response: axum::response::Response) -> serde_json::Value {
    use http_body_util::BodyExt;

    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
