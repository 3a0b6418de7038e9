#![allow(dead_code)]

//! Shared fixtures for cm-db repository tests

use cm_core::{Athlete, Organization, PermissionSet, Role, Team, User, UserOrganization};
use cm_db::{OrganizationRepository, RoleRepository, UserOrganizationRepository, UserRepository};

use chrono::NaiveDate;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Insert an organization with the given subdomain
pub async fn insert_organization(pool: &SqlitePool, subdomain: &str) -> Organization {
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

/// Insert a user account
pub async fn insert_user(pool: &SqlitePool, email: &str) -> User {
    let user = User::new(
        email.to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2hoYXNoaGFzaA".to_string(),
        "Test".to_string(),
        "User".to_string(),
    );

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    UserRepository::create(&mut conn, &user)
        .await
        .expect("Failed to insert user");

    user
}

/// Insert a role in the organization
pub async fn insert_role(
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

/// Link a user to an organization with a role
pub async fn insert_membership(
    pool: &SqlitePool,
    user_id: Uuid,
    organization_id: Uuid,
    role_id: Uuid,
    is_default: bool,
) -> UserOrganization {
    let link = UserOrganization::new(user_id, organization_id, role_id, is_default);

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    UserOrganizationRepository::create(&mut conn, &link)
        .await
        .expect("Failed to insert membership");

    link
}

/// Build (without inserting) an athlete for the organization
pub fn test_athlete(organization_id: Uuid, last_name: &str) -> Athlete {
    let mut athlete = Athlete::new(
        organization_id,
        "Gigi".to_string(),
        last_name.to_string(),
        NaiveDate::from_ymd_opt(2012, 5, 17).unwrap(),
    );
    athlete.email = Some(format!("{}@test.local", last_name.to_lowercase()));
    athlete
}

/// Build (without inserting) a team for the organization
pub fn test_team(organization_id: Uuid, name: &str) -> Team {
    Team::new(
        organization_id,
        name.to_string(),
        "U15".to_string(),
        "2025-26".to_string(),
    )
}
