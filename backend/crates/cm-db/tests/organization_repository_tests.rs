mod common;

use common::{create_test_pool, insert_membership, insert_organization, insert_role, insert_user};

use cm_core::PermissionSet;
use cm_db::OrganizationRepository;

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_inserted_organization_when_found_by_id_then_fields_round_trip() {
    // Given
    let pool = create_test_pool().await;
    let organization = insert_organization(&pool, "demo").await;
    let repo = OrganizationRepository::new(pool.clone());

    // When
    let result = repo.find_by_id(organization.id).await.unwrap();

    // Then
    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.id, eq(organization.id));
    assert_that!(found.name, eq(&organization.name));
    assert_that!(found.subdomain, eq("demo"));
    assert_that!(found.is_active, eq(true));
}

#[tokio::test]
async fn given_inserted_organization_when_found_by_subdomain_then_returned() {
    // Given
    let pool = create_test_pool().await;
    let organization = insert_organization(&pool, "demo").await;
    let repo = OrganizationRepository::new(pool.clone());

    // When
    let result = repo.find_by_subdomain("demo").await.unwrap();

    // Then
    assert_that!(result, some(anything()));
    assert_that!(result.unwrap().id, eq(organization.id));
}

#[tokio::test]
async fn given_empty_database_when_found_by_id_then_none() {
    // Given
    let pool = create_test_pool().await;
    let repo = OrganizationRepository::new(pool);

    // When
    let result = repo.find_by_id(Uuid::new_v4()).await.unwrap();

    // Then
    assert_that!(result, none());
}

#[tokio::test]
async fn given_two_members_when_counted_then_two() {
    // Given
    let pool = create_test_pool().await;
    let organization = insert_organization(&pool, "demo").await;
    let role = insert_role(&pool, organization.id, "Staff", PermissionSet::empty()).await;

    let first = insert_user(&pool, "one@test.local").await;
    let second = insert_user(&pool, "two@test.local").await;
    insert_membership(&pool, first.id, organization.id, role.id, true).await;
    insert_membership(&pool, second.id, organization.id, role.id, true).await;

    let repo = OrganizationRepository::new(pool.clone());

    // When
    let count = repo.count_members(organization.id).await.unwrap();

    // Then
    assert_that!(count, eq(2));
}

#[tokio::test]
async fn given_updated_organization_when_reloaded_then_changes_persisted() {
    // Given
    let pool = create_test_pool().await;
    let mut organization = insert_organization(&pool, "demo").await;
    let repo = OrganizationRepository::new(pool.clone());

    // When
    organization.name = "Renamed FC".to_string();
    organization.is_active = false;
    repo.update(&organization).await.unwrap();

    // Then
    let found = repo.find_by_id(organization.id).await.unwrap().unwrap();
    assert_that!(found.name, eq("Renamed FC"));
    assert_that!(found.is_active, eq(false));
}
