mod common;

use common::{create_test_pool, insert_organization, insert_role};

use cm_core::{Permission, PermissionSet};
use cm_db::RoleRepository;

use googletest::prelude::*;

#[tokio::test]
async fn given_role_with_granted_set_when_reloaded_then_permissions_round_trip() {
    // Given
    let pool = create_test_pool().await;
    let organization = insert_organization(&pool, "demo").await;
    let permissions = PermissionSet::granted([Permission::AthleteView, Permission::PaymentRecord]);
    let role = insert_role(&pool, organization.id, "Staff", permissions.clone()).await;

    // When
    let repo = RoleRepository::new(pool.clone());
    let found = repo
        .find_by_id(organization.id, role.id)
        .await
        .unwrap()
        .unwrap();

    // Then
    assert_that!(found.permissions, eq(&permissions));
    assert_that!(found.name, eq("Staff"));
}

#[tokio::test]
async fn given_role_with_all_marker_when_reloaded_then_all_round_trips() {
    // Given
    let pool = create_test_pool().await;
    let organization = insert_organization(&pool, "demo").await;
    let role = insert_role(&pool, organization.id, "Admin", PermissionSet::All).await;

    // When
    let repo = RoleRepository::new(pool.clone());
    let found = repo
        .find_by_id(organization.id, role.id)
        .await
        .unwrap()
        .unwrap();

    // Then
    assert_that!(found.permissions, eq(&PermissionSet::All));
}

#[tokio::test]
async fn given_role_when_found_by_name_then_returned() {
    // Given
    let pool = create_test_pool().await;
    let organization = insert_organization(&pool, "demo").await;
    let role = insert_role(&pool, organization.id, "Coach", PermissionSet::empty()).await;

    // When
    let repo = RoleRepository::new(pool.clone());
    let found = repo.find_by_name(organization.id, "Coach").await.unwrap();

    // Then
    assert_that!(found, some(anything()));
    assert_that!(found.unwrap().id, eq(role.id));
}

#[tokio::test]
async fn given_role_in_other_organization_when_found_then_none() {
    // Given
    let pool = create_test_pool().await;
    let home = insert_organization(&pool, "home").await;
    let rival = insert_organization(&pool, "rival").await;
    let role = insert_role(&pool, rival.id, "Coach", PermissionSet::empty()).await;

    // When
    let repo = RoleRepository::new(pool.clone());
    let found = repo.find_by_id(home.id, role.id).await.unwrap();

    // Then
    assert_that!(found, none());
}
