mod common;

use common::{create_test_pool, insert_organization, test_athlete};

use cm_core::AthleteStatus;
use cm_db::{AthleteFilter, AthleteRepository};

use googletest::prelude::*;

#[tokio::test]
async fn given_created_athlete_when_found_by_id_then_fields_round_trip() {
    // Given
    let pool = create_test_pool().await;
    let organization = insert_organization(&pool, "demo").await;
    let athlete = test_athlete(organization.id, "Rossi");
    let repo = AthleteRepository::new(pool.clone());

    // When
    repo.create(&athlete).await.unwrap();

    // Then
    let result = repo.find_by_id(organization.id, athlete.id).await.unwrap();
    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.last_name, eq("Rossi"));
    assert_that!(found.birth_date, eq(athlete.birth_date));
    assert_that!(found.status, eq(AthleteStatus::Active));
    assert_that!(found.organization_id, eq(organization.id));
}

#[tokio::test]
async fn given_search_filter_when_listed_then_only_matches_returned() {
    // Given
    let pool = create_test_pool().await;
    let organization = insert_organization(&pool, "demo").await;
    let repo = AthleteRepository::new(pool.clone());

    repo.create(&test_athlete(organization.id, "Rossi")).await.unwrap();
    repo.create(&test_athlete(organization.id, "Bianchi")).await.unwrap();

    // When
    let filter = AthleteFilter {
        search: Some("ross".to_string()),
        ..AthleteFilter::default()
    };
    let found = repo.find_all(organization.id, &filter).await.unwrap();

    // Then
    assert_that!(found.len(), eq(1));
    assert_that!(found[0].last_name, eq("Rossi"));
}

#[tokio::test]
async fn given_status_filter_when_listed_then_only_matching_status_returned() {
    // Given
    let pool = create_test_pool().await;
    let organization = insert_organization(&pool, "demo").await;
    let repo = AthleteRepository::new(pool.clone());

    let mut injured = test_athlete(organization.id, "Rossi");
    injured.status = AthleteStatus::Injured;
    repo.create(&injured).await.unwrap();
    repo.create(&test_athlete(organization.id, "Bianchi")).await.unwrap();

    // When
    let filter = AthleteFilter {
        status: Some(AthleteStatus::Injured),
        ..AthleteFilter::default()
    };
    let found = repo.find_all(organization.id, &filter).await.unwrap();

    // Then
    assert_that!(found.len(), eq(1));
    assert_that!(found[0].status, eq(AthleteStatus::Injured));
}

#[tokio::test]
async fn given_limit_and_offset_when_listed_then_paginated() {
    // Given
    let pool = create_test_pool().await;
    let organization = insert_organization(&pool, "demo").await;
    let repo = AthleteRepository::new(pool.clone());

    repo.create(&test_athlete(organization.id, "Alfa")).await.unwrap();
    repo.create(&test_athlete(organization.id, "Bravo")).await.unwrap();
    repo.create(&test_athlete(organization.id, "Charlie")).await.unwrap();

    // When
    let filter = AthleteFilter {
        limit: Some(2),
        offset: Some(1),
        ..AthleteFilter::default()
    };
    let page = repo.find_all(organization.id, &filter).await.unwrap();
    let total = repo
        .count_filtered(organization.id, &AthleteFilter::default())
        .await
        .unwrap();

    // Then
    assert_that!(page.len(), eq(2));
    assert_that!(page[0].last_name, eq("Bravo"));
    assert_that!(total, eq(3));
}

#[tokio::test]
async fn given_updated_athlete_when_reloaded_then_changes_persisted() {
    // Given
    let pool = create_test_pool().await;
    let organization = insert_organization(&pool, "demo").await;
    let mut athlete = test_athlete(organization.id, "Rossi");
    let repo = AthleteRepository::new(pool.clone());
    repo.create(&athlete).await.unwrap();

    // When
    athlete.status = AthleteStatus::Suspended;
    athlete.uses_transport = true;
    repo.update(&athlete).await.unwrap();

    // Then
    let found = repo.find_by_id(organization.id, athlete.id).await.unwrap().unwrap();
    assert_that!(found.status, eq(AthleteStatus::Suspended));
    assert_that!(found.uses_transport, eq(true));
}

#[tokio::test]
async fn given_deleted_athlete_when_found_then_none() {
    // Given
    let pool = create_test_pool().await;
    let organization = insert_organization(&pool, "demo").await;
    let athlete = test_athlete(organization.id, "Rossi");
    let repo = AthleteRepository::new(pool.clone());
    repo.create(&athlete).await.unwrap();

    // When
    repo.delete(organization.id, athlete.id).await.unwrap();

    // Then
    let result = repo.find_by_id(organization.id, athlete.id).await.unwrap();
    assert_that!(result, none());
}
