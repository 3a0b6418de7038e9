//! Athlete CRUD through the API.

mod common;

use crate::common::{
    api_request, create_test_app_state, member_token, response_json, seed_membership,
    seed_organization, seed_role, seed_user,
};

use axum::http::StatusCode;
use cm_core::PermissionSet;
use cm_server::build_router;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

async fn setup() -> (cm_server::AppState, String) {
    let state = create_test_app_state().await;
    let demo = seed_organization(&state.pool, "demo").await;
    let user = seed_user(&state.pool, "coach@test.local", "password123").await;
    let role = seed_role(&state.pool, demo.id, "Admin", PermissionSet::All).await;
    seed_membership(&state.pool, user.id, demo.id, role.id, true).await;
    let token = member_token(&state, &user, demo.id, &role);
    (state, token)
}

#[tokio::test]
async fn test_create_and_get_athlete() {
    let (state, token) = setup().await;

    let response = build_router(state.clone())
        .oneshot(api_request(
            "POST",
            "/api/v1/athletes",
            Some(&token),
            Some(json!({
                "first_name": "Gigi",
                "last_name": "Rossi",
                "birth_date": "2012-05-17",
                "fiscal_code": "RSSGGI12E17H501X"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let id = body["athlete"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["athlete"]["status"], "active");

    let response = build_router(state.clone())
        .oneshot(api_request(
            "GET",
            &format!("/api/v1/athletes/{}", id),
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["athlete"]["last_name"], "Rossi");
    assert_eq!(body["athlete"]["birth_date"], "2012-05-17");
}

#[tokio::test]
async fn test_create_athlete_invalid_birth_date_is_validation_error() {
    let (state, token) = setup().await;

    let response = build_router(state.clone())
        .oneshot(api_request(
            "POST",
            "/api/v1/athletes",
            Some(&token),
            Some(json!({
                "first_name": "Gigi",
                "last_name": "Rossi",
                "birth_date": "17/05/2012"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "birth_date");
}

#[tokio::test]
async fn test_list_athletes_with_filters_and_pagination() {
    let (state, token) = setup().await;

    for (first, last) in [("Anna", "Alfa"), ("Bruno", "Bravo"), ("Carla", "Charlie")] {
        let response = build_router(state.clone())
            .oneshot(api_request(
                "POST",
                "/api/v1/athletes",
                Some(&token),
                Some(json!({
                    "first_name": first,
                    "last_name": last,
                    "birth_date": "2012-05-17"
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Search filter
    let response = build_router(state.clone())
        .oneshot(api_request(
            "GET",
            "/api/v1/athletes?search=brav",
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["athletes"].as_array().unwrap().len(), 1);
    assert_eq!(body["athletes"][0]["last_name"], "Bravo");

    // Pagination
    let response = build_router(state.clone())
        .oneshot(api_request(
            "GET",
            "/api/v1/athletes?page=2&limit=2",
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["athletes"].as_array().unwrap().len(), 1);
    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["pagination"]["total_pages"], 2);
}

#[tokio::test]
async fn test_update_athlete_status() {
    let (state, token) = setup().await;

    let response = build_router(state.clone())
        .oneshot(api_request(
            "POST",
            "/api/v1/athletes",
            Some(&token),
            Some(json!({
                "first_name": "Gigi",
                "last_name": "Rossi",
                "birth_date": "2012-05-17"
            })),
        ))
        .await
        .unwrap();
    let body = response_json(response).await;
    let id = body["athlete"]["id"].as_str().unwrap().to_string();

    let response = build_router(state.clone())
        .oneshot(api_request(
            "PUT",
            &format!("/api/v1/athletes/{}", id),
            Some(&token),
            Some(json!({"status": "injured", "uses_transport": true})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["athlete"]["status"], "injured");
    assert_eq!(body["athlete"]["uses_transport"], true);

    // Unknown status string is rejected
    let response = build_router(state.clone())
        .oneshot(api_request(
            "PUT",
            &format!("/api/v1/athletes/{}", id),
            Some(&token),
            Some(json!({"status": "retired-to-the-beach"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_athlete_then_get_returns_404() {
    let (state, token) = setup().await;

    let response = build_router(state.clone())
        .oneshot(api_request(
            "POST",
            "/api/v1/athletes",
            Some(&token),
            Some(json!({
                "first_name": "Gigi",
                "last_name": "Rossi",
                "birth_date": "2012-05-17"
            })),
        ))
        .await
        .unwrap();
    let body = response_json(response).await;
    let id = body["athlete"]["id"].as_str().unwrap().to_string();

    let response = build_router(state.clone())
        .oneshot(api_request(
            "DELETE",
            &format!("/api/v1/athletes/{}", id),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["deleted_id"], id);

    let response = build_router(state.clone())
        .oneshot(api_request(
            "GET",
            &format!("/api/v1/athletes/{}", id),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_athlete_invalid_uuid_is_validation_error() {
    let (state, token) = setup().await;

    let response = build_router(state.clone())
        .oneshot(api_request(
            "GET",
            "/api/v1/athletes/not-a-uuid",
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_athlete_unknown_id_is_not_found() {
    let (state, token) = setup().await;

    let response = build_router(state.clone())
        .oneshot(api_request(
            "GET",
            &format!("/api/v1/athletes/{}", Uuid::new_v4()),
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
