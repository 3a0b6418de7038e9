//! Login, registration, refresh and organization-switch flows.

mod common;

use crate::common::{
    api_request, create_test_app_state, response_json, seed_membership, seed_organization,
    seed_role, seed_user,
};

use axum::http::StatusCode;
use cm_core::PermissionSet;
use cm_server::build_router;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_login_success_returns_tokens_and_organization() {
    let state = create_test_app_state().await;
    let demo = seed_organization(&state.pool, "demo").await;
    let user = seed_user(&state.pool, "coach@test.local", "password123").await;
    let role = seed_role(&state.pool, demo.id, "Coach", PermissionSet::All).await;
    seed_membership(&state.pool, user.id, demo.id, role.id, true).await;

    let app = build_router(state.clone());
    let request = api_request(
        "POST",
        "/api/v1/auth/login",
        None,
        Some(json!({"email": "coach@test.local", "password": "password123"})),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["user"]["email"], "coach@test.local");
    assert_eq!(body["user"]["role"], "Coach");
    assert_eq!(body["organization"]["subdomain"], "demo");
    assert!(body["access_token"].as_str().is_some());
    assert!(body["refresh_token"].as_str().is_some());

    // The issued access token works against the API
    let token = body["access_token"].as_str().unwrap().to_string();
    let response = build_router(state.clone())
        .oneshot(api_request("GET", "/api/v1/teams", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let state = create_test_app_state().await;
    let demo = seed_organization(&state.pool, "demo").await;
    let user = seed_user(&state.pool, "coach@test.local", "password123").await;
    let role = seed_role(&state.pool, demo.id, "Coach", PermissionSet::All).await;
    seed_membership(&state.pool, user.id, demo.id, role.id, true).await;

    let app = build_router(state.clone());
    let request = api_request(
        "POST",
        "/api/v1/auth/login",
        None,
        Some(json!({"email": "coach@test.local", "password": "nope-nope"})),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_login_locks_account_after_repeated_failures() {
    let state = create_test_app_state().await;
    let demo = seed_organization(&state.pool, "demo").await;
    let user = seed_user(&state.pool, "coach@test.local", "password123").await;
    let role = seed_role(&state.pool, demo.id, "Coach", PermissionSet::All).await;
    seed_membership(&state.pool, user.id, demo.id, role.id, true).await;

    for _ in 0..5 {
        let response = build_router(state.clone())
            .oneshot(api_request(
                "POST",
                "/api/v1/auth/login",
                None,
                Some(json!({"email": "coach@test.local", "password": "wrong"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Correct password no longer helps while locked
    let response = build_router(state.clone())
        .oneshot(api_request(
            "POST",
            "/api/v1/auth/login",
            None,
            Some(json!({"email": "coach@test.local", "password": "password123"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("locked")
    );
}

#[tokio::test]
async fn test_login_with_multiple_organizations_and_no_default_requires_choice() {
    let state = create_test_app_state().await;
    let demo = seed_organization(&state.pool, "demo").await;
    let other = seed_organization(&state.pool, "other").await;
    let user = seed_user(&state.pool, "coach@test.local", "password123").await;
    let demo_role = seed_role(&state.pool, demo.id, "Coach", PermissionSet::All).await;
    let other_role = seed_role(&state.pool, other.id, "Coach", PermissionSet::All).await;
    seed_membership(&state.pool, user.id, demo.id, demo_role.id, false).await;
    seed_membership(&state.pool, user.id, other.id, other_role.id, false).await;

    let app = build_router(state.clone());
    let request = api_request(
        "POST",
        "/api/v1/auth/login",
        None,
        Some(json!({"email": "coach@test.local", "password": "password123"})),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["requires_organization_selection"], true);
    assert_eq!(body["organizations"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_register_new_organization_seeds_roles_and_grants_admin() {
    let state = create_test_app_state().await;

    let app = build_router(state.clone());
    let request = api_request(
        "POST",
        "/api/v1/auth/register",
        None,
        Some(json!({
            "email": "founder@test.local",
            "password": "password123",
            "first_name": "Fran",
            "last_name": "Founder",
            "organization_name": "Borgo United"
        })),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["user"]["role"], "Admin");
    assert_eq!(body["organization"]["subdomain"], "borgo-united");

    // The default role set exists in the new organization
    let token = body["access_token"].as_str().unwrap().to_string();
    let response = build_router(state.clone())
        .oneshot(api_request("GET", "/api/v1/roles", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let names: Vec<&str> = body["roles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Admin"));
    assert!(names.contains(&"Staff"));
    assert!(names.contains(&"Viewer"));
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let state = create_test_app_state().await;
    let demo = seed_organization(&state.pool, "demo").await;
    seed_role(&state.pool, demo.id, "Staff", PermissionSet::empty()).await;
    seed_user(&state.pool, "taken@test.local", "password123").await;

    let app = build_router(state.clone());
    let request = api_request(
        "POST",
        "/api/v1/auth/register",
        None,
        Some(json!({
            "email": "taken@test.local",
            "password": "password123",
            "first_name": "Dup",
            "last_name": "User",
            "organization_id": demo.id.to_string()
        })),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_refresh_issues_fresh_token_pair() {
    let state = create_test_app_state().await;
    let demo = seed_organization(&state.pool, "demo").await;
    let user = seed_user(&state.pool, "coach@test.local", "password123").await;
    let role = seed_role(&state.pool, demo.id, "Coach", PermissionSet::All).await;
    seed_membership(&state.pool, user.id, demo.id, role.id, true).await;

    let response = build_router(state.clone())
        .oneshot(api_request(
            "POST",
            "/api/v1/auth/login",
            None,
            Some(json!({"email": "coach@test.local", "password": "password123"})),
        ))
        .await
        .unwrap();
    let body = response_json(response).await;
    let refresh_token = body["refresh_token"].as_str().unwrap().to_string();

    let response = build_router(state.clone())
        .oneshot(api_request(
            "POST",
            "/api/v1/auth/refresh",
            None,
            Some(json!({"refresh_token": refresh_token})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let new_access = body["access_token"].as_str().unwrap().to_string();

    let response = build_router(state.clone())
        .oneshot(api_request("GET", "/api/v1/teams", Some(&new_access), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_switch_organization_updates_default_and_issues_tokens() {
    let state = create_test_app_state().await;
    let demo = seed_organization(&state.pool, "demo").await;
    let other = seed_organization(&state.pool, "other").await;
    let user = seed_user(&state.pool, "coach@test.local", "password123").await;
    let demo_role = seed_role(&state.pool, demo.id, "Coach", PermissionSet::All).await;
    let other_role = seed_role(&state.pool, other.id, "Manager", PermissionSet::All).await;
    seed_membership(&state.pool, user.id, demo.id, demo_role.id, true).await;
    seed_membership(&state.pool, user.id, other.id, other_role.id, false).await;

    let token = crate::common::member_token(&state, &user, demo.id, &demo_role);

    let response = build_router(state.clone())
        .oneshot(api_request(
            "POST",
            "/api/v1/auth/switch-organization",
            Some(&token),
            Some(json!({"organization_id": other.id.to_string()})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["organization"]["subdomain"], "other");
    assert_eq!(body["role"], "Manager");

    // The switched-to organization is now the default
    let links = cm_db::UserOrganizationRepository::new(state.pool.clone());
    let link = links.find(user.id, other.id).await.unwrap().unwrap();
    assert!(link.is_default);
    let old = links.find(user.id, demo.id).await.unwrap().unwrap();
    assert!(!old.is_default);
}

#[tokio::test]
async fn test_my_organizations_lists_memberships() {
    let state = create_test_app_state().await;
    let demo = seed_organization(&state.pool, "demo").await;
    let other = seed_organization(&state.pool, "other").await;
    let user = seed_user(&state.pool, "coach@test.local", "password123").await;
    let demo_role = seed_role(&state.pool, demo.id, "Coach", PermissionSet::All).await;
    let other_role = seed_role(&state.pool, other.id, "Viewer", PermissionSet::empty()).await;
    seed_membership(&state.pool, user.id, demo.id, demo_role.id, true).await;
    seed_membership(&state.pool, user.id, other.id, other_role.id, false).await;

    let token = crate::common::member_token(&state, &user, demo.id, &demo_role);

    let response = build_router(state.clone())
        .oneshot(api_request(
            "GET",
            "/api/v1/auth/organizations",
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["organizations"].as_array().unwrap().len(), 2);
}
