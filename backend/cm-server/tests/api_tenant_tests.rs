//! Organization resolution and tenant isolation across the API:
//! selector precedence, super-admin default fallback with session
//! memoization, the organization-required failure, and write stamping.

mod common;

use crate::common::{
    api_request, create_test_app_state, create_test_app_state_with_default_org,
    floating_member_token, member_token, response_json, seed_membership, seed_organization,
    seed_role, seed_super_admin, seed_user,
};

use axum::http::StatusCode;
use cm_core::{Permission, PermissionSet};
use cm_db::{AthleteFilter, AthleteRepository};
use cm_server::build_router;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_subdomain_resolves_tenant() {
    // Scenario A: no header, no query - host sub-domain wins
    let state = create_test_app_state().await;
    let demo = seed_organization(&state.pool, "demo").await;
    let other = seed_organization(&state.pool, "other").await;

    let user = seed_user(&state.pool, "coach@test.local", "password123").await;
    let role = seed_role(&state.pool, demo.id, "Admin", PermissionSet::All).await;
    let other_role = seed_role(&state.pool, other.id, "Admin", PermissionSet::All).await;
    seed_membership(&state.pool, user.id, demo.id, role.id, true).await;
    seed_membership(&state.pool, user.id, other.id, other_role.id, false).await;

    // Token carries the OTHER organization; the sub-domain must win
    let token = member_token(&state, &user, other.id, &other_role);
    let app = build_router(state.clone());

    let mut request = api_request(
        "POST",
        "/api/v1/athletes",
        Some(&token),
        Some(json!({
            "first_name": "Gigi",
            "last_name": "Rossi",
            "birth_date": "2012-05-17"
        })),
    );
    request
        .headers_mut()
        .insert("Host", "demo.app.example.com".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["athlete"]["organization_id"], demo.id.to_string());
}

#[tokio::test]
async fn test_header_wins_over_subdomain_and_query() {
    let state = create_test_app_state().await;
    let demo = seed_organization(&state.pool, "demo").await;
    let other = seed_organization(&state.pool, "other").await;

    let user = seed_user(&state.pool, "coach@test.local", "password123").await;
    let demo_role = seed_role(&state.pool, demo.id, "Admin", PermissionSet::All).await;
    let other_role = seed_role(&state.pool, other.id, "Admin", PermissionSet::All).await;
    seed_membership(&state.pool, user.id, demo.id, demo_role.id, true).await;
    seed_membership(&state.pool, user.id, other.id, other_role.id, false).await;

    let token = member_token(&state, &user, demo.id, &demo_role);
    let app = build_router(state.clone());

    // Header names `other`, sub-domain and query name `demo`
    let uri = format!("/api/v1/teams?organizationId={}", demo.id);
    let mut request = api_request("GET", &uri, Some(&token), None);
    request
        .headers_mut()
        .insert("X-Organization-Id", other.id.to_string().parse().unwrap());
    request
        .headers_mut()
        .insert("Host", "demo.app.example.com".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Observable effect: a team created through the same selectors
    // lands in `other`, not `demo`
    let mut create = api_request(
        "POST",
        "/api/v1/teams",
        Some(&token),
        Some(json!({"name": "U15", "category": "U15", "season": "2025-26"})),
    );
    create
        .headers_mut()
        .insert("X-Organization-Id", other.id.to_string().parse().unwrap());
    create
        .headers_mut()
        .insert("Host", "demo.app.example.com".parse().unwrap());

    let response = build_router(state.clone()).oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["team"]["organization_id"], other.id.to_string());
}

#[tokio::test]
async fn test_query_parameter_resolves_when_host_is_reserved() {
    let state = create_test_app_state().await;
    let demo = seed_organization(&state.pool, "demo").await;
    let other = seed_organization(&state.pool, "other").await;

    let user = seed_user(&state.pool, "coach@test.local", "password123").await;
    let demo_role = seed_role(&state.pool, demo.id, "Admin", PermissionSet::All).await;
    let other_role = seed_role(&state.pool, other.id, "Admin", PermissionSet::All).await;
    seed_membership(&state.pool, user.id, demo.id, demo_role.id, true).await;
    seed_membership(&state.pool, user.id, other.id, other_role.id, false).await;

    let token = member_token(&state, &user, other.id, &other_role);
    let app = build_router(state.clone());

    let uri = format!("/api/v1/dashboard/summary?organizationId={}", demo.id);
    let mut request = api_request("GET", &uri, Some(&token), None);
    request
        .headers_mut()
        .insert("Host", "www.example.com".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_super_admin_falls_back_to_default_and_memoizes() {
    // Scenario B: reserved host label, no other source - the configured
    // default applies and is remembered for the session
    let demo_id = uuid::Uuid::new_v4();
    let state = create_test_app_state_with_default_org(demo_id).await;
    crate::common::seed_organization_with_id(&state.pool, demo_id, "demo").await;

    let admin = seed_super_admin(&state.pool, "root@test.local", "password123").await;
    let token = crate::common::super_admin_token(&state, &admin);

    let app = build_router(state.clone());
    let mut request = api_request("GET", "/api/v1/athletes", Some(&token), None);
    request
        .headers_mut()
        .insert("Host", "www.example.com".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The chosen organization is memoized for the session
    assert_eq!(
        state.session_store.organization_for(admin.id).await,
        Some(demo_id)
    );

    // And a second identical request resolves the same organization
    let mut request = api_request("GET", "/api/v1/athletes", Some(&token), None);
    request
        .headers_mut()
        .insert("Host", "www.example.com".parse().unwrap());
    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_member_without_resolvable_organization_gets_400() {
    // Scenario C
    let state = create_test_app_state().await;
    let user = seed_user(&state.pool, "lost@test.local", "password123").await;
    let token = floating_member_token(&state, &user);

    let app = build_router(state.clone());
    let mut request = api_request("GET", "/api/v1/athletes", Some(&token), None);
    request
        .headers_mut()
        .insert("Host", "www.example.com".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "ORGANIZATION_REQUIRED");
}

#[tokio::test]
async fn test_client_supplied_organization_id_is_overwritten_on_create() {
    // Scenario D
    let state = create_test_app_state().await;
    let demo = seed_organization(&state.pool, "demo").await;
    let rival = seed_organization(&state.pool, "rival").await;

    let user = seed_user(&state.pool, "coach@test.local", "password123").await;
    let role = seed_role(&state.pool, demo.id, "Admin", PermissionSet::All).await;
    seed_membership(&state.pool, user.id, demo.id, role.id, true).await;

    let token = member_token(&state, &user, demo.id, &role);
    let app = build_router(state.clone());

    let request = api_request(
        "POST",
        "/api/v1/athletes",
        Some(&token),
        Some(json!({
            "first_name": "Gigi",
            "last_name": "Rossi",
            "birth_date": "2012-05-17",
            "organization_id": rival.id.to_string()
        })),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["athlete"]["organization_id"], demo.id.to_string());

    // Nothing leaked into the rival organization
    let rivals = AthleteRepository::new(state.pool.clone())
        .find_all(rival.id, &AthleteFilter::default())
        .await
        .unwrap();
    assert!(rivals.is_empty());
}

#[tokio::test]
async fn test_member_cannot_resolve_foreign_organization() {
    let state = create_test_app_state().await;
    let demo = seed_organization(&state.pool, "demo").await;
    let rival = seed_organization(&state.pool, "rival").await;

    let user = seed_user(&state.pool, "coach@test.local", "password123").await;
    let role = seed_role(&state.pool, demo.id, "Admin", PermissionSet::All).await;
    seed_membership(&state.pool, user.id, demo.id, role.id, true).await;

    let token = member_token(&state, &user, demo.id, &role);
    let app = build_router(state.clone());

    let mut request = api_request("GET", "/api/v1/athletes", Some(&token), None);
    request
        .headers_mut()
        .insert("X-Organization-Id", rival.id.to_string().parse().unwrap());

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_permission_gate_forbids_and_super_admin_bypasses() {
    let state = create_test_app_state().await;
    let demo = seed_organization(&state.pool, "demo").await;

    let user = seed_user(&state.pool, "viewer@test.local", "password123").await;
    let viewer = seed_role(
        &state.pool,
        demo.id,
        "Viewer",
        PermissionSet::granted([Permission::AthleteView]),
    )
    .await;
    seed_membership(&state.pool, user.id, demo.id, viewer.id, true).await;

    let token = member_token(&state, &user, demo.id, &viewer);
    let body = json!({
        "first_name": "Gigi",
        "last_name": "Rossi",
        "birth_date": "2012-05-17"
    });

    // Viewer can read
    let response = build_router(state.clone())
        .oneshot(api_request("GET", "/api/v1/athletes", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // ...but not create
    let response = build_router(state.clone())
        .oneshot(api_request(
            "POST",
            "/api/v1/athletes",
            Some(&token),
            Some(body.clone()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Super admin bypasses the permission gate entirely
    let admin = seed_super_admin(&state.pool, "root@test.local", "password123").await;
    let admin_token = crate::common::super_admin_token(&state, &admin);

    let mut request = api_request("POST", "/api/v1/athletes", Some(&admin_token), Some(body));
    request
        .headers_mut()
        .insert("X-Organization-Id", demo.id.to_string().parse().unwrap());

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_expired_and_malformed_tokens() {
    let state = create_test_app_state().await;
    seed_organization(&state.pool, "demo").await;

    // Missing header
    let response = build_router(state.clone())
        .oneshot(api_request("GET", "/api/v1/athletes", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    // Expired token
    let user = seed_user(&state.pool, "late@test.local", "password123").await;
    let mut claims = cm_auth::Claims::for_super_admin(
        user.id,
        user.email.clone(),
        chrono::Utc::now(),
        3600,
    );
    claims.exp = chrono::Utc::now().timestamp() - 3600;
    let expired = state.token_codec.issue(&claims).unwrap();

    let response = build_router(state.clone())
        .oneshot(api_request("GET", "/api/v1/athletes", Some(&expired), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "TOKEN_EXPIRED");

    // Malformed token
    let response = build_router(state.clone())
        .oneshot(api_request("GET", "/api/v1/athletes", Some("not.a.jwt"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "TOKEN_MALFORMED");
}
