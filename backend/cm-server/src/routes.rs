use crate::health;
use crate::AppState;

use crate::api::athletes::athletes::{
    create_athlete, delete_athlete, get_athlete, list_athletes, update_athlete,
};
use crate::api::auth::auth::{login, my_organizations, refresh, register, switch_organization};
use crate::api::dashboard::dashboard::dashboard_summary;
use crate::api::documents::documents::{
    create_document, delete_document, get_document, list_documents, list_expiring_documents,
    update_document,
};
use crate::api::matches::matches::{
    create_match, delete_match, get_match, list_matches, list_upcoming_matches,
    record_match_result, update_match,
};
use crate::api::members::members::{list_members, remove_member, update_member_role};
use crate::api::organizations::organizations::{
    create_organization, get_organization, list_organizations, update_organization,
};
use crate::api::payments::payments::{
    create_payment, delete_payment, get_payment, list_payments, record_payment, update_payment,
};
use crate::api::roles::roles::{create_role, delete_role, list_roles, update_role};
use crate::api::teams::teams::{
    create_team, delete_team, get_team, get_team_roster, list_teams, update_team,
};
use crate::api::transport::transport::{
    create_route, create_zone, delete_route, delete_zone, list_routes, list_zones, update_route,
    update_zone,
};

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Versioned API
        .nest("/api/v1", api_router())
        // Add shared state
        .with_state(state)
        // CORS middleware for the browser dashboard
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

fn api_router() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/refresh", post(refresh))
        .route("/auth/switch-organization", post(switch_organization))
        .route("/auth/organizations", get(my_organizations))
        // Organizations
        .route("/organizations", get(list_organizations).post(create_organization))
        .route(
            "/organizations/{id}",
            get(get_organization).put(update_organization),
        )
        // Roles
        .route("/roles", get(list_roles).post(create_role))
        .route("/roles/{id}", put(update_role).delete(delete_role))
        // Members
        .route("/users", get(list_members))
        .route("/users/{user_id}/role", put(update_member_role))
        .route("/users/{user_id}", delete(remove_member))
        // Athletes
        .route("/athletes", get(list_athletes).post(create_athlete))
        .route(
            "/athletes/{id}",
            get(get_athlete).put(update_athlete).delete(delete_athlete),
        )
        // Teams
        .route("/teams", get(list_teams).post(create_team))
        .route(
            "/teams/{id}",
            get(get_team).put(update_team).delete(delete_team),
        )
        .route("/teams/{id}/athletes", get(get_team_roster))
        // Documents
        .route("/documents", get(list_documents).post(create_document))
        .route("/documents/expiring", get(list_expiring_documents))
        .route(
            "/documents/{id}",
            get(get_document).put(update_document).delete(delete_document),
        )
        // Payments
        .route("/payments", get(list_payments).post(create_payment))
        .route(
            "/payments/{id}",
            get(get_payment).put(update_payment).delete(delete_payment),
        )
        .route("/payments/{id}/record", post(record_payment))
        // Matches
        .route("/matches", get(list_matches).post(create_match))
        .route("/matches/upcoming", get(list_upcoming_matches))
        .route(
            "/matches/{id}",
            get(get_match).put(update_match).delete(delete_match),
        )
        .route("/matches/{id}/result", post(record_match_result))
        // Transport
        .route("/transport/zones", get(list_zones).post(create_zone))
        .route(
            "/transport/zones/{id}",
            put(update_zone).delete(delete_zone),
        )
        .route("/transport/routes", get(list_routes).post(create_route))
        .route(
            "/transport/routes/{id}",
            put(update_route).delete(delete_route),
        )
        // Dashboard
        .route("/dashboard/summary", get(dashboard_summary))
}
