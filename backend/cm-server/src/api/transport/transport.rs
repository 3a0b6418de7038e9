//! Transport REST API handlers: pickup zones and the bus routes that
//! serve them.

use crate::api::extractors::org_context::OrgContext;
use crate::{
    ApiError, ApiResult, AppState, BusRouteDto, BusRouteListResponse, CreateBusRouteRequest,
    CreateTransportZoneRequest, DeleteResponse, TransportZoneDto, TransportZoneListResponse,
    UpdateBusRouteRequest, UpdateTransportZoneRequest,
};

use cm_core::{BusRoute, ErrorLocation, Permission, TransportZone};
use cm_db::{BusRouteRepository, TransportZoneRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use uuid::Uuid;

// =============================================================================
// Zone handlers
// =============================================================================

/// GET /api/v1/transport/zones
pub async fn list_zones(
    State(state): State<AppState>,
    ctx: OrgContext,
) -> ApiResult<Json<TransportZoneListResponse>> {
    let scope = ctx.authorize(Permission::TransportView)?;

    let repo = TransportZoneRepository::new(state.pool.clone());
    let zones = repo.find_all(scope.organization_id()).await?;

    Ok(Json(TransportZoneListResponse {
        zones: zones.into_iter().map(TransportZoneDto::from).collect(),
    }))
}

/// POST /api/v1/transport/zones
pub async fn create_zone(
    State(state): State<AppState>,
    ctx: OrgContext,
    Json(req): Json<CreateTransportZoneRequest>,
) -> ApiResult<Json<TransportZoneDto>> {
    let scope = ctx.authorize(Permission::TransportManage)?;

    if req.name.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Zone name is required".to_string(),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let zone = TransportZone::new(
        scope.organization_id(),
        req.name.clone(),
        req.monthly_fee_cents.unwrap_or(0),
    );

    let repo = TransportZoneRepository::new(state.pool.clone());
    repo.create(&zone).await?;

    log::info!("Created transport zone {} via REST API", zone.id);

    Ok(Json(zone.into()))
}

/// PUT /api/v1/transport/zones/{id}
pub async fn update_zone(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
    Json(req): Json<UpdateTransportZoneRequest>,
) -> ApiResult<Json<TransportZoneDto>> {
    let scope = ctx.authorize(Permission::TransportManage)?;
    let zone_id = Uuid::parse_str(&id)?;

    let repo = TransportZoneRepository::new(state.pool.clone());
    let mut zone = repo
        .find_by_id(scope.organization_id(), zone_id)
        .await?
        .ok_or_else(|| zone_not_found(&id))?;

    if let Some(name) = req.name {
        zone.name = name;
    }
    if let Some(monthly_fee_cents) = req.monthly_fee_cents {
        zone.monthly_fee_cents = monthly_fee_cents;
    }
    zone.updated_at = Utc::now();

    repo.update(&zone).await?;

    log::info!("Updated transport zone {} via REST API", zone.id);

    Ok(Json(zone.into()))
}

/// DELETE /api/v1/transport/zones/{id}
///
/// Fails while bus routes still serve the zone.
pub async fn delete_zone(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let scope = ctx.authorize(Permission::TransportManage)?;
    let zone_id = Uuid::parse_str(&id)?;

    let repo = TransportZoneRepository::new(state.pool.clone());
    repo.find_by_id(scope.organization_id(), zone_id)
        .await?
        .ok_or_else(|| zone_not_found(&id))?;

    let routes = BusRouteRepository::new(state.pool.clone())
        .find_by_zone(scope.organization_id(), zone_id)
        .await?;
    if !routes.is_empty() {
        return Err(ApiError::Validation {
            message: format!(
                "Cannot delete zone with {} bus route(s). Delete them first.",
                routes.len()
            ),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    repo.delete(scope.organization_id(), zone_id).await?;

    log::info!("Deleted transport zone {} via REST API", zone_id);

    Ok(Json(DeleteResponse {
        deleted_id: zone_id.to_string(),
    }))
}

// =============================================================================
// Route handlers
// =============================================================================

/// GET /api/v1/transport/routes
pub async fn list_routes(
    State(state): State<AppState>,
    ctx: OrgContext,
) -> ApiResult<Json<BusRouteListResponse>> {
    let scope = ctx.authorize(Permission::TransportView)?;

    let repo = BusRouteRepository::new(state.pool.clone());
    let routes = repo.find_all(scope.organization_id()).await?;

    Ok(Json(BusRouteListResponse {
        routes: routes.into_iter().map(BusRouteDto::from).collect(),
    }))
}

/// POST /api/v1/transport/routes
pub async fn create_route(
    State(state): State<AppState>,
    ctx: OrgContext,
    Json(req): Json<CreateBusRouteRequest>,
) -> ApiResult<Json<BusRouteDto>> {
    let scope = ctx.authorize(Permission::TransportManage)?;

    let zone_id = Uuid::parse_str(&req.zone_id)?;

    // The zone must exist in the resolved organization
    TransportZoneRepository::new(state.pool.clone())
        .find_by_id(scope.organization_id(), zone_id)
        .await?
        .ok_or_else(|| zone_not_found(&req.zone_id))?;

    let route = BusRoute::new(
        scope.organization_id(),
        zone_id,
        req.name.clone(),
        req.departure_time.clone(),
        req.capacity.unwrap_or(0),
    );

    let repo = BusRouteRepository::new(state.pool.clone());
    repo.create(&route).await?;

    log::info!("Created bus route {} via REST API", route.id);

    Ok(Json(route.into()))
}

/// PUT /api/v1/transport/routes/{id}
pub async fn update_route(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
    Json(req): Json<UpdateBusRouteRequest>,
) -> ApiResult<Json<BusRouteDto>> {
    let scope = ctx.authorize(Permission::TransportManage)?;
    let route_id = Uuid::parse_str(&id)?;

    let repo = BusRouteRepository::new(state.pool.clone());
    let mut route = repo
        .find_by_id(scope.organization_id(), route_id)
        .await?
        .ok_or_else(|| route_not_found(&id))?;

    if let Some(ref zone_id) = req.zone_id {
        let zone_id = Uuid::parse_str(zone_id)?;
        TransportZoneRepository::new(state.pool.clone())
            .find_by_id(scope.organization_id(), zone_id)
            .await?
            .ok_or_else(|| zone_not_found(&zone_id.to_string()))?;
        route.zone_id = zone_id;
    }
    if let Some(name) = req.name {
        route.name = name;
    }
    if let Some(departure_time) = req.departure_time {
        route.departure_time = departure_time;
    }
    if let Some(capacity) = req.capacity {
        route.capacity = capacity;
    }
    route.updated_at = Utc::now();

    repo.update(&route).await?;

    log::info!("Updated bus route {} via REST API", route.id);

    Ok(Json(route.into()))
}

/// DELETE /api/v1/transport/routes/{id}
pub async fn delete_route(
    State(state): State<AppState>,
    ctx: OrgContext,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let scope = ctx.authorize(Permission::TransportManage)?;
    let route_id = Uuid::parse_str(&id)?;

    let repo = BusRouteRepository::new(state.pool.clone());
    repo.find_by_id(scope.organization_id(), route_id)
        .await?
        .ok_or_else(|| route_not_found(&id))?;

    repo.delete(scope.organization_id(), route_id).await?;

    log::info!("Deleted bus route {} via REST API", route_id);

    Ok(Json(DeleteResponse {
        deleted_id: route_id.to_string(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn zone_not_found(id: &str) -> ApiError {
    ApiError::NotFound {
        message: format!("Transport zone {} not found", id),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn route_not_found(id: &str) -> ApiError {
    ApiError::NotFound {
        message: format!("Bus route {} not found", id),
        location: ErrorLocation::from(Location::caller()),
    }
}
