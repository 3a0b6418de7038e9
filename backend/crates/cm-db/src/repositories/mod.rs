pub mod athlete_repository;
pub mod bus_route_repository;
pub mod document_repository;
pub mod match_repository;
pub mod organization_repository;
pub mod payment_repository;
pub mod role_repository;
mod row;
pub mod team_repository;
pub mod transport_zone_repository;
pub mod user_organization_repository;
pub mod user_repository;
