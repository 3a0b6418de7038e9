pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::athlete_repository::{AthleteFilter, AthleteRepository};
pub use repositories::bus_route_repository::BusRouteRepository;
pub use repositories::document_repository::DocumentRepository;
pub use repositories::match_repository::MatchRepository;
pub use repositories::organization_repository::OrganizationRepository;
pub use repositories::payment_repository::PaymentRepository;
pub use repositories::role_repository::RoleRepository;
pub use repositories::team_repository::TeamRepository;
pub use repositories::transport_zone_repository::TransportZoneRepository;
pub use repositories::user_organization_repository::UserOrganizationRepository;
pub use repositories::user_repository::UserRepository;
