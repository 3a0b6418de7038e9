pub mod error;
pub mod models;

pub use error::error_location::ErrorLocation;
pub use error::{CoreError, Result};
pub use models::athlete::Athlete;
pub use models::document::EXPIRY_WARNING_DAYS;
pub use models::athlete_status::AthleteStatus;
pub use models::bus_route::BusRoute;
pub use models::document::Document;
pub use models::document_category::DocumentCategory;
pub use models::document_status::DocumentStatus;
pub use models::matches::Match;
pub use models::match_status::MatchStatus;
pub use models::organization::Organization;
pub use models::organization_plan::OrganizationPlan;
pub use models::payment::Payment;
pub use models::payment_status::PaymentStatus;
pub use models::permission::Permission;
pub use models::permission_set::PermissionSet;
pub use models::role::Role;
pub use models::role_template::{RoleTemplate, default_roles};
pub use models::team::Team;
pub use models::transport_zone::TransportZone;
pub use models::user::User;
pub use models::user_organization::UserOrganization;

#[cfg(test)]
mod tests;
