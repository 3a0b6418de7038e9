pub mod athlete;
pub mod athlete_status;
pub mod bus_route;
pub mod document;
pub mod document_category;
pub mod document_status;
pub mod match_status;
pub mod matches;
pub mod organization;
pub mod organization_plan;
pub mod payment;
pub mod payment_status;
pub mod permission;
pub mod permission_set;
pub mod role;
pub mod role_template;
pub mod team;
pub mod transport_zone;
pub mod user;
pub mod user_organization;
