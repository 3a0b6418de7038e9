pub mod auth;
pub mod login_request;
pub mod login_response;
pub mod my_organizations_response;
pub mod organization_summary;
pub mod refresh_request;
pub mod register_request;
pub mod switch_organization_request;
pub mod token_pair;
pub mod user_dto;
