pub mod athletes;
pub mod auth;
pub mod dashboard;
pub mod delete_response;
pub mod documents;
pub mod error;
pub mod extractors;
pub mod matches;
pub mod members;
pub mod organizations;
pub mod payments;
pub mod roles;
pub mod teams;
pub mod transport;
