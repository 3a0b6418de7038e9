pub mod error_location;

// -------------------------------------------------------------------------- //

use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid permission: {value} {location}")]
    InvalidPermission {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid athlete status: {value} {location}")]
    InvalidAthleteStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid document category: {value} {location}")]
    InvalidDocumentCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid payment status: {value} {location}")]
    InvalidPaymentStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid match status: {value} {location}")]
    InvalidMatchStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid organization plan: {value} {location}")]
    InvalidOrganizationPlan {
        value: String,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
