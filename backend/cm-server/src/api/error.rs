//! REST API error types
//!
//! These errors produce the uniform JSON envelope
//! `{ "error": { "code", "message", "field?" } }` with one HTTP status
//! per kind. Nothing here is retried; every failure is terminal for the
//! current request.

use cm_auth::AuthError;
use cm_core::{CoreError, ErrorLocation};
use cm_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "TOKEN_EXPIRED")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or unusable credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Token signature valid but past expiry (401)
    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    /// Structurally invalid token (401)
    #[error("Token malformed: {message} {location}")]
    TokenMalformed {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// No organization could be resolved for the request (400)
    #[error("Organization required {location}")]
    OrganizationRequired { location: ErrorLocation },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Uniqueness or state conflict (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Too many attempts (429)
    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Unauthorized { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::TokenExpired { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "TOKEN_EXPIRED".into(),
                    message: "Authentication token has expired".into(),
                    field: None,
                },
            ),
            ApiError::TokenMalformed { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "TOKEN_MALFORMED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Forbidden { message, .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "FORBIDDEN".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::OrganizationRequired { .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "ORGANIZATION_REQUIRED".into(),
                    message: "No organization could be resolved for this request".into(),
                    field: None,
                },
            ),
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::RateLimited { message, .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                ApiErrorBody {
                    code: "RATE_LIMITED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert auth errors to API errors, preserving the
/// expired-versus-malformed distinction for client messaging
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::TokenExpired { .. } => ApiError::TokenExpired { location },
            AuthError::JwtDecode { source, .. } => ApiError::TokenMalformed {
                message: format!("Invalid authentication token: {}", source),
                location,
            },
            AuthError::InvalidToken { message, .. } => {
                ApiError::TokenMalformed { message, location }
            }
            AuthError::InvalidClaim { claim, message, .. } => ApiError::TokenMalformed {
                message: format!("Invalid claim '{}': {}", claim, message),
                location,
            },
            AuthError::MissingHeader { .. } => ApiError::Unauthorized {
                message: "Missing authorization header".into(),
                location,
            },
            AuthError::InvalidScheme { .. } => ApiError::Unauthorized {
                message: "Invalid authorization scheme: expected 'Bearer'".into(),
                location,
            },
            AuthError::Forbidden { message, .. } => ApiError::Forbidden { message, location },
            AuthError::RateLimitExceeded {
                limit, window_secs, ..
            } => ApiError::RateLimited {
                message: format!("Too many attempts: limit {} per {}s", limit, window_secs),
                location,
            },
            internal @ (AuthError::JwtEncode { .. } | AuthError::PasswordHash { .. }) => {
                // Never leak crypto internals to clients
                log::error!("Auth internal error: {}", internal);
                ApiError::Internal {
                    message: "Authentication processing failed".into(),
                    location,
                }
            }
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Log the database error for debugging
        log::error!("Database error: {}", e);

        let location = ErrorLocation::from(Location::caller());
        match e {
            DbError::OrganizationNotFound {
                organization_id, ..
            } => ApiError::NotFound {
                message: format!("Organization {} not found", organization_id),
                location,
            },
            DbError::Sqlx { source, .. } => match source {
                sqlx::Error::RowNotFound => ApiError::NotFound {
                    message: "Resource not found".to_string(),
                    location,
                },
                // Don't expose internal database details to clients
                _ => ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location,
                },
            },
            DbError::Migration { .. } | DbError::Initialization { .. } => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location,
            },
        }
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert domain parsing errors (statuses, categories, permissions)
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
