//! Bearer-token extractor: the Unauthenticated -> TokenVerified step.

use crate::{ApiError, AppState};

use cm_auth::{AuthError, Claims};
use cm_core::ErrorLocation;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Verified session claims for the request. Constructing this is the
/// only way a handler learns who is calling.
pub struct AuthSession(pub Claims);

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(http::header::AUTHORIZATION)
                .ok_or(AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let value = header.to_str().map_err(|_| AuthError::InvalidToken {
                message: "Authorization header is not valid UTF-8".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let token = value
                .strip_prefix("Bearer ")
                .ok_or(AuthError::InvalidScheme {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let claims = state.token_codec.verify(token)?;

            Ok(AuthSession(claims))
        }
    }
}
