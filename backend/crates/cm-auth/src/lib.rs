pub mod claims;
pub mod error;
pub mod evaluator;
pub mod login_rate_limiter;
pub mod password;
pub mod rate_limit_config;
pub mod session_store;
pub mod tenant;
pub mod tenant_context;
pub mod token_codec;

pub use claims::{Claims, RefreshClaims};
pub use error::{AuthError, Result};
pub use evaluator::{authorize, authorize_role};
pub use login_rate_limiter::LoginRateLimiter;
pub use password::{hash_password, verify_password};
pub use rate_limit_config::RateLimitConfig;
pub use session_store::SessionStore;
pub use tenant::{ORGANIZATION_HEADER, ORGANIZATION_QUERY_PARAM, TenantSelector};
pub use tenant_context::TenantContext;
pub use token_codec::TokenCodec;

#[cfg(test)]
mod tests;
