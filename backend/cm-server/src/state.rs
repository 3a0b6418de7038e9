use std::sync::Arc;

use cm_auth::{LoginRateLimiter, SessionStore, TokenCodec};
use cm_config::AuthConfig;
use sqlx::SqlitePool;

/// Shared per-process state, built once in main and injected into every
/// handler. The pool is the only persistence handle in the process.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Codec for access tokens
    pub token_codec: Arc<TokenCodec>,
    /// Codec for refresh tokens (separate secret when configured)
    pub refresh_codec: Arc<TokenCodec>,
    /// Super-admin default-organization memoization
    pub session_store: SessionStore,
    pub login_limiter: Arc<LoginRateLimiter>,
    pub auth_config: AuthConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, auth_config: AuthConfig, login_limiter: LoginRateLimiter) -> Self {
        let access_secret = auth_config.jwt_secret.as_deref().unwrap_or_default();
        let refresh_secret = auth_config.refresh_secret_or_default().unwrap_or_default();

        let token_codec = Arc::new(TokenCodec::with_hs256(access_secret.as_bytes()));
        let refresh_codec = Arc::new(TokenCodec::with_hs256(refresh_secret.as_bytes()));

        Self {
            pool,
            token_codec,
            refresh_codec,
            session_store: SessionStore::new(),
            login_limiter: Arc::new(login_limiter),
            auth_config,
        }
    }
}
