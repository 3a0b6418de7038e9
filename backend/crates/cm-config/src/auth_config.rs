use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCESS_TTL_SECS, DEFAULT_REFRESH_TTL_SECS,
    MIN_JWT_SECRET_CHARS,
};

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 secret for access tokens (required)
    pub jwt_secret: Option<String>,
    /// HS256 secret for refresh tokens; falls back to jwt_secret
    pub refresh_secret: Option<String>,
    pub access_ttl_secs: i64,
    pub refresh_ttl_secs: i64,
    /// Organization a super admin lands in when no request source
    /// names one
    pub default_organization_id: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            refresh_secret: None,
            access_ttl_secs: DEFAULT_ACCESS_TTL_SECS,
            refresh_ttl_secs: DEFAULT_REFRESH_TTL_SECS,
            default_organization_id: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret.as_deref() {
            None | Some("") => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set CM_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_CHARS => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_CHARS
                )));
            }
            Some(_) => {}
        }

        if let Some(secret) = self.refresh_secret.as_deref()
            && secret.len() < MIN_JWT_SECRET_CHARS
        {
            return Err(ConfigError::auth(format!(
                "auth.refresh_secret must be at least {} characters",
                MIN_JWT_SECRET_CHARS
            )));
        }

        if self.access_ttl_secs <= 0 {
            return Err(ConfigError::auth(
                "auth.access_ttl_secs must be greater than 0",
            ));
        }
        if self.refresh_ttl_secs <= 0 {
            return Err(ConfigError::auth(
                "auth.refresh_ttl_secs must be greater than 0",
            ));
        }

        if let Some(ref id) = self.default_organization_id
            && Uuid::parse_str(id).is_err()
        {
            return Err(ConfigError::auth(format!(
                "auth.default_organization_id is not a valid UUID: {}",
                id
            )));
        }

        Ok(())
    }

    /// Secret for refresh tokens: dedicated one if configured,
    /// else the access secret
    pub fn refresh_secret_or_default(&self) -> Option<&str> {
        self.refresh_secret
            .as_deref()
            .or(self.jwt_secret.as_deref())
    }

    /// Parsed default organization for super admins
    pub fn default_organization_uuid(&self) -> Option<Uuid> {
        self.default_organization_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok())
    }
}
