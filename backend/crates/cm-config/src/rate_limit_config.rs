use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOGIN_MAX_ATTEMPTS, DEFAULT_LOGIN_WINDOW_SECS,
};

use serde::Deserialize;

/// Throttle applied to credential endpoints (login)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_LOGIN_MAX_ATTEMPTS,
            window_secs: DEFAULT_LOGIN_WINDOW_SECS,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_requests == 0 {
            return Err(ConfigError::config(
                "rate_limit.max_requests must be greater than 0",
            ));
        }
        if self.window_secs == 0 {
            return Err(ConfigError::config(
                "rate_limit.window_secs must be greater than 0",
            ));
        }
        Ok(())
    }
}
