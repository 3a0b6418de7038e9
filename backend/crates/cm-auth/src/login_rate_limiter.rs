use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use cm_core::ErrorLocation;

use std::num::NonZeroU32;
use std::panic::Location;

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::keyed::DefaultKeyedStateStore,
};

/// Credential-guessing throttle for the login endpoint, keyed by the
/// submitted email so one noisy client cannot lock everyone out.
pub struct LoginRateLimiter {
    limiter: RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>,
    config: RateLimitConfig,
}

impl LoginRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let quota = Quota::per_second(
            NonZeroU32::new(config.max_requests / config.window_secs.max(1) as u32)
                .unwrap_or(NonZeroU32::new(1).unwrap()),
        )
        .allow_burst(NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::new(1).unwrap()));

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
        }
    }

    /// Check whether another attempt for `key` is allowed right now
    #[track_caller]
    pub fn check(&self, key: &str) -> AuthErrorResult<()> {
        self.limiter
            .check_key(&key.to_string())
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl Default for LoginRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
