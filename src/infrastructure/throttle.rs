use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;

use crate::config::ThrottleConfig;
use crate::shared::error::AppError;

/// Rate-limit gate awaited before every upstream request.
///
/// One instance is shared by every account that talks to the same endpoint.
#[async_trait]
pub trait Throttle: Send + Sync {
    async fn throttle(&self);
}

/// Never waits
#[derive(Debug, Default, Clone, Copy)]
pub struct NoThrottle;

#[async_trait]
impl Throttle for NoThrottle {
    async fn throttle(&self) {}
}

/// Direct (unkeyed) governor limiter
pub struct RateLimitThrottle {
    limiter: DefaultDirectRateLimiter,
}

impl RateLimitThrottle {
    pub fn new(requests_per_minute: u32, burst_size: u32) -> crate::Result<Self> {
        let rate = NonZeroU32::new(requests_per_minute).ok_or_else(|| {
            AppError::Config("Throttle requests_per_minute must be non-zero".to_string())
        })?;
        let burst = NonZeroU32::new(burst_size)
            .ok_or_else(|| AppError::Config("Throttle burst_size must be non-zero".to_string()))?;

        Ok(Self {
            limiter: RateLimiter::direct(Quota::per_minute(rate).allow_burst(burst)),
        })
    }

    /// Build the throttle described by `config`
    pub fn from_config(config: &ThrottleConfig) -> crate::Result<Arc<dyn Throttle>> {
        if !config.enabled {
            return Ok(Arc::new(NoThrottle));
        }

        Ok(Arc::new(Self::new(config.requests_per_minute, config.burst_size)?))
    }
}

#[async_trait]
impl Throttle for RateLimitThrottle {
    async fn throttle(&self) {
        if self.limiter.check().is_ok() {
            return;
        }

        debug!("Upstream rate limit reached, waiting for capacity");
        self.limiter.until_ready().await;
    }
}
