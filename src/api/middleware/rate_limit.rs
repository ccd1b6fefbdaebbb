//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Replenish rates and burst sizes for the two route tiers, sourced from
/// [`crate::config::Config`] at startup.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitSettings {
    /// Public catalog reads: tokens added per second.
    pub public_per_second: u64,
    /// Public catalog reads: bucket capacity.
    pub public_burst: u32,
    /// Admin mutations: tokens added per second.
    pub admin_per_second: u64,
    /// Admin mutations: bucket capacity.
    pub admin_burst: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            public_per_second: 2,
            public_burst: 100,
            admin_per_second: 1,
            admin_burst: 10,
        }
    }
}

/// Creates a per-IP rate limiter with the given replenish rate and burst
/// size. Requests exceeding the limit receive `429 Too Many Requests`;
/// limits are keyed by the socket peer address.
///
/// Both values must be non-zero; [`crate::config::Config::validate`]
/// enforces that before the router is built.
pub fn layer(
    per_second: u64,
    burst_size: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
