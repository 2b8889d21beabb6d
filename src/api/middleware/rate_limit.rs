//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Per-IP rate limiter layer.
pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for the API.
///
/// # Limits
///
/// - **Rate**: `per_second` tokens refilled per second
/// - **Burst**: `burst` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with connect info.
///
/// # Errors
///
/// Returns an error if either limit is zero.
pub fn layer(per_second: u64, burst: u32) -> Result<RateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(per_second)
        .burst_size(burst)
        .finish()
        .context("Invalid rate limit: RATE_LIMIT_PER_SECOND and RATE_LIMIT_BURST must be positive")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_rejects_zero_limits() {
        assert!(layer(10, 50).is_ok());
        assert!(layer(0, 50).is_err());
        assert!(layer(10, 0).is_err());
    }
}
