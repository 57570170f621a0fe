//! Configuration errors.

use thiserror::Error;

/// A `GuidanceConfig` field outside its valid range.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),
    #[error("total simulated time must be non-negative and finite, got {0}")]
    InvalidDuration(f64),
    #[error("hit distance must be non-negative and finite, got {0}")]
    InvalidHitDistance(f64),
    #[error("interceptor speed must be positive and finite, got {0}")]
    InvalidInterceptorSpeed(f64),
    #[error("interceptor direction must be a non-zero vector, got {0}")]
    InvalidDirection(glam::DVec2),
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
}
