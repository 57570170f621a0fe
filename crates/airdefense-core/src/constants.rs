//! Simulation constants and tuning defaults.
//!
//! Every value here is a default for a `GuidanceConfig` field; a shipped
//! run reads the live value from the config, never from these directly.

use glam::DVec2;

/// Fixed integration step (seconds).
pub const DT: f64 = 0.01;

/// Simulated duration the driver runs for (seconds).
pub const TOTAL_SIMULATED_TIME: f64 = 20.0;

// --- Intercept ---

/// Range below which an interceptor neutralizes its target.
pub const HIT_DISTANCE: f64 = 5.0;

// --- Guidance ---

/// Proportional navigation gain (N).
pub const NAVIGATION_GAIN: f64 = 3.0;

// --- Interceptor launch ---

/// Interceptor speed magnitude, fixed for the life of the pair.
pub const INTERCEPTOR_SPEED: f64 = 80.0;

/// Initial interceptor direction (+Y). Scaled by the speed, so the default
/// launch velocity is exactly `(0, INTERCEPTOR_SPEED)`.
pub const INTERCEPTOR_DIRECTION: DVec2 = DVec2::Y;

/// Id given to the first pair created.
pub const FIRST_PAIR_ID: u32 = 1;
