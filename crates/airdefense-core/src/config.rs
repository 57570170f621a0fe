//! Simulation configuration.
//!
//! Every field has a serde default, so a partial JSON object (or `{}`)
//! deserializes into a usable config.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Tunable parameters for a guidance run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidanceConfig {
    /// Fixed integration step (seconds).
    pub dt: f64,
    /// Simulated duration the driver runs for (seconds).
    pub total_simulated_time: f64,
    /// Intercept radius.
    pub hit_distance: f64,
    /// Proportional navigation gain (N).
    pub navigation_gain: f64,
    /// Interceptor speed at launch.
    pub interceptor_speed: f64,
    /// Interceptor launch direction; any non-zero vector, normalized on use.
    pub interceptor_direction: DVec2,
    /// Interceptor launch position.
    pub launch_origin: DVec2,
    /// Whether the engine keeps per-frame position traces.
    pub record_traces: bool,
    /// Most recent samples kept per trace; `None` keeps everything.
    pub max_trace_len: Option<usize>,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            dt: DT,
            total_simulated_time: TOTAL_SIMULATED_TIME,
            hit_distance: HIT_DISTANCE,
            navigation_gain: NAVIGATION_GAIN,
            interceptor_speed: INTERCEPTOR_SPEED,
            interceptor_direction: INTERCEPTOR_DIRECTION,
            launch_origin: DVec2::ZERO,
            record_traces: true,
            max_trace_len: None,
        }
    }
}

impl GuidanceConfig {
    /// Check every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep(self.dt));
        }
        if !(self.total_simulated_time.is_finite() && self.total_simulated_time >= 0.0) {
            return Err(ConfigError::InvalidDuration(self.total_simulated_time));
        }
        if !(self.hit_distance.is_finite() && self.hit_distance >= 0.0) {
            return Err(ConfigError::InvalidHitDistance(self.hit_distance));
        }
        if !(self.interceptor_speed.is_finite() && self.interceptor_speed > 0.0) {
            return Err(ConfigError::InvalidInterceptorSpeed(self.interceptor_speed));
        }
        let finite = [
            ("navigation_gain", self.navigation_gain),
            ("interceptor_direction.x", self.interceptor_direction.x),
            ("interceptor_direction.y", self.interceptor_direction.y),
            ("launch_origin.x", self.launch_origin.x),
            ("launch_origin.y", self.launch_origin.y),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        if self.interceptor_direction.try_normalize().is_none() {
            return Err(ConfigError::InvalidDirection(self.interceptor_direction));
        }
        Ok(())
    }

    /// Launch state handed to new pairs.
    pub fn launch_profile(&self) -> LaunchProfile {
        LaunchProfile {
            origin: self.launch_origin,
            speed: self.interceptor_speed,
            direction: self.interceptor_direction,
        }
    }

    /// Number of frames the driver should run: `floor(total_simulated_time / dt)`.
    pub fn frame_budget(&self) -> u64 {
        (self.total_simulated_time / self.dt).floor() as u64
    }
}

/// Initial interceptor state shared by every pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchProfile {
    pub origin: DVec2,
    pub speed: f64,
    /// Need not be unit length; a zero vector launches a stationary interceptor.
    pub direction: DVec2,
}

impl LaunchProfile {
    /// Launch velocity: `speed` along the normalized direction.
    pub fn velocity(&self) -> DVec2 {
        self.direction.normalize_or_zero() * self.speed
    }
}

impl Default for LaunchProfile {
    fn default() -> Self {
        GuidanceConfig::default().launch_profile()
    }
}
