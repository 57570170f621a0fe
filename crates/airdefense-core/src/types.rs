//! Fundamental geometric and simulation types.
//!
//! Positions and velocities are `glam::DVec2` in the simulation plane
//! (length units and length units per second). Headings are radians measured
//! counter-clockwise from +X, as returned by `atan2(y, x)`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Magnitude of a vector.
#[inline]
pub fn magnitude(v: DVec2) -> f64 {
    v.length()
}

/// 2D cross product `a.x * b.y - a.y * b.x`.
#[inline]
pub fn cross(a: DVec2, b: DVec2) -> f64 {
    a.perp_dot(b)
}

/// Divide, returning zero when the denominator is exactly zero.
#[inline]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Heading of a vector (`atan2(y, x)`); zero for the zero vector.
#[inline]
pub fn heading_of(v: DVec2) -> f64 {
    v.y.atan2(v.x)
}

/// Vector of the given magnitude pointing along `heading`.
#[inline]
pub fn from_polar(magnitude: f64, heading: f64) -> DVec2 {
    DVec2::new(magnitude * heading.cos(), magnitude * heading.sin())
}

/// Simulation clock: a frame counter and a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    /// Frames completed so far.
    pub frame: u64,
    /// Step size in seconds.
    pub dt: f64,
}

impl SimClock {
    pub fn new(dt: f64) -> Self {
        Self { frame: 0, dt }
    }

    /// Simulated time in seconds (`frame * dt`, not an accumulated sum).
    pub fn time(&self) -> f64 {
        self.frame as f64 * self.dt
    }

    /// Advance by one frame.
    pub fn advance(&mut self) {
        self.frame += 1;
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(crate::constants::DT)
    }
}
