//! Events emitted by the simulation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One pair's transition to `Neutralized`. Appended once, never edited.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeutralizationRecord {
    pub id: u32,
    /// Interceptor position at the instant of the hit.
    pub hit_position: DVec2,
    /// Simulated time of the hit (seconds).
    pub hit_time: f64,
}
