//! Threat/interceptor pairs: the per-engagement state the engine steps.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::LaunchProfile;
use crate::constants::FIRST_PAIR_ID;
use crate::enums::ThreatStatus;
use crate::events::NeutralizationRecord;
use crate::types::magnitude;

/// Hands out pair ids in creation order. Ids are never reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdSequence {
    next: u32,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self {
            next: FIRST_PAIR_ID,
        }
    }
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next call to `next_id` will return.
    pub fn peek(&self) -> u32 {
        self.next
    }

    /// Take the next id.
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// One simulated engagement: a target and the interceptor assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatPair {
    pub id: u32,
    /// `None` once neutralized: the target is gone and must not be drawn.
    pub target_position: Option<DVec2>,
    pub target_velocity: DVec2,
    pub interceptor_position: DVec2,
    pub interceptor_velocity: DVec2,
    pub status: ThreatStatus,
    pub hit_time: Option<f64>,
    pub hit_position: Option<DVec2>,
}

impl ThreatPair {
    /// Create an active pair with the next id and a freshly launched interceptor.
    pub fn create(
        ids: &mut IdSequence,
        target_position: DVec2,
        target_velocity: DVec2,
        launch: &LaunchProfile,
    ) -> Self {
        Self {
            id: ids.next_id(),
            target_position: Some(target_position),
            target_velocity,
            interceptor_position: launch.origin,
            interceptor_velocity: launch.velocity(),
            status: ThreatStatus::Active,
            hit_time: None,
            hit_position: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ThreatStatus::Active
    }

    /// Interceptor-to-target range, or `None` after neutralization.
    pub fn distance(&self) -> Option<f64> {
        self.target_position
            .map(|target| magnitude(target - self.interceptor_position))
    }

    pub fn interceptor_speed(&self) -> f64 {
        magnitude(self.interceptor_velocity)
    }

    /// Mark the pair neutralized at `hit_time` and freeze it.
    ///
    /// The hit position is the interceptor's current position. Returns the
    /// record to log, or `None` if the pair was already neutralized.
    pub fn neutralize(&mut self, hit_time: f64) -> Option<NeutralizationRecord> {
        if !self.is_active() {
            return None;
        }
        let hit_position = self.interceptor_position;
        self.status = ThreatStatus::Neutralized;
        self.hit_time = Some(hit_time);
        self.hit_position = Some(hit_position);
        self.target_position = None;
        self.interceptor_velocity = DVec2::ZERO;
        Some(NeutralizationRecord {
            id: self.id,
            hit_position,
            hit_time,
        })
    }
}
