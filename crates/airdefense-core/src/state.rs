//! Snapshots handed back to drivers.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::events::NeutralizationRecord;
use crate::pair::ThreatPair;
use crate::types::SimClock;

/// Result of advancing the engine by one step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Frame counter after the step.
    pub frame: u64,
    /// Simulated time after the step.
    pub time: f64,
    /// Every pair, ascending by id.
    pub updated_pairs: Vec<ThreatPair>,
    /// Records produced by this step only.
    pub new_hits: Vec<NeutralizationRecord>,
}

/// Per-frame position samples for one pair, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairTrace {
    pub interceptor: Vec<DVec2>,
    /// `None` samples mark frames after the target was neutralized.
    pub target: Vec<Option<DVec2>>,
}

impl PairTrace {
    /// Append a sample, dropping the oldest ones beyond `limit`.
    pub fn record(&mut self, interceptor: DVec2, target: Option<DVec2>, limit: Option<usize>) {
        self.interceptor.push(interceptor);
        self.target.push(target);
        if let Some(limit) = limit {
            if self.interceptor.len() > limit {
                let excess = self.interceptor.len() - limit;
                self.interceptor.drain(..excess);
                self.target.drain(..excess);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.interceptor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptor.is_empty()
    }
}

/// Complete engine state for export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub clock: SimClock,
    pub pairs: Vec<ThreatPair>,
    pub neutralizations: Vec<NeutralizationRecord>,
}
