//! Guidance engine: the simulation core.
//!
//! `GuidanceEngine` owns every threat/interceptor pair, the clock, and the
//! neutralization log. Drivers create threats and call `advance` once per
//! frame; the engine never sleeps, renders, or does I/O, so it can be
//! stepped deterministically from tests.

use std::collections::BTreeMap;

use glam::DVec2;
use log::{debug, info, trace};

use airdefense_core::config::GuidanceConfig;
use airdefense_core::error::ConfigError;
use airdefense_core::events::NeutralizationRecord;
use airdefense_core::pair::{IdSequence, ThreatPair};
use airdefense_core::state::{EngineSnapshot, PairTrace, StepReport};
use airdefense_core::types::SimClock;

use crate::systems;

/// The simulation engine. Sole owner and mutator of all pair state.
#[derive(Debug, Clone)]
pub struct GuidanceEngine {
    config: GuidanceConfig,
    clock: SimClock,
    ids: IdSequence,
    /// Ascending by id: pairs are only ever appended with a fresh id.
    pairs: Vec<ThreatPair>,
    neutralizations: Vec<NeutralizationRecord>,
    traces: BTreeMap<u32, PairTrace>,
}

impl GuidanceEngine {
    /// Create an empty engine after validating `config`.
    pub fn new(config: GuidanceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "guidance engine ready: dt={}s, N={}, hit distance={}, interceptor speed={}",
            config.dt, config.navigation_gain, config.hit_distance, config.interceptor_speed
        );
        Ok(Self {
            clock: SimClock::new(config.dt),
            config,
            ids: IdSequence::new(),
            pairs: Vec::new(),
            neutralizations: Vec::new(),
            traces: BTreeMap::new(),
        })
    }

    /// Add a threat and launch an interceptor at it. Returns the pair id.
    pub fn create_threat(&mut self, target_position: DVec2, target_velocity: DVec2) -> u32 {
        let pair = ThreatPair::create(
            &mut self.ids,
            target_position,
            target_velocity,
            &self.config.launch_profile(),
        );
        let id = pair.id;
        debug!("threat {id} created at {target_position} moving {target_velocity}");
        if self.config.record_traces {
            self.traces.insert(id, PairTrace::default());
        }
        self.pairs.push(pair);
        id
    }

    /// Advance every pair by one fixed step.
    ///
    /// Pairs are processed in ascending id order. Neutralized pairs are
    /// frozen: only their trace grows. The clock advances once at the end.
    pub fn advance(&mut self) -> StepReport {
        let dt = self.config.dt;
        let frame_time = self.clock.time();
        let trace_limit = self.config.max_trace_len;
        let mut new_hits = Vec::new();

        for pair in &mut self.pairs {
            if let Some(pair_trace) = self.traces.get_mut(&pair.id) {
                systems::trace::record(pair_trace, pair, trace_limit);
            }

            if !pair.is_active() {
                continue;
            }

            if let Some(record) =
                systems::intercept::run(pair, self.config.hit_distance, frame_time)
            {
                debug!(
                    "threat {} neutralized at t={:.2}s, position {}",
                    record.id, record.hit_time, record.hit_position
                );
                new_hits.push(record);
                continue;
            }

            systems::guidance::run(pair, self.config.navigation_gain, dt);
            systems::movement::run(pair, dt);
        }

        self.neutralizations.extend_from_slice(&new_hits);
        self.clock.advance();
        trace!(
            "frame {} done, {} active, {} new hits",
            self.clock.frame,
            self.active_count(),
            new_hits.len()
        );

        StepReport {
            frame: self.clock.frame,
            time: self.clock.time(),
            updated_pairs: self.pairs.clone(),
            new_hits,
        }
    }

    /// All pairs, ascending by id.
    pub fn pairs(&self) -> &[ThreatPair] {
        &self.pairs
    }

    /// Look up one pair.
    pub fn pair(&self, id: u32) -> Option<&ThreatPair> {
        self.pairs
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|idx| &self.pairs[idx])
    }

    /// Every neutralization so far, in the order they happened.
    pub fn neutralizations(&self) -> &[NeutralizationRecord] {
        &self.neutralizations
    }

    /// Position history of one pair, if traces are recorded.
    pub fn trace(&self, id: u32) -> Option<&PairTrace> {
        self.traces.get(&id)
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }

    pub fn config(&self) -> &GuidanceConfig {
        &self.config
    }

    /// Frames a full run lasts.
    pub fn frame_budget(&self) -> u64 {
        self.config.frame_budget()
    }

    /// Whether the configured simulated duration has elapsed.
    pub fn is_finished(&self) -> bool {
        self.clock.frame >= self.frame_budget()
    }

    pub fn active_count(&self) -> usize {
        self.pairs.iter().filter(|p| p.is_active()).count()
    }

    /// True once there is at least one pair and none are still active.
    pub fn all_neutralized(&self) -> bool {
        !self.pairs.is_empty() && self.active_count() == 0
    }

    /// Serializable copy of the full engine state.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            clock: self.clock,
            pairs: self.pairs.clone(),
            neutralizations: self.neutralizations.clone(),
        }
    }
}
