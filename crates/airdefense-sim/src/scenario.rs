//! Scenario definitions: config plus an initial threat list.
//!
//! Scenarios load from JSON or are generated as seeded raids. A raid places
//! threats on a ring around the launch point and points them inbound, using
//! `ChaCha8Rng` so the same seed always produces the same raid.

use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use airdefense_core::config::GuidanceConfig;
use airdefense_core::error::ConfigError;
use airdefense_core::types::from_polar;

use crate::engine::GuidanceEngine;

/// Errors loading or building a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid raid parameters: {0}")]
    InvalidRaid(&'static str),
}

/// Initial state of one threat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreatSpec {
    pub position: DVec2,
    #[serde(default)]
    pub velocity: DVec2,
}

impl ThreatSpec {
    pub fn new(position: DVec2, velocity: DVec2) -> Self {
        Self { position, velocity }
    }
}

/// A complete run description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub config: GuidanceConfig,
    pub threats: Vec<ThreatSpec>,
}

impl Scenario {
    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a scenario from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Build an engine with every threat created in list order.
    pub fn into_engine(self) -> Result<GuidanceEngine, ScenarioError> {
        let mut engine = GuidanceEngine::new(self.config)?;
        for threat in self.threats {
            engine.create_threat(threat.position, threat.velocity);
        }
        Ok(engine)
    }
}

/// Shape of a generated raid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaidParams {
    pub count: usize,
    /// Distance from the launch point at which threats appear.
    pub radius: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    /// Bearings are drawn from `[min_bearing, max_bearing]` (radians from +X).
    pub min_bearing: f64,
    pub max_bearing: f64,
    /// Maximum deviation of the inbound course from the launch point (radians).
    pub course_jitter: f64,
}

impl Default for RaidParams {
    fn default() -> Self {
        Self {
            count: 4,
            radius: 400.0,
            min_speed: 10.0,
            max_speed: 30.0,
            // Upper half-plane: ahead of the default +Y launch.
            min_bearing: PI / 6.0,
            max_bearing: 5.0 * PI / 6.0,
            course_jitter: 0.3,
        }
    }
}

impl RaidParams {
    fn validate(&self) -> Result<(), ScenarioError> {
        let all_finite = [
            self.radius,
            self.min_speed,
            self.max_speed,
            self.min_bearing,
            self.max_bearing,
            self.course_jitter,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(ScenarioError::InvalidRaid("parameters must be finite"));
        }
        if self.radius <= 0.0 {
            return Err(ScenarioError::InvalidRaid("radius must be positive"));
        }
        if self.min_speed < 0.0 || self.min_speed > self.max_speed {
            return Err(ScenarioError::InvalidRaid(
                "speeds must satisfy 0 <= min_speed <= max_speed",
            ));
        }
        if self.min_bearing > self.max_bearing {
            return Err(ScenarioError::InvalidRaid("min_bearing exceeds max_bearing"));
        }
        if self.course_jitter < 0.0 {
            return Err(ScenarioError::InvalidRaid("course_jitter must be non-negative"));
        }
        // The inclusive sampler scales each width by 1 / (1 - EPSILON),
        // which must stay finite.
        let widths = [
            self.max_speed - self.min_speed,
            self.max_bearing - self.min_bearing,
            2.0 * self.course_jitter,
        ];
        if !widths.iter().all(|w| (w / (1.0 - f64::EPSILON)).is_finite()) {
            return Err(ScenarioError::InvalidRaid("range widths must be finite"));
        }
        Ok(())
    }
}

/// Generate a seeded raid of inbound threats around `center`.
pub fn raid(seed: u64, center: DVec2, params: &RaidParams) -> Result<Vec<ThreatSpec>, ScenarioError> {
    params.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let threats = (0..params.count)
        .map(|_| {
            let bearing = rng.gen_range(params.min_bearing..=params.max_bearing);
            let speed = rng.gen_range(params.min_speed..=params.max_speed);
            let jitter = rng.gen_range(-params.course_jitter..=params.course_jitter);

            let offset = from_polar(params.radius, bearing);
            // Inbound course is the reverse bearing, perturbed.
            let velocity = from_polar(speed, bearing + PI + jitter);
            ThreatSpec::new(center + offset, velocity)
        })
        .collect();

    Ok(threats)
}
