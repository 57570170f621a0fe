//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Lifecycle of a threat/interceptor pair.
///
/// `Neutralized` is terminal: nothing transitions out of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatStatus {
    #[default]
    Active,
    Neutralized,
}

impl ThreatStatus {
    /// Label used in driver listings.
    pub fn label(self) -> &'static str {
        match self {
            ThreatStatus::Active => "active",
            ThreatStatus::Neutralized => "neutralized",
        }
    }
}
