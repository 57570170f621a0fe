//! Guidance simulation engine.
//!
//! Owns the threat/interceptor pairs, steps them at a fixed rate with
//! proportional navigation, and reports neutralizations.

pub mod engine;
pub mod guidance;
pub mod scenario;
pub mod systems;

pub use airdefense_core as core;
pub use engine::GuidanceEngine;
