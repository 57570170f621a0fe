//! Per-pair systems run by the engine each step.
//!
//! Systems are plain functions over a single `ThreatPair`. They hold no
//! state; everything they touch is owned by the engine.

pub mod guidance;
pub mod intercept;
pub mod movement;
pub mod trace;
