//! Core types and definitions for the air-defense guidance simulation.
//!
//! This crate defines the vocabulary shared by the engine and its drivers:
//! vector helpers, threat/interceptor pairs, the simulation clock, event
//! records, snapshots, constants, and configuration. It does no stepping
//! itself; all physics mutation belongs to `airdefense-sim`.

pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod pair;
pub mod state;
pub mod types;

pub use glam::DVec2;
