//! Command-line driver for the guidance engine.
//!
//! This crate owns everything outside the simulation core: argument
//! parsing, the frame loop and its pacing, and text/JSON reporting.

pub mod args;
pub mod driver;
pub mod error;
pub mod report;

pub use airdefense_sim::core;
