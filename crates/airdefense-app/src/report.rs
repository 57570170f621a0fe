//! Text and JSON reporting of engine state.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use glam::DVec2;

use airdefense_sim::core::events::NeutralizationRecord;
use airdefense_sim::core::pair::ThreatPair;
use airdefense_sim::core::state::EngineSnapshot;
use airdefense_sim::guidance::{closing_speed, estimate_time_to_go};

use crate::driver::RunSummary;
use crate::error::AppError;

fn fmt_vec(v: DVec2) -> String {
    format!("[{:.2}, {:.2}]", v.x, v.y)
}

/// One line per pair: id, target position and velocity, status.
pub fn threat_listing(pairs: &[ThreatPair]) -> String {
    let mut out = String::from("Current Threats\n");
    for pair in pairs {
        let position = pair
            .target_position
            .map(fmt_vec)
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "ID {}: Pos {}, Vel {}, Status {}",
            pair.id,
            position,
            fmt_vec(pair.target_velocity),
            pair.status.label()
        );
    }
    out
}

/// Range, closing speed and time to go for every active pair.
pub fn engagement_listing(pairs: &[ThreatPair]) -> String {
    let mut out = String::from("Engagements\n");
    for pair in pairs {
        let Some(target) = pair.target_position else {
            continue;
        };
        let relative_position = target - pair.interceptor_position;
        let relative_velocity = pair.target_velocity - pair.interceptor_velocity;
        let time_to_go = estimate_time_to_go(relative_position, relative_velocity)
            .map(|t| format!("{t:.2}s"))
            .unwrap_or_else(|| "opening".to_string());
        let _ = writeln!(
            out,
            "ID {}: range {:.2}, closing {:.2}, time to go {}",
            pair.id,
            relative_position.length(),
            closing_speed(relative_position, relative_velocity),
            time_to_go
        );
    }
    out
}

/// Log line for a single hit.
pub fn hit_line(record: &NeutralizationRecord) -> String {
    format!(
        "threat {} neutralized at t={:.2}s, interceptor at {}",
        record.id,
        record.hit_time,
        fmt_vec(record.hit_position)
    )
}

/// The neutralization log as a fixed-width table.
pub fn neutralized_table(records: &[NeutralizationRecord]) -> String {
    let mut out = String::from("Neutralized Threats\n");
    let _ = writeln!(out, "{:>4}  {:<22}  {:>8}", "ID", "Hit Position", "Hit Time");
    for record in records {
        let _ = writeln!(
            out,
            "{:>4}  {:<22}  {:>8.2}",
            record.id,
            fmt_vec(record.hit_position),
            record.hit_time
        );
    }
    out
}

/// Closing summary line.
pub fn summary_line(summary: &RunSummary) -> String {
    format!(
        "{} frames, {:.2}s simulated: {} neutralized, {} still active",
        summary.frames, summary.simulated_time, summary.hits, summary.remaining
    )
}

/// Write the full engine state as pretty JSON.
pub fn write_json(path: &Path, snapshot: &EngineSnapshot) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json).map_err(|source| AppError::Report {
        path: path.to_path_buf(),
        source,
    })
}
