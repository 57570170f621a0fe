//! Trace recording: per-frame position history for trail display.

use airdefense_core::pair::ThreatPair;
use airdefense_core::state::PairTrace;

/// Record the pair's positions as they stand at the start of the frame.
pub fn record(trace: &mut PairTrace, pair: &ThreatPair, limit: Option<usize>) {
    trace.record(pair.interceptor_position, pair.target_position, limit);
}
