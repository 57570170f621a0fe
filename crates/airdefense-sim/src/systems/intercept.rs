//! Intercept evaluation system: checks interceptor-target proximity.

use airdefense_core::events::NeutralizationRecord;
use airdefense_core::pair::ThreatPair;

/// Neutralize the pair if its range is inside `hit_distance`.
///
/// `hit_time` is the simulated time of the frame being processed. Returns
/// the record for a fresh hit; already-neutralized pairs return `None`.
pub fn run(pair: &mut ThreatPair, hit_distance: f64, hit_time: f64) -> Option<NeutralizationRecord> {
    let distance = pair.distance()?;
    if distance < hit_distance {
        pair.neutralize(hit_time)
    } else {
        None
    }
}
