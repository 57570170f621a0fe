//! Guidance system: applies proportional navigation to an active pair.

use airdefense_core::pair::ThreatPair;

use crate::guidance::proportional_navigation;

/// Replace the interceptor velocity with the PN-commanded one.
///
/// Uses the pair's vectors as they stand at the start of the step, before
/// either body has moved.
pub fn run(pair: &mut ThreatPair, navigation_gain: f64, dt: f64) {
    let Some(target_position) = pair.target_position else {
        return;
    };
    pair.interceptor_velocity = proportional_navigation(
        pair.interceptor_position,
        pair.interceptor_velocity,
        target_position,
        pair.target_velocity,
        navigation_gain,
        dt,
    );
}
