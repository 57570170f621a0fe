//! Kinematic integration system.
//!
//! Explicit Euler: position += velocity * dt for the interceptor and the
//! (unguided, constant-velocity) target.

use airdefense_core::pair::ThreatPair;

/// Integrate one step. Neutralized pairs are left untouched.
pub fn run(pair: &mut ThreatPair, dt: f64) {
    if !pair.is_active() {
        return;
    }
    pair.interceptor_position += pair.interceptor_velocity * dt;
    if let Some(target) = pair.target_position.as_mut() {
        *target += pair.target_velocity * dt;
    }
}
