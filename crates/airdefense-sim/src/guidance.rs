//! Guidance algorithms for interceptors.
//!
//! Provides the planar proportional navigation (PN) law used by the engine:
//! line-of-sight rate, commanded lateral acceleration, and the constant-speed
//! heading update. Also closing-speed and time-to-go estimates for drivers.

use glam::DVec2;

use airdefense_core::types::{cross, from_polar, heading_of, magnitude, safe_div};

/// Line-of-sight rotation rate (rad/s).
///
/// `relative_position` is target minus interceptor, `relative_velocity` the
/// same difference of velocities. Zero when the range is zero.
pub fn line_of_sight_rate(relative_position: DVec2, relative_velocity: DVec2) -> f64 {
    let range = magnitude(relative_position);
    if range == 0.0 {
        return 0.0;
    }
    cross(relative_position, relative_velocity) / (range * range)
}

/// PN lateral acceleration command: `a = N * |V_m| * λ̇`.
pub fn commanded_acceleration(navigation_gain: f64, interceptor_speed: f64, los_rate: f64) -> f64 {
    navigation_gain * interceptor_speed * los_rate
}

/// Rotate `velocity` by the turn an acceleration `accel` produces over `dt`.
///
/// Turning never changes speed. A stationary interceptor cannot turn and
/// is returned unchanged.
pub fn steer(velocity: DVec2, accel: f64, dt: f64) -> DVec2 {
    let speed = magnitude(velocity);
    let mut heading = heading_of(velocity);
    if speed > 0.0 {
        heading += accel * dt / speed;
    }
    from_polar(speed, heading)
}

/// One full PN update: returns the interceptor's new velocity.
pub fn proportional_navigation(
    interceptor_position: DVec2,
    interceptor_velocity: DVec2,
    target_position: DVec2,
    target_velocity: DVec2,
    navigation_gain: f64,
    dt: f64,
) -> DVec2 {
    let los_rate = line_of_sight_rate(
        target_position - interceptor_position,
        target_velocity - interceptor_velocity,
    );
    let accel = commanded_acceleration(navigation_gain, magnitude(interceptor_velocity), los_rate);
    steer(interceptor_velocity, accel, dt)
}

/// Closing speed along the line of sight (positive when approaching).
pub fn closing_speed(relative_position: DVec2, relative_velocity: DVec2) -> f64 {
    -safe_div(
        relative_position.dot(relative_velocity),
        magnitude(relative_position),
    )
}

/// Time to go at the current closing speed, `None` when not closing.
pub fn estimate_time_to_go(relative_position: DVec2, relative_velocity: DVec2) -> Option<f64> {
    let range = magnitude(relative_position);
    if range == 0.0 {
        return Some(0.0);
    }
    let vc = closing_speed(relative_position, relative_velocity);
    (vc > 0.0).then(|| range / vc)
}
