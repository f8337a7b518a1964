//! Demo/idle mode: steer the robot toward the nearest unharvested vegetable
//!
//! Produces the same held-key set a player would, so the simulation cannot
//! tell the autopilot from a person at the keyboard.

use super::session::Session;
use super::vegetable::Vegetable;
use crate::normalize_angle;
use crate::platform::input::{HeldKeys, Key};

/// The vegetable the autopilot is heading for
pub fn target(session: &Session) -> Option<&Vegetable> {
    let center = session.robot.center();
    session
        .garden
        .iter()
        .filter(|v| !v.is_collected())
        .min_by(|a, b| {
            let dist_a = a.center().distance_squared(center);
            let dist_b = b.center().distance_squared(center);
            dist_a
                .partial_cmp(&dist_b)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

/// Keys to hold this frame. Turns in place until aligned within one
/// rotation step, then drives forward.
pub fn steer(session: &Session) -> HeldKeys {
    let mut held = HeldKeys::new();
    let Some(veg) = target(session) else {
        return held;
    };

    let to_target = veg.center() - session.robot.center();
    let desired = to_target.y.atan2(to_target.x);
    let error = normalize_angle(desired - session.robot.heading);
    let step = session.config().robot_rotation_speed;

    if error.abs() > step {
        held.press(if error > 0.0 {
            Key::RotateRight
        } else {
            Key::RotateLeft
        });
    } else {
        held.press(Key::Forward);
    }
    held
}
