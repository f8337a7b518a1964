//! The player-controlled robot

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::heading_vector;
use crate::platform::input::{HeldKeys, Key};

/// The robot; `pos` is the top-left corner of its bounding square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    pub pos: Vec2,
    /// Heading in radians, unbounded (0 faces +x)
    pub heading: f32,
    pub size: f32,
}

impl Robot {
    /// Robot centered on the field, facing +x
    pub fn centered(config: &GameConfig) -> Self {
        let half = config.robot_size / 2.0;
        Self {
            pos: config.field_center() - Vec2::splat(half),
            heading: 0.0,
            size: config.robot_size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Advance one frame: rotate, translate along heading, clamp into the field
    pub fn update(&mut self, held: &HeldKeys, config: &GameConfig) {
        if held.is_held(Key::RotateLeft) {
            self.heading -= config.robot_rotation_speed;
        }
        if held.is_held(Key::RotateRight) {
            self.heading += config.robot_rotation_speed;
        }

        let step = heading_vector(self.heading) * config.robot_speed;
        if held.is_held(Key::Forward) {
            self.pos += step;
        }
        if held.is_held(Key::Back) {
            self.pos -= step;
        }

        self.pos = self.pos.clamp(Vec2::ZERO, config.robot_max());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_centered() {
        let config = GameConfig::default();
        let robot = Robot::centered(&config);
        assert_eq!(robot.pos, Vec2::new(380.0, 280.0));
        assert_eq!(robot.center(), Vec2::new(400.0, 300.0));
        assert_eq!(robot.heading, 0.0);
    }

    #[test]
    fn test_rotate_left_only_turns() {
        let config = GameConfig::default();
        let mut robot = Robot::centered(&config);
        let start = robot.pos;
        let held = HeldKeys::with(&[Key::RotateLeft]);

        let frames = 25;
        for _ in 0..frames {
            robot.update(&held, &config);
        }

        let expected = -(frames as f32) * config.robot_rotation_speed;
        assert!((robot.heading - expected).abs() < 1e-4);
        assert_eq!(robot.pos, start);
    }

    #[test]
    fn test_forward_moves_along_heading() {
        let config = GameConfig::default();
        let mut robot = Robot::centered(&config);
        robot.update(&HeldKeys::with(&[Key::Forward]), &config);
        assert!((robot.pos.x - 383.0).abs() < 1e-4);
        assert!((robot.pos.y - 280.0).abs() < 1e-4);

        robot.update(&HeldKeys::with(&[Key::Back]), &config);
        assert!((robot.pos.x - 380.0).abs() < 1e-4);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let config = GameConfig::default();
        let mut robot = Robot::centered(&config);
        let start = robot.clone();
        robot.update(&HeldKeys::with(&Key::ALL), &config);
        assert!((robot.heading - start.heading).abs() < 1e-6);
        assert!(robot.pos.distance(start.pos) < 1e-4);
    }

    #[test]
    fn test_clamped_at_walls() {
        let config = GameConfig::default();
        let mut robot = Robot::centered(&config);
        let held = HeldKeys::with(&[Key::Forward]);
        for _ in 0..500 {
            robot.update(&held, &config);
        }
        assert_eq!(robot.pos.x, config.field_width - config.robot_size);
        assert_eq!(robot.pos.y, 280.0);

        robot.heading = std::f32::consts::PI * 1.25;
        for _ in 0..500 {
            robot.update(&held, &config);
        }
        assert_eq!(robot.pos, Vec2::ZERO);
    }
}
