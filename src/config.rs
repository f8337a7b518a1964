//! Game tunables
//!
//! Every boundary value the simulation depends on lives here so a run can be
//! reconfigured from a JSON file without touching code.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::platform::input::Rect;

/// Field, robot and vegetable tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Robot ===
    /// Side length of the robot's bounding square
    pub robot_size: f32,
    /// Pixels moved per frame while forward/back is held
    pub robot_speed: f32,
    /// Radians turned per frame while a rotate key is held
    pub robot_rotation_speed: f32,

    // === Vegetables ===
    /// Side length of a vegetable's bounding square
    pub vegetable_size: f32,
    /// Vegetables generated per round
    pub vegetable_count: usize,
    /// Slack subtracted from the summed half-sizes
    pub harvest_tolerance: f32,
    /// Frames a harvested vegetable takes to fade out
    pub fade_duration: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            robot_size: ROBOT_SIZE,
            robot_speed: ROBOT_SPEED,
            robot_rotation_speed: ROBOT_ROTATION_SPEED,

            vegetable_size: VEGETABLE_SIZE,
            vegetable_count: VEGETABLE_COUNT,
            harvest_tolerance: HARVEST_TOLERANCE,
            fade_duration: FADE_DURATION,
        }
    }
}

impl GameConfig {
    /// Center-to-center distance below which the robot harvests a vegetable
    pub fn harvest_distance(&self) -> f32 {
        self.robot_size / 2.0 + self.vegetable_size / 2.0 - self.harvest_tolerance
    }

    /// Center of the field
    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Largest top-left coordinate the robot may occupy
    pub fn robot_max(&self) -> Vec2 {
        Vec2::new(
            (self.field_width - self.robot_size).max(0.0),
            (self.field_height - self.robot_size).max(0.0),
        )
    }

    /// "Play again" button shown once the garden is cleared
    pub fn restart_button(&self) -> Rect {
        let center = self.field_center() + Vec2::new(0.0, RESTART_BUTTON_OFFSET_Y);
        Rect::from_center(center, Vec2::new(RESTART_BUTTON_WIDTH, RESTART_BUTTON_HEIGHT))
    }

    /// Parse a (possibly partial) JSON config and sanitize it
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: GameConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace values the simulation cannot work with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        fn fix(name: &str, value: &mut f32, fallback: f32) {
            if !value.is_finite() || *value < 0.0 {
                log::warn!("Config {} = {} is invalid, using {}", name, value, fallback);
                *value = fallback;
            }
        }

        fix("field_width", &mut self.field_width, defaults.field_width);
        fix("field_height", &mut self.field_height, defaults.field_height);
        fix("robot_size", &mut self.robot_size, defaults.robot_size);
        fix("robot_speed", &mut self.robot_speed, defaults.robot_speed);
        fix(
            "robot_rotation_speed",
            &mut self.robot_rotation_speed,
            defaults.robot_rotation_speed,
        );
        fix("vegetable_size", &mut self.vegetable_size, defaults.vegetable_size);
        if !self.harvest_tolerance.is_finite() {
            log::warn!("Config harvest_tolerance is not finite, using default");
            self.harvest_tolerance = defaults.harvest_tolerance;
        }

        if self.vegetable_count > MAX_VEGETABLE_COUNT {
            log::warn!(
                "Config vegetable_count = {} is too large, using {}",
                self.vegetable_count,
                MAX_VEGETABLE_COUNT
            );
            self.vegetable_count = MAX_VEGETABLE_COUNT;
        }

        if self.fade_duration == 0 {
            log::warn!("Config fade_duration = 0, using 1");
            self.fade_duration = 1;
        }

        self
    }
}
