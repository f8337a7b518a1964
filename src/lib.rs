//! Robo Harvest - steer a robot around a garden and harvest every vegetable
//!
//! Core modules:
//! - `sim`: Deterministic frame-stepped simulation (robot, garden, session)
//! - `renderer`: Turns session state into primitive draw calls on a `Canvas`
//! - `platform`: Input events and held-key tracking
//! - `config`: Data-driven game tunables

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;

use glam::Vec2;

/// Game configuration defaults
pub mod consts {
    /// Nominal frame rate of the external frame clock
    pub const FRAME_RATE: u32 = 60;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Robot defaults
    pub const ROBOT_SIZE: f32 = 40.0;
    /// Pixels per frame
    pub const ROBOT_SPEED: f32 = 3.0;
    /// Radians per frame
    pub const ROBOT_ROTATION_SPEED: f32 = 0.08;

    /// Vegetable defaults
    pub const VEGETABLE_SIZE: f32 = 30.0;
    pub const VEGETABLE_COUNT: usize = 15;
    /// Upper bound accepted from config
    pub const MAX_VEGETABLE_COUNT: usize = 10_000;
    /// Subtracted from the summed half-sizes to get the harvest distance
    pub const HARVEST_TOLERANCE: f32 = 10.0;
    /// Frames from harvest until a vegetable is gone
    pub const FADE_DURATION: u32 = 30;

    /// Full opacity in the 0..=255 alpha convention
    pub const MAX_VISIBILITY: f32 = 255.0;

    /// Restart button geometry (centered below the field center)
    pub const RESTART_BUTTON_WIDTH: f32 = 200.0;
    pub const RESTART_BUTTON_HEIGHT: f32 = 50.0;
    pub const RESTART_BUTTON_OFFSET_Y: f32 = 70.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can round up to exactly TAU
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}

/// Unit vector pointing along `heading`
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}
