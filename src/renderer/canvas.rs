//! Drawing surface abstraction
//!
//! The game never talks to a graphics backend directly. Each frame it issues
//! primitive calls on a `Canvas`; a windowing backend (or a recorder) sits
//! behind the trait.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// Same color with alpha taken from a 0..=255 float opacity
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.round().clamp(0.0, 255.0) as u8,
            ..self
        }
    }
}

impl From<[u8; 3]> for Rgba {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

/// Anchor for text placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    LeftTop,
    Center,
}

/// Primitive drawing operations. Rotations are in radians around the shape center.
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Rgba);

    fn fill_ellipse(&mut self, center: Vec2, size: Vec2, rotation: f32, color: Rgba);

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba);

    fn fill_rounded_rect(
        &mut self,
        center: Vec2,
        size: Vec2,
        corner_radius: f32,
        rotation: f32,
        color: Rgba,
    );

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);

    fn text(&mut self, pos: Vec2, size: f32, align: TextAlign, text: &str, color: Rgba);

    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Rgba) {
        self.fill_ellipse(center, Vec2::splat(diameter), 0.0, color);
    }
}

/// Colors for game elements
pub mod colors {
    use super::Rgba;

    pub const SOIL: Rgba = Rgba::rgb(139, 69, 19);
    pub const FURROW: Rgba = Rgba::rgba(100, 50, 0, 50);
    pub const ROBOT_BODY: Rgba = Rgba::gray(150);
    pub const ROBOT_HEAD: Rgba = Rgba::gray(100);
    pub const ROBOT_EYE: Rgba = Rgba::gray(0);
    pub const ROBOT_GRIPPER: Rgba = Rgba::gray(50);
    pub const THRUSTER: Rgba = Rgba::rgb(255, 150, 0);
    pub const HUD_TEXT: Rgba = Rgba::gray(255);
    pub const BANNER: Rgba = Rgba::rgb(0, 150, 0);
    pub const BUTTON: Rgba = Rgba::rgb(50, 100, 200);
    pub const BUTTON_TEXT: Rgba = Rgba::gray(255);
}
