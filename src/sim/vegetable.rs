//! Vegetables: the collectible catalog and per-item fade state

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_VISIBILITY;

/// How a vegetable kind is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Circle,
    Triangle,
}

/// Fixed vegetable catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VegetableKind {
    Lettuce,
    Carrot,
    Tomato,
}

impl VegetableKind {
    pub const ALL: [VegetableKind; 3] = [
        VegetableKind::Lettuce,
        VegetableKind::Carrot,
        VegetableKind::Tomato,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VegetableKind::Lettuce => "lettuce",
            VegetableKind::Carrot => "carrot",
            VegetableKind::Tomato => "tomato",
        }
    }

    /// Base RGB color
    pub fn color(&self) -> [u8; 3] {
        match self {
            VegetableKind::Lettuce => [50, 150, 50],
            VegetableKind::Carrot => [255, 140, 0],
            VegetableKind::Tomato => [200, 50, 50],
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            VegetableKind::Carrot => Shape::Triangle,
            VegetableKind::Lettuce | VegetableKind::Tomato => Shape::Circle,
        }
    }
}

/// A vegetable in the garden; `pos` is the top-left corner of its bounding square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vegetable {
    pub id: u32,
    pub kind: VegetableKind,
    /// Fixed at creation
    pos: Vec2,
    pub size: f32,
    collected: bool,
    /// Fade frames left once harvested
    fade_remaining: u32,
    fade_duration: u32,
    /// Opacity in 0..=255
    visibility: f32,
    /// Draw scale in 0..=1
    scale: f32,
}

impl Vegetable {
    pub fn new(id: u32, kind: VegetableKind, pos: Vec2, size: f32, fade_duration: u32) -> Self {
        let fade_duration = fade_duration.max(1);
        Self {
            id,
            kind,
            pos,
            size,
            collected: false,
            fade_remaining: fade_duration,
            fade_duration,
            visibility: MAX_VISIBILITY,
            scale: 1.0,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    pub fn visibility(&self) -> f32 {
        self.visibility
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_visible(&self) -> bool {
        self.visibility > 0.0
    }

    /// Mark harvested. One-way: there is no way to un-collect.
    pub fn harvest(&mut self) {
        self.collected = true;
    }

    /// Advance the fade by one frame; uncollected vegetables never decay
    pub fn tick_fade(&mut self) {
        if !self.collected || self.fade_remaining == 0 {
            return;
        }
        self.fade_remaining -= 1;
        let t = self.fade_remaining as f32 / self.fade_duration as f32;
        self.visibility = (MAX_VISIBILITY * t).max(0.0);
        self.scale = t.max(0.0);
    }

    /// Still part of the active set
    pub fn is_active(&self) -> bool {
        self.is_visible() || !self.collected
    }
}
