//! Keyboard and pointer input
//!
//! Only the four movement keys are bound; every other key is ignored.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A bound movement key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Forward,
    Back,
    RotateLeft,
    RotateRight,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::Forward, Key::Back, Key::RotateLeft, Key::RotateRight];

    /// Map a typed character to its binding (case-insensitive WASD)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'w' => Some(Key::Forward),
            's' => Some(Key::Back),
            'a' => Some(Key::RotateLeft),
            'd' => Some(Key::RotateRight),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Key::Forward => 0,
            Key::Back => 1,
            Key::RotateLeft => 2,
            Key::RotateRight => 3,
        }
    }
}

/// Discrete event from the input backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(char),
    /// Key press from a backend that also reports where the pointer was
    KeyDownAt { key: char, x: f32, y: f32 },
    KeyUp(char),
    Click { x: f32, y: f32 },
}

/// Which movement keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    held: [bool; 4],
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a held set from a list of keys
    pub fn with(keys: &[Key]) -> Self {
        let mut held = Self::new();
        for &key in keys {
            held.press(key);
        }
        held
    }

    pub fn press(&mut self, key: Key) {
        self.held[key.index()] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    /// True while forward or back is held (drives the thruster flame)
    pub fn is_moving(&self) -> bool {
        self.is_held(Key::Forward) || self.is_held(Key::Back)
    }

    pub fn clear(&mut self) {
        self.held = [false; 4];
    }

    /// Apply a key event; unbound keys and clicks are ignored
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(c) | InputEvent::KeyDownAt { key: c, .. } => {
                if let Some(key) = Key::from_char(c) {
                    self.press(key);
                }
            }
            InputEvent::KeyUp(c) => {
                if let Some(key) = Key::from_char(c) {
                    self.release(key);
                }
            }
            InputEvent::Click { .. } => {}
        }
    }
}

/// Axis-aligned rectangle used for pointer hit tests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict containment: points on the border are outside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.min.x && point.x < self.max.x && point.y > self.min.y && point.y < self.max.y
    }
}
