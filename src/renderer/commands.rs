//! Recording canvas
//!
//! Captures draw calls as data. Used by tests and by the headless driver to
//! dump a frame as JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::canvas::{Canvas, Rgba, TextAlign};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear {
        color: Rgba,
    },
    Ellipse {
        center: Vec2,
        size: Vec2,
        rotation: f32,
        color: Rgba,
    },
    Triangle {
        points: [Vec2; 3],
        color: Rgba,
    },
    RoundedRect {
        center: Vec2,
        size: Vec2,
        corner_radius: f32,
        rotation: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    Text {
        pos: Vec2,
        size: f32,
        align: TextAlign,
        text: String,
        color: Rgba,
    },
}

/// A canvas that stores every call in order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text strings drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Canvas for CommandBuffer {
    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn fill_ellipse(&mut self, center: Vec2, size: Vec2, rotation: f32, color: Rgba) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            size,
            rotation,
            color,
        });
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::Triangle {
            points: [a, b, c],
            color,
        });
    }

    fn fill_rounded_rect(
        &mut self,
        center: Vec2,
        size: Vec2,
        corner_radius: f32,
        rotation: f32,
        color: Rgba,
    ) {
        self.commands.push(DrawCommand::RoundedRect {
            center,
            size,
            corner_radius,
            rotation,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn text(&mut self, pos: Vec2, size: f32, align: TextAlign, text: &str, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            pos,
            size,
            align,
            text: text.to_string(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut buf = CommandBuffer::new();
        buf.clear(Rgba::gray(0));
        buf.fill_circle(Vec2::new(1.0, 2.0), 4.0, Rgba::gray(10));
        buf.text(Vec2::ZERO, 12.0, TextAlign::LeftTop, "hi", Rgba::gray(255));

        assert_eq!(buf.len(), 3);
        assert!(matches!(buf.commands[0], DrawCommand::Clear { .. }));
        assert_eq!(
            buf.commands[1],
            DrawCommand::Ellipse {
                center: Vec2::new(1.0, 2.0),
                size: Vec2::splat(4.0),
                rotation: 0.0,
                color: Rgba::gray(10),
            }
        );
        assert_eq!(buf.texts().collect::<Vec<_>>(), vec!["hi"]);
    }

    #[test]
    fn test_json_dump() {
        let mut buf = CommandBuffer::new();
        buf.line(Vec2::ZERO, Vec2::ONE, 3.0, Rgba::gray(50));
        let json = buf.to_json().expect("serializable");
        assert!(json.contains("Line"));
        let back: CommandBuffer = serde_json::from_str(&json).expect("round trip");
        assert_eq!(back.commands, buf.commands);
    }
}
