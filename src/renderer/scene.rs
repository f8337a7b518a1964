//! Frame drawing
//!
//! Pure functions of session state: nothing here mutates the simulation.

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use super::canvas::{Canvas, Rgba, TextAlign, colors};
use crate::config::GameConfig;
use crate::sim::{Robot, Session, Shape, Vegetable};

/// Draw one complete frame
pub fn draw_frame(session: &Session, canvas: &mut impl Canvas) {
    let config = session.config();

    draw_field(config, canvas);
    for veg in session.garden.iter() {
        draw_vegetable(veg, canvas);
    }
    draw_robot(
        &session.robot,
        session.applied_keys().is_moving(),
        session.frame(),
        canvas,
    );
    draw_hud(session.collected_count(), session.total(), canvas);

    if session.is_complete() {
        draw_cleared_banner(config, canvas);
    }
}

/// Soil background with a furrow grid every two vegetable widths
pub fn draw_field(config: &GameConfig, canvas: &mut impl Canvas) {
    canvas.clear(colors::SOIL);

    let spacing = config.vegetable_size * 2.0;
    if spacing <= 0.0 {
        return;
    }

    let mut x = 0.0;
    while x < config.field_width {
        canvas.line(
            Vec2::new(x, 0.0),
            Vec2::new(x, config.field_height),
            1.0,
            colors::FURROW,
        );
        x += spacing;
    }
    let mut y = 0.0;
    while y < config.field_height {
        canvas.line(
            Vec2::new(0.0, y),
            Vec2::new(config.field_width, y),
            1.0,
            colors::FURROW,
        );
        y += spacing;
    }
}

/// Draw a vegetable at its current fade. The shrink stays centered in the
/// bounding square. Nothing is drawn once fully faded.
pub fn draw_vegetable(veg: &Vegetable, canvas: &mut impl Canvas) {
    if !veg.is_visible() {
        return;
    }

    let color = Rgba::from(veg.kind.color()).with_alpha(veg.visibility());
    let size = veg.size;
    let current = size * veg.scale();
    let offset = (size - current) / 2.0;
    let Vec2 { x, y } = veg.pos();

    match veg.kind.shape() {
        Shape::Circle => canvas.fill_circle(veg.center(), current, color),
        Shape::Triangle => canvas.fill_triangle(
            Vec2::new(x + size / 2.0, y + offset),
            Vec2::new(x + offset, y + size - offset),
            Vec2::new(x + size - offset, y + size - offset),
            color,
        ),
    }
}

/// Thruster flicker alpha in [100, 200], driven by the frame counter
fn thruster_alpha(frame: u64) -> u8 {
    let wobble = (frame as f32 * 1.7).sin() * 0.6 + (frame as f32 * 0.45).sin() * 0.4;
    (150.0 + 50.0 * wobble).clamp(100.0, 200.0) as u8
}

/// Draw the robot. Local coordinates put its nose at -y, then the whole
/// figure is rotated so heading 0 faces +x.
pub fn draw_robot(robot: &Robot, moving: bool, frame: u64, canvas: &mut impl Canvas) {
    let s = robot.size;
    let center = robot.center();
    let rotation = robot.heading + FRAC_PI_2;
    let turn = Vec2::from_angle(rotation);
    let at = |local: Vec2| center + turn.rotate(local);

    if moving {
        let flame = colors::THRUSTER.with_alpha(thruster_alpha(frame) as f32);
        canvas.fill_ellipse(
            at(Vec2::new(0.0, s * 0.7)),
            Vec2::new(s * 0.4, s * 0.8),
            rotation,
            flame,
        );
    }

    // Body
    canvas.fill_rounded_rect(center, Vec2::new(s, s * 1.2), 5.0, rotation, colors::ROBOT_BODY);

    // Head
    canvas.fill_circle(at(Vec2::new(0.0, -s * 0.4)), s * 0.6, colors::ROBOT_HEAD);

    // Eyes
    canvas.fill_circle(at(Vec2::new(-s * 0.15, -s * 0.5)), s * 0.1, colors::ROBOT_EYE);
    canvas.fill_circle(at(Vec2::new(s * 0.15, -s * 0.5)), s * 0.1, colors::ROBOT_EYE);

    // Gripper
    canvas.line(
        at(Vec2::new(0.0, s * 0.3)),
        at(Vec2::new(0.0, s * 0.6)),
        3.0,
        colors::ROBOT_GRIPPER,
    );
    canvas.line(
        at(Vec2::new(-s * 0.1, s * 0.6)),
        at(Vec2::new(s * 0.1, s * 0.6)),
        3.0,
        colors::ROBOT_GRIPPER,
    );
}

pub fn draw_hud(collected: usize, total: usize, canvas: &mut impl Canvas) {
    canvas.text(
        Vec2::new(10.0, 10.0),
        18.0,
        TextAlign::LeftTop,
        &format!("Vegetables harvested: {} / {}", collected, total),
        colors::HUD_TEXT,
    );
}

/// "Mission complete" message and the restart button
pub fn draw_cleared_banner(config: &GameConfig, canvas: &mut impl Canvas) {
    canvas.text(
        config.field_center(),
        40.0,
        TextAlign::Center,
        "Garden cleared! Mission complete!",
        colors::BANNER,
    );

    let button = config.restart_button();
    canvas.fill_rounded_rect(button.center(), button.size(), 10.0, 0.0, colors::BUTTON);
    canvas.text(
        button.center(),
        20.0,
        TextAlign::Center,
        "Play again",
        colors::BUTTON_TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::commands::{CommandBuffer, DrawCommand};
    use crate::sim::VegetableKind;

    fn harvested(kind: VegetableKind, ticks: u32) -> Vegetable {
        let mut veg = Vegetable::new(1, kind, Vec2::new(100.0, 200.0), 30.0, 30);
        veg.harvest();
        for _ in 0..ticks {
            veg.tick_fade();
        }
        veg
    }

    #[test]
    fn test_full_size_circle() {
        let veg = Vegetable::new(1, VegetableKind::Tomato, Vec2::new(100.0, 200.0), 30.0, 30);
        let mut buf = CommandBuffer::new();
        draw_vegetable(&veg, &mut buf);
        assert_eq!(
            buf.commands,
            vec![DrawCommand::Ellipse {
                center: Vec2::new(115.0, 215.0),
                size: Vec2::splat(30.0),
                rotation: 0.0,
                color: Rgba::rgba(200, 50, 50, 255),
            }]
        );
    }

    #[test]
    fn test_shrinking_triangle_stays_centered() {
        let veg = harvested(VegetableKind::Carrot, 15);
        let mut buf = CommandBuffer::new();
        draw_vegetable(&veg, &mut buf);

        let [apex, left, right] = match &buf.commands[..] {
            [DrawCommand::Triangle { points, color }] => {
                assert_eq!(color.a, 128);
                *points
            }
            other => panic!("unexpected commands {:?}", other),
        };
        // Half size: 15 wide, offset 7.5 on each side
        assert!((apex - Vec2::new(115.0, 207.5)).length() < 1e-3);
        assert!((left - Vec2::new(107.5, 222.5)).length() < 1e-3);
        assert!((right - Vec2::new(122.5, 222.5)).length() < 1e-3);
    }

    #[test]
    fn test_faded_vegetable_not_drawn() {
        let veg = harvested(VegetableKind::Lettuce, 30);
        let mut buf = CommandBuffer::new();
        draw_vegetable(&veg, &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_thruster_only_when_moving() {
        let robot = Robot::centered(&GameConfig::default());
        let thrusters = |buf: &CommandBuffer| {
            buf.commands
                .iter()
                .filter(|c| matches!(c, DrawCommand::Ellipse { color, .. } if color.r == 255 && color.g == 150))
                .count()
        };

        let mut idle = CommandBuffer::new();
        draw_robot(&robot, false, 0, &mut idle);
        assert_eq!(thrusters(&idle), 0);

        let mut moving = CommandBuffer::new();
        draw_robot(&robot, true, 0, &mut moving);
        assert_eq!(thrusters(&moving), 1);
    }

    #[test]
    fn test_thruster_alpha_range() {
        for frame in 0..1000 {
            let a = thruster_alpha(frame);
            assert!((100..=200).contains(&a));
        }
    }

    #[test]
    fn test_robot_head_faces_heading() {
        // Heading 0 faces +x, so the head sits to the right of center
        let robot = Robot::centered(&GameConfig::default());
        let mut buf = CommandBuffer::new();
        draw_robot(&robot, false, 0, &mut buf);
        let head = buf.commands.iter().find_map(|c| match c {
            DrawCommand::Ellipse { center, size, .. } if (size.x - 24.0).abs() < 1e-4 => Some(*center),
            _ => None,
        });
        let head = head.expect("head drawn");
        assert!((head - Vec2::new(416.0, 300.0)).length() < 1e-3);
    }

    #[test]
    fn test_frame_hud_and_banner() {
        let mut session = Session::new(GameConfig::default(), 5);
        let mut buf = CommandBuffer::new();
        draw_frame(&session, &mut buf);
        let texts: Vec<&str> = buf.texts().collect();
        assert_eq!(texts, vec!["Vegetables harvested: 0 / 15"]);

        for veg in session.garden.iter_mut() {
            veg.harvest();
        }
        buf.clear_commands();
        draw_frame(&session, &mut buf);
        let texts: Vec<&str> = buf.texts().collect();
        assert_eq!(
            texts,
            vec![
                "Vegetables harvested: 15 / 15",
                "Garden cleared! Mission complete!",
                "Play again"
            ]
        );
    }
}
