//! Fixed-rate frame step
//!
//! One call to [`tick`] is one frame. Order is fixed:
//! input events, robot movement, harvest check, fade, prune.
//! Rendering happens afterwards, outside the simulation.

use super::autopilot;
use super::session::Session;
use crate::platform::input::InputEvent;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Discrete events delivered since the last frame, in arrival order
    pub events: Vec<InputEvent>,
    /// Demo mode: the autopilot drives instead of the held keys
    pub autopilot: bool,
}

/// Advance the session by one frame
pub fn tick(session: &mut Session, input: &FrameInput) {
    for event in &input.events {
        session.handle_input(event);
    }

    let held = if input.autopilot {
        autopilot::steer(session)
    } else {
        *session.held_keys()
    };
    session.update(&held);
    session.check_harvest();

    session.garden.tick();
    session.garden.prune();

    session.end_frame();
}
