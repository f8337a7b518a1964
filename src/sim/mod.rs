//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (generation order)
//! - No rendering or platform dependencies beyond held-key lookups

pub mod autopilot;
pub mod collision;
pub mod garden;
pub mod robot;
pub mod session;
pub mod tick;
pub mod vegetable;

pub use collision::{can_harvest, within_harvest_range};
pub use garden::Garden;
pub use robot::Robot;
pub use session::{GameEvent, Session};
pub use tick::{FrameInput, tick};
pub use vegetable::{Shape, Vegetable, VegetableKind};
