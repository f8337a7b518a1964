//! Harvest proximity test
//!
//! Both the robot and vegetables are treated as points at the center of their
//! bounding squares; a harvest happens when the centers are strictly closer
//! than the configured harvest distance.

use glam::Vec2;

use super::robot::Robot;
use super::vegetable::Vegetable;

/// Strict center-distance test
#[inline]
pub fn within_harvest_range(a: Vec2, b: Vec2, harvest_distance: f32) -> bool {
    a.distance(b) < harvest_distance
}

/// True if `robot` can harvest `veg` this frame
pub fn can_harvest(robot: &Robot, veg: &Vegetable, harvest_distance: f32) -> bool {
    !veg.is_collected()
        && veg.is_visible()
        && within_harvest_range(robot.center(), veg.center(), harvest_distance)
}
