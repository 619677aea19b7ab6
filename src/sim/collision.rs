//! Flat-field collision and screen-edge rules
//!
//! Everything in the field is a circle for collision purposes; the screen
//! edges either teleport (player, meteors) or kill (shots).

use glam::Vec2;

/// Circle-circle overlap test, inclusive at exact touch
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) <= reach * reach
}

/// Edge-teleport wrap for one axis.
///
/// Leaving past 0 lands exactly on `limit`; leaving past `limit` lands
/// exactly on 0. Not a modulo wrap: the overshoot distance is discarded.
#[inline]
pub fn wrap_edge(value: f32, limit: f32) -> f32 {
    if value < 0.0 {
        limit
    } else if value > limit {
        0.0
    } else {
        value
    }
}

/// Whether a coordinate left the closed interval [0, limit]
#[inline]
pub fn offscreen(value: f32, limit: f32) -> bool {
    value < 0.0 || value > limit
}
