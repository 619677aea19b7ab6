//! Meteor Storm - a wrap-around meteor field shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `renderer`: Draw-call translation over an abstract canvas
//! - `platform`: Input sampling abstraction
//! - `assets`: Texture/sound metadata table
//! - `audio`: Sound effect dispatch

pub mod assets;
pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Reference screen dimensions (fixed for a session)
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Frame rate the driver targets; `update` runs once per frame
    pub const TARGET_FPS: u32 = 60;

    /// Meteor population immediately after a reset
    pub const MAX_METEORS: usize = 30;

    /// Steering rate while a turn key is held (degrees per frame)
    pub const TURN_RATE: f32 = 5.0;
    /// Throttle change while up/down is held
    pub const THRUST_STEP: f32 = 0.04;
    /// Throttle magnitude bound, both directions
    pub const THRUST_LIMIT: f32 = 1.0;

    /// Heading-locked player speed at full throttle (pixels per frame)
    pub const PLAYER_SPEED: f32 = 6.0;
    /// Shot muzzle speed (pixels per frame)
    pub const SHOT_SPEED: f32 = 10.0;

    /// Collision radii for the point-like actors; meteors use their
    /// texture width instead
    pub const PLAYER_HIT_RADIUS: f32 = 1.0;
    pub const SHOT_HIT_RADIUS: f32 = 1.0;

    /// Meteor drift speed bound per axis (inclusive integer draw)
    pub const METEOR_DRIFT_MAX: i32 = 5;
}

/// Unit vector for a heading in degrees
#[inline]
pub fn heading_vec(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}
