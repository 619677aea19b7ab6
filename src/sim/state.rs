//! Game state and core simulation types
//!
//! One entity shape covers every moving actor; the `World` owns all of them
//! and is the only place they are mutated.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// Meteor size variants; selects the sprite and with it the collision radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeteorSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl MeteorSize {
    /// All variants, in spawn-roll order
    pub const ALL: [MeteorSize; 3] = [MeteorSize::Small, MeteorSize::Medium, MeteorSize::Large];
}

/// Side effects produced by one `update`, drained by the frame driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A shot left the muzzle
    ShotFired,
    /// A shot destroyed a meteor
    MeteorShattered,
    /// A meteor reached the player; the world has already been reset
    PlayerHit,
}

/// Any moving actor - player, meteor, or shot share this shape
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Entity {
    /// World coordinates, wrapped into the screen rectangle for wrapping kinds
    pub position: Vec2,
    /// Per-frame displacement before throttle scaling; meteors read the
    /// components as per-axis speeds (see `tick`)
    pub velocity: Vec2,
    /// Degrees, never normalized; only its cosine/sine are read
    pub heading: f32,
    /// Signed throttle: player ranges over [-1, 1], shots pin at 1.0
    pub acceleration: f32,
    /// Inactive entities are pruned at the end of the frame
    pub active: bool,
    /// Meaningful for meteors only
    pub size: MeteorSize,
}

/// The whole game: player, meteor field, shots in flight, and the
/// side-effect queue for the current frame
#[derive(Debug, Clone)]
pub struct World {
    pub screen_width: f32,
    pub screen_height: f32,
    pub player: Entity,
    pub meteors: Vec<Entity>,
    pub shots: Vec<Entity>,
    /// Cleared at the start of every `update`; survives a mid-frame reset
    pub events: Vec<GameEvent>,
}

impl World {
    /// Create a world whose initial state is the result of `reset`
    pub fn new(screen_width: f32, screen_height: f32, rng: &mut impl Rng) -> Self {
        let mut world = Self {
            screen_width,
            screen_height,
            player: Entity::default(),
            meteors: Vec::with_capacity(MAX_METEORS),
            shots: Vec::new(),
            events: Vec::new(),
        };
        world.reset(rng);
        world
    }

    /// Screen center, truncated to whole pixels
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.screen_width / 2.0).floor(),
            (self.screen_height / 2.0).floor(),
        )
    }

    /// Wipe the field and start over: recentered player, fresh meteor swarm.
    ///
    /// Leaves `events` alone - they belong to the frame, not the run.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.shots.clear();
        self.meteors.clear();

        self.player.heading = 0.0;
        self.player.acceleration = 0.0;
        self.player.active = true;
        self.player.velocity = Vec2::ZERO;
        self.player.position = self.center();

        for _ in 0..MAX_METEORS {
            let meteor = Entity {
                position: Vec2::new(
                    rng.random_range(0..=self.screen_width as i32) as f32,
                    rng.random_range(0..=self.screen_height as i32) as f32,
                ),
                velocity: Vec2::new(
                    rng.random_range(-METEOR_DRIFT_MAX..=METEOR_DRIFT_MAX) as f32,
                    rng.random_range(-METEOR_DRIFT_MAX..=METEOR_DRIFT_MAX) as f32,
                ),
                heading: rng.random_range(0..=360) as f32,
                acceleration: 0.0,
                active: true,
                size: MeteorSize::ALL[rng.random_range(0..MeteorSize::ALL.len())],
            };
            self.meteors.push(meteor);
        }
    }
}
