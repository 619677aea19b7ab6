//! Per-frame update pipeline
//!
//! One call to `update` advances the whole world by one frame: input,
//! integration, wrapping, collisions, cleanup. Input and randomness are
//! passed in, never sampled here.

use rand::Rng;

use super::collision::{circles_overlap, offscreen, wrap_edge};
use super::state::{Entity, GameEvent, World};
use crate::assets::AssetCatalog;
use crate::consts::*;
use crate::heading_vec;

/// Input snapshot for one frame.
///
/// `fire` is edge-detected by the platform layer: true only on the frame the
/// key went down, never while held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// Advance the world by one frame
pub fn update(world: &mut World, input: &FrameInput, rng: &mut impl Rng, catalog: &AssetCatalog) {
    world.events.clear();

    // Steering and throttle. The chain is exclusive: the first held key in
    // left/right/up/down order wins and the rest are ignored this frame, so
    // e.g. left+up only turns. Kept as shipped.
    if input.left {
        world.player.heading -= TURN_RATE;
    } else if input.right {
        world.player.heading += TURN_RATE;
    } else if input.up {
        if world.player.acceleration < THRUST_LIMIT {
            world.player.acceleration += THRUST_STEP;
        }
    } else if input.down {
        if world.player.acceleration > -THRUST_LIMIT {
            world.player.acceleration -= THRUST_STEP;
        }
    }

    // Fire: the shot inherits the player's position and heading
    if input.fire {
        let shot = Entity {
            position: world.player.position,
            velocity: heading_vec(world.player.heading) * SHOT_SPEED,
            heading: world.player.heading,
            acceleration: 1.0,
            active: true,
            ..Entity::default()
        };
        world.shots.push(shot);
        world.events.push(GameEvent::ShotFired);
    }

    // Player: velocity is recomputed from the heading every frame, so the
    // throttle scales a heading-locked speed instead of compounding
    world.player.velocity = heading_vec(world.player.heading) * PLAYER_SPEED;
    world.player.position += world.player.velocity * world.player.acceleration;
    world.player.position.x = wrap_edge(world.player.position.x, world.screen_width);
    world.player.position.y = wrap_edge(world.player.position.y, world.screen_height);

    // Meteors. The velocity components act as per-axis speeds scaled by the
    // shared heading projection, not as a plain displacement vector. Odd,
    // but it is the shipped drift behavior and stays.
    for meteor in &mut world.meteors {
        let dir = heading_vec(meteor.heading);
        meteor.position.x += dir.x * meteor.velocity.x;
        meteor.position.y += dir.y * meteor.velocity.y;
        meteor.position.x = wrap_edge(meteor.position.x, world.screen_width);
        meteor.position.y = wrap_edge(meteor.position.y, world.screen_height);
    }

    // Shots fly straight and die offscreen instead of wrapping
    for shot in &mut world.shots {
        if shot.active {
            shot.position += shot.velocity * shot.acceleration;
            if offscreen(shot.position.x, world.screen_width)
                || offscreen(shot.position.y, world.screen_height)
            {
                shot.active = false;
            }
        }
    }

    // Shot/meteor hits: the first overlapping meteor in list order takes the
    // hit and the shot stops scanning
    for shot in &mut world.shots {
        if !shot.active {
            continue;
        }
        for meteor in &mut world.meteors {
            if !meteor.active {
                continue;
            }
            let radius = catalog.meteor(meteor.size).width;
            if circles_overlap(shot.position, SHOT_HIT_RADIUS, meteor.position, radius) {
                shot.active = false;
                meteor.active = false;
                world.events.push(GameEvent::MeteorShattered);
                break;
            }
        }
    }

    // A meteor reaching the player ends the run. Reset swaps in a fresh
    // field, so the scan over the old list must stop immediately.
    for i in 0..world.meteors.len() {
        let meteor = world.meteors[i];
        if !meteor.active {
            continue;
        }
        let radius = catalog.meteor(meteor.size).width;
        if circles_overlap(world.player.position, PLAYER_HIT_RADIUS, meteor.position, radius) {
            world.events.push(GameEvent::PlayerHit);
            world.reset(rng);
            break;
        }
    }

    // Prune the casualties, preserving relative order
    world.shots.retain(|shot| shot.active);
    world.meteors.retain(|meteor| meteor.active);
}
