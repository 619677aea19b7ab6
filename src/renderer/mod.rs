//! Draw-call translation
//!
//! `draw_frame` walks the world and turns entities into draw calls on an
//! abstract canvas. No game logic lives here: the walker reads final frame
//! state and never mutates it.

use glam::Vec2;

use crate::assets::{texture_for, AssetCatalog, TextureId};
use crate::sim::World;

/// On-screen radius of a shot
const SHOT_DOT_RADIUS: f32 = 1.0;

/// Pixel output boundary: one call per visible entity
pub trait Canvas {
    /// Draw a textured sprite centered at `position`, rotated to `heading`
    /// (degrees), scaled to `size` pixels
    fn draw_sprite(&mut self, texture: TextureId, position: Vec2, heading: f32, size: Vec2);
    /// Draw a filled dot (shots)
    fn draw_dot(&mut self, position: Vec2, radius: f32);
}

/// Issue the draw calls for one frame: meteors, then shots, then the player
/// on top. The player renders at half its texture extent.
pub fn draw_frame(world: &World, catalog: &AssetCatalog, canvas: &mut dyn Canvas) {
    for meteor in &world.meteors {
        let texture = texture_for(meteor.size);
        let extent = catalog.extent(texture);
        canvas.draw_sprite(
            texture,
            meteor.position,
            meteor.heading,
            Vec2::new(extent.width, extent.height),
        );
    }

    for shot in &world.shots {
        canvas.draw_dot(shot.position, SHOT_DOT_RADIUS);
    }

    let player_extent = catalog.extent(TextureId::Player);
    canvas.draw_sprite(
        TextureId::Player,
        world.player.position,
        world.player.heading,
        Vec2::new(player_extent.width / 2.0, player_extent.height / 2.0),
    );
}

/// A draw call captured by [`RecordingCanvas`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Sprite {
        texture: TextureId,
        position: Vec2,
        heading: f32,
        size: Vec2,
    },
    Dot {
        position: Vec2,
        radius: f32,
    },
}

/// Canvas that records calls instead of rasterizing; the backend for
/// headless sessions and renderer tests
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw_sprite(&mut self, texture: TextureId, position: Vec2, heading: f32, size: Vec2) {
        self.calls.push(DrawCall::Sprite {
            texture,
            position,
            heading,
            size,
        });
    }

    fn draw_dot(&mut self, position: Vec2, radius: f32) {
        self.calls.push(DrawCall::Dot { position, radius });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::sim::{Entity, MeteorSize, World};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn small_world() -> World {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut world = World::new(SCREEN_WIDTH, SCREEN_HEIGHT, &mut rng);
        world.meteors.clear();
        world.meteors.push(Entity {
            position: Vec2::new(100.0, 200.0),
            heading: 30.0,
            active: true,
            size: MeteorSize::Large,
            ..Entity::default()
        });
        world.shots.push(Entity {
            position: Vec2::new(50.0, 60.0),
            active: true,
            ..Entity::default()
        });
        world
    }

    #[test]
    fn test_one_call_per_visible_entity() {
        let world = small_world();
        let catalog = AssetCatalog::reference();
        let mut canvas = RecordingCanvas::default();
        draw_frame(&world, &catalog, &mut canvas);

        // One meteor sprite, one shot dot, one player sprite
        assert_eq!(canvas.calls.len(), 3);
        assert!(matches!(
            canvas.calls[0],
            DrawCall::Sprite { texture: TextureId::MeteorLarge, .. }
        ));
        assert!(matches!(canvas.calls[1], DrawCall::Dot { radius, .. } if radius == 1.0));
        assert!(matches!(
            canvas.calls[2],
            DrawCall::Sprite { texture: TextureId::Player, .. }
        ));
    }

    #[test]
    fn test_meteor_draws_at_texture_extent() {
        let world = small_world();
        let catalog = AssetCatalog::reference();
        let mut canvas = RecordingCanvas::default();
        draw_frame(&world, &catalog, &mut canvas);

        let DrawCall::Sprite { size, heading, .. } = canvas.calls[0] else {
            panic!("expected meteor sprite first");
        };
        let extent = catalog.extent(TextureId::MeteorLarge);
        assert_eq!(size, Vec2::new(extent.width, extent.height));
        assert_eq!(heading, 30.0);
    }

    #[test]
    fn test_player_draws_at_half_extent() {
        let world = small_world();
        let catalog = AssetCatalog::reference();
        let mut canvas = RecordingCanvas::default();
        draw_frame(&world, &catalog, &mut canvas);

        let DrawCall::Sprite { texture, size, .. } = *canvas.calls.last().unwrap() else {
            panic!("expected player sprite last");
        };
        let extent = catalog.extent(TextureId::Player);
        assert_eq!(texture, TextureId::Player);
        assert_eq!(size, Vec2::new(extent.width / 2.0, extent.height / 2.0));
    }
}
