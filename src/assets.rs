//! Asset metadata table
//!
//! The sim never touches pixels or sound buffers, but meteor collision radii
//! come from texture dimensions, so the catalog of extents is shared state
//! between the render backend and the simulation. It is built once at
//! startup and validated before the first frame; a bad catalog is a launch
//! failure, not a per-frame condition.

use crate::sim::MeteorSize;

/// Textures the game draws, one per sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureId {
    MeteorSmall,
    MeteorMedium,
    MeteorLarge,
    Player,
}

/// Pixel dimensions of a loaded texture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteExtent {
    pub width: f32,
    pub height: f32,
}

impl SpriteExtent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Strongly-typed table of sprite extents, one field per texture
#[derive(Debug, Clone, Copy)]
pub struct AssetCatalog {
    pub meteor_small: SpriteExtent,
    pub meteor_medium: SpriteExtent,
    pub meteor_large: SpriteExtent,
    pub player: SpriteExtent,
}

impl AssetCatalog {
    /// Extents of the bundled reference art
    pub fn reference() -> Self {
        Self {
            meteor_small: SpriteExtent::new(32.0, 32.0),
            meteor_medium: SpriteExtent::new(64.0, 64.0),
            meteor_large: SpriteExtent::new(128.0, 128.0),
            player: SpriteExtent::new(64.0, 64.0),
        }
    }

    /// Lookup by texture, resolved at compile time per variant
    pub fn extent(&self, texture: TextureId) -> SpriteExtent {
        match texture {
            TextureId::MeteorSmall => self.meteor_small,
            TextureId::MeteorMedium => self.meteor_medium,
            TextureId::MeteorLarge => self.meteor_large,
            TextureId::Player => self.player,
        }
    }

    /// Extent of the sprite a meteor of this size renders with; its width is
    /// the meteor's collision radius
    pub fn meteor(&self, size: MeteorSize) -> SpriteExtent {
        self.extent(texture_for(size))
    }

    /// Startup check: every extent must be finite and nonzero, otherwise
    /// collision radii are undefined. Call before the first update.
    pub fn validate(&self) -> Result<(), String> {
        let entries = [
            (TextureId::MeteorSmall, self.meteor_small),
            (TextureId::MeteorMedium, self.meteor_medium),
            (TextureId::MeteorLarge, self.meteor_large),
            (TextureId::Player, self.player),
        ];
        for (texture, extent) in entries {
            if !extent.is_usable() {
                return Err(format!(
                    "unusable extent {}x{} for {:?}",
                    extent.width, extent.height, texture
                ));
            }
        }
        log::debug!("asset catalog validated: {} textures", entries.len());
        Ok(())
    }
}

/// Sprite for a meteor size
pub fn texture_for(size: MeteorSize) -> TextureId {
    match size {
        MeteorSize::Small => TextureId::MeteorSmall,
        MeteorSize::Medium => TextureId::MeteorMedium,
        MeteorSize::Large => TextureId::MeteorLarge,
    }
}
