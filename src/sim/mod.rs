//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per frame, fixed rate
//! - Injected input snapshot and seeded RNG only
//! - Stable list order (pruning preserves relative order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, offscreen, wrap_edge};
pub use state::{Entity, GameEvent, MeteorSize, World};
pub use tick::{FrameInput, update};
