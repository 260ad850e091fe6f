//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Hosts drive it through three entry points: `GameState::start_run`,
//! `GameState::press_jump` (edge-triggered), and `tick`; everything else is
//! a read-only query surface.

pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{HorizontalHit, VerticalHit, ground_support, resolve_horizontal, resolve_vertical};
pub use level::generate_track;
pub use rect::Rect;
pub use state::{
    Collectible, DamageItem, GameEvent, GameState, MysteryItem, Obstacle, ObstacleKind, Player,
    RunPhase, Support,
};
pub use tick::{TickInput, TickOutcome, tick};
