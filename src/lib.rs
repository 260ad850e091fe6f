//! UET Run - a side-scrolling runner, headless
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level generation, game state)
//! - `highscores`: In-memory top-10 leaderboard
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest dt the tick accepts; anything bigger is clamped (tunneling guard)
    pub const MAX_DT: f32 = 0.05;

    /// World dimensions (y grows downward, as on screen)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Top of the ground plane
    pub const GROUND_Y: f32 = 500.0;
    /// World length; crossing this x finishes the run
    pub const TRACK_LENGTH: f32 = 6000.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 44.0;
    pub const PLAYER_HEIGHT: f32 = 56.0;
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const MAX_HP: u8 = 100;

    /// Camera trails the player by this much, clamped to >= 0
    pub const CAMERA_LOOKAHEAD: f32 = 240.0;

    /// Snap distance kept between player and obstacle faces after resolution
    pub const EDGE_EPSILON: f32 = 0.01;
    /// Downward probe distance used to re-establish ground contact at rest
    pub const GROUND_PROBE: f32 = 2.0;
    /// Probe only runs when |vertical velocity| is below this
    pub const GROUND_PROBE_MAX_SPEED: f32 = 40.0;

    /// Obstacle generation
    pub const OBSTACLE_START_X: f32 = 600.0;
    pub const OBSTACLE_BASE_GAP: f32 = 420.0;
    pub const OBSTACLE_GAP_JITTER: f32 = 260.0;
    /// Finish marker sits this far past the track end
    pub const FINISH_MARKER_OFFSET: f32 = 80.0;

    /// Collectible generation (3 height tiers above ground)
    pub const COLLECT_START_X: f32 = 450.0;
    pub const COLLECT_BASE_GAP: f32 = 300.0;
    pub const COLLECT_GAP_JITTER: f32 = 180.0;
    pub const COLLECT_SIZE: f32 = 28.0;
    pub const COLLECT_HEIGHTS: [f32; 3] = [40.0, 130.0, 210.0];

    /// Damage item generation (2 height tiers, larger step)
    pub const DAMAGE_START_X: f32 = 700.0;
    pub const DAMAGE_BASE_GAP: f32 = 520.0;
    pub const DAMAGE_GAP_JITTER: f32 = 260.0;
    pub const DAMAGE_SIZE: f32 = 34.0;
    pub const DAMAGE_HEIGHTS: [f32; 2] = [70.0, 150.0];
    /// Base horizontal oscillation speed (scaled by the hazard multiplier)
    pub const DAMAGE_OSC_SPEED: f32 = 120.0;
    /// Oscillation half-range around the anchor
    pub const DAMAGE_OSC_RANGE: f32 = 70.0;

    /// Mystery item generation (single height tier, largest step)
    pub const MYSTERY_START_X: f32 = 900.0;
    pub const MYSTERY_BASE_GAP: f32 = 760.0;
    pub const MYSTERY_GAP_JITTER: f32 = 320.0;
    pub const MYSTERY_SIZE: f32 = 30.0;
    pub const MYSTERY_HEIGHT: f32 = 120.0;

    /// Placement margin; generated rects stay at least this far apart
    pub const PLACEMENT_PADDING: f32 = 12.0;
}

/// Level names, indexed by `level - 1`. Leveling stops at the last entry.
pub const LEVEL_NAMES: [&str; 5] = ["Freshman", "Sophomore", "Junior", "Senior", "Graduate"];

/// Highest reachable level
pub const MAX_LEVEL: u32 = LEVEL_NAMES.len() as u32;
