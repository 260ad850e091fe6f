//! Game state and core simulation types
//!
//! All state for one run lives in `GameState`; the renderer (or any other
//! host) reads it, only `tick`/`press_jump`/`start_run` mutate it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::generate_track;
use super::rect::Rect;
use crate::consts::*;
use crate::highscores::HighScores;
use crate::tuning::Tuning;
use crate::{LEVEL_NAMES, MAX_LEVEL};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RunPhase {
    /// No run started yet (menu)
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Paused mid-run
    Paused,
    /// Reached the end of the track
    Finished,
    /// Died (HP reached zero or fell off the world)
    GameOver,
}

/// Vertical contact state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Support {
    /// Standing on the ground plane or an obstacle top
    Grounded,
    /// In the air
    Airborne,
}

/// Things that happened during a tick, for the host (HUD, logging)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Player's center cleared an obstacle's right edge
    ObstacleCleared,
    /// A collectible (or mystery bonus) was picked up
    ItemCollected,
    /// Per-level item threshold reached
    LevelUp { level: u32 },
    /// Hit a damage item (or a bad mystery roll)
    Damaged { hp: u8 },
    /// Mystery heal
    Healed { hp: u8 },
    /// Mystery rolled the bonus effect
    MysteryBonus,
    /// Run ended at the track end
    RunFinished { score: u64 },
    /// Run ended in death
    RunFailed { score: u64 },
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// World-space bounding rect
    pub rect: Rect,
    /// Velocity in pixels/second (y grows downward)
    pub vel: Vec2,
    /// Grounded/airborne contact state
    pub support: Support,
    /// One mid-air jump is available until consumed; restored on landing
    pub can_double_jump: bool,
    /// Hit points in [0, 100]
    pub hp: u8,
}

impl Player {
    /// A fresh player at the spawn point, standing on the ground
    pub fn spawn() -> Self {
        Self {
            rect: Rect::new(
                PLAYER_SPAWN_X,
                GROUND_Y - PLAYER_HEIGHT,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            vel: Vec2::ZERO,
            support: Support::Grounded,
            can_double_jump: true,
            hp: MAX_HP,
        }
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.support == Support::Grounded
    }
}

/// Obstacle archetypes, each with a fixed footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    ShortWide,
    TallNarrow,
    LowWide,
    /// The marker past the track end
    FinishMarker,
}

impl ObstacleKind {
    /// Footprint (width, height) of this archetype
    pub fn size(&self) -> (f32, f32) {
        match self {
            ObstacleKind::ShortWide => (70.0, 45.0),
            ObstacleKind::TallNarrow => (40.0, 95.0),
            ObstacleKind::LowWide => (110.0, 30.0),
            ObstacleKind::FinishMarker => (30.0, 140.0),
        }
    }
}

/// A static obstacle resting on the ground plane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
    /// Set once the player has cleared it (scored exactly once)
    pub passed: bool,
}

impl Obstacle {
    /// Build an obstacle of `kind` at `x`, resting on the ground
    pub fn at(kind: ObstacleKind, x: f32) -> Self {
        let (w, h) = kind.size();
        Self {
            kind,
            rect: Rect::new(x, GROUND_Y - h, w, h),
            passed: false,
        }
    }
}

/// A score/level-progress pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub rect: Rect,
    pub collected: bool,
}

/// The one moving hazard: oscillates horizontally around its anchor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageItem {
    pub rect: Rect,
    pub collected: bool,
    /// Oscillation center
    pub anchor_x: f32,
    /// Half-range of travel around the anchor
    pub range: f32,
    /// Current direction of travel, +1 or -1
    pub dir: f32,
}

impl DamageItem {
    /// Advance the oscillation; clamps at `anchor ± range` and reverses.
    /// Runs before the player's collision pass so a standing player can
    /// still be hit.
    pub fn oscillate(&mut self, dt: f32, speed_mult: f32) {
        self.rect.x += self.dir * DAMAGE_OSC_SPEED * speed_mult * dt;
        let lo = self.anchor_x - self.range;
        let hi = self.anchor_x + self.range;
        if self.rect.x >= hi {
            self.rect.x = hi;
            self.dir = -1.0;
        } else if self.rect.x <= lo {
            self.rect.x = lo;
            self.dir = 1.0;
        }
    }
}

/// A pickup with a random effect on contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MysteryItem {
    pub rect: Rect,
    pub collected: bool,
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Process/run seed for reproducibility
    pub seed: u64,
    /// Run RNG: level generation and mystery effects both draw from it
    pub rng: Pcg32,
    /// Current phase; hosts should only call `tick` while `Running`
    pub phase: RunPhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub collectibles: Vec<Collectible>,
    pub damage_items: Vec<DamageItem>,
    pub mystery_items: Vec<MysteryItem>,
    /// Camera left edge; the player can never be left of it
    pub camera_x: f32,
    pub score: u64,
    /// Current level, 1-based, capped at `MAX_LEVEL`
    pub level: u32,
    /// Items collected toward the next level-up
    pub items_this_level: u32,
    /// Items collected across the whole run
    pub items_total: u32,
    /// Horizontal speed cap; grows on level-up
    pub max_move_speed: f32,
    /// Damage-item oscillation multiplier; grows on level-up
    pub hazard_speed_mult: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Gameplay balance parameters
    pub tuning: Tuning,
    /// Leaderboard of completed runs (process memory only)
    pub high_scores: HighScores,
    /// Events raised since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a state with default tuning. No run is in progress until
    /// `start_run` is called.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: RunPhase::NotStarted,
            player: Player::spawn(),
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            damage_items: Vec::new(),
            mystery_items: Vec::new(),
            camera_x: 0.0,
            score: 0,
            level: 1,
            items_this_level: 0,
            items_total: 0,
            max_move_speed: tuning.base_max_speed,
            hazard_speed_mult: 1.0,
            time_ticks: 0,
            tuning,
            high_scores: HighScores::new(),
            events: Vec::new(),
        }
    }

    /// Start (or restart) a run: fresh player and counters, new track.
    /// The RNG stream continues, so successive runs differ in layout.
    pub fn start_run(&mut self) {
        self.player = Player::spawn();
        self.camera_x = 0.0;
        self.score = 0;
        self.level = 1;
        self.items_this_level = 0;
        self.items_total = 0;
        self.max_move_speed = self.tuning.base_max_speed;
        self.hazard_speed_mult = 1.0;
        self.time_ticks = 0;
        self.events.clear();
        generate_track(self);
        self.phase = RunPhase::Running;
        log::info!(
            "run started: {} obstacles, {} collectibles, {} hazards, {} mystery",
            self.obstacles.len(),
            self.collectibles.len(),
            self.damage_items.len(),
            self.mystery_items.len()
        );
    }

    /// Edge-triggered jump: call once per physical key-down, not per tick.
    /// Grounded -> full jump; airborne with the double jump available ->
    /// double jump (consumed). Returns whether a jump happened.
    pub fn press_jump(&mut self) -> bool {
        if self.phase != RunPhase::Running {
            return false;
        }
        if self.player.is_grounded() {
            self.player.vel.y = self.tuning.jump_velocity;
            self.player.support = Support::Airborne;
            true
        } else if self.player.can_double_jump {
            self.player.vel.y = self.tuning.double_jump_velocity;
            self.player.can_double_jump = false;
            true
        } else {
            false
        }
    }

    /// Whether a run is in progress (running or paused mid-run)
    pub fn run_in_progress(&self) -> bool {
        matches!(self.phase, RunPhase::Running | RunPhase::Paused)
    }

    /// Name of the current level
    pub fn level_name(&self) -> &'static str {
        LEVEL_NAMES[(self.level as usize - 1).min(LEVEL_NAMES.len() - 1)]
    }

    /// Credit one item toward score and level progress. Shared by the
    /// collectible path and the mystery bonus effect.
    pub(crate) fn record_item_pickup(&mut self, score_award: u64) {
        self.items_this_level += 1;
        self.items_total += 1;
        self.score += score_award;
        self.events.push(GameEvent::ItemCollected);

        if self.items_this_level >= self.tuning.level_up_items && self.level < MAX_LEVEL {
            self.level += 1;
            self.items_this_level = 0;
            self.max_move_speed *= self.tuning.speed_growth;
            self.hazard_speed_mult *= self.tuning.speed_growth;
            self.events.push(GameEvent::LevelUp { level: self.level });
            log::info!("level up -> {} ({})", self.level, self.level_name());
        }
    }

    /// Apply damage, clamped at zero. Returns true if the player died.
    pub(crate) fn apply_damage(&mut self, amount: u8) -> bool {
        self.player.hp = self.player.hp.saturating_sub(amount);
        self.events.push(GameEvent::Damaged { hp: self.player.hp });
        self.player.hp == 0
    }

    /// End the run: record the score and leave `Running`.
    pub(crate) fn finalize_run(&mut self, won: bool) {
        self.phase = if won {
            RunPhase::Finished
        } else {
            RunPhase::GameOver
        };
        self.events.push(if won {
            GameEvent::RunFinished { score: self.score }
        } else {
            GameEvent::RunFailed { score: self.score }
        });
        let rank = self
            .high_scores
            .add_score(self.items_total, self.score, self.level);
        log::info!(
            "run over ({:?}): score {}, {} items, level {}{}",
            self.phase,
            self.score,
            self.items_total,
            self.level,
            match rank {
                Some(r) => format!(", leaderboard rank {r}"),
                None => String::new(),
            }
        );
    }

    /// Take the events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
