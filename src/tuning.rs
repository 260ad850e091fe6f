//! Data-driven game balance
//!
//! Every gameplay-feel parameter in one serde-friendly struct, so balance
//! passes are data edits rather than code edits. World geometry (screen,
//! track, entity footprints) stays in `consts`; this is only the numbers a
//! designer would want to turn.

use serde::{Deserialize, Serialize};

/// Gameplay balance parameters. All speeds/accelerations are pixels and
/// seconds; friction factors are per-60Hz-frame and applied as
/// `factor^(dt*60)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Vertical movement ===
    /// Downward acceleration (y grows downward)
    pub gravity: f32,
    /// Gravity multiplier while ascending with jump held (variable height)
    pub ascend_gravity_scale: f32,
    /// Initial jump velocity (negative = up)
    pub jump_velocity: f32,
    /// Mid-air jump velocity
    pub double_jump_velocity: f32,
    /// Fraction of upward velocity kept when the jump is cut
    pub jump_cut_factor: f32,
    /// Cut only applies while rising faster than this
    pub jump_cut_threshold: f32,
    /// Falling speed cap
    pub terminal_fall_speed: f32,

    // === Horizontal movement ===
    pub move_accel: f32,
    /// Speed cap at level 1; level-ups multiply it by `speed_growth`
    pub base_max_speed: f32,
    pub ground_friction: f32,
    pub air_resistance: f32,
    /// Speeds below this snap to zero
    pub stop_threshold: f32,

    // === Camera ===
    pub camera_lookahead: f32,

    // === Scoring and progression ===
    pub obstacle_score: u64,
    pub collect_score: u64,
    pub mystery_bonus_score: u64,
    /// Items per level-up
    pub level_up_items: u32,
    /// Multiplier applied to move and hazard speed on level-up
    pub speed_growth: f32,
    /// HP lost to a damage item (and to a bad mystery roll)
    pub damage_hp: u8,
    /// HP restored by a mystery heal
    pub heal_hp: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 2200.0,
            ascend_gravity_scale: 0.55,
            jump_velocity: -900.0,
            double_jump_velocity: -780.0,
            jump_cut_factor: 0.45,
            jump_cut_threshold: -450.0,
            terminal_fall_speed: 1400.0,

            move_accel: 2400.0,
            base_max_speed: 340.0,
            ground_friction: 0.80,
            air_resistance: 0.92,
            stop_threshold: 5.0,

            camera_lookahead: 240.0,

            obstacle_score: 10,
            collect_score: 25,
            mystery_bonus_score: 60,
            level_up_items: 10,
            speed_growth: 1.15,
            damage_hp: 20,
            heal_hp: 25,
        }
    }
}

impl Tuning {
    /// Parse a tuning table from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json_str(r#"{ "gravity": 1800.0, "level_up_items": 5 }"#)
            .expect("valid tuning json");
        assert_eq!(tuning.gravity, 1800.0);
        assert_eq!(tuning.level_up_items, 5);
        // Untouched fields keep the shipped defaults
        assert_eq!(tuning.jump_velocity, Tuning::default().jump_velocity);
        assert_eq!(tuning.collect_score, Tuning::default().collect_score);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json_str("{ gravity: }").is_err());
    }

    #[test]
    fn test_roundtrip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back = Tuning::from_json_str(&json).unwrap();
        assert_eq!(back.gravity, tuning.gravity);
        assert_eq!(back.damage_hp, tuning.damage_hp);
    }
}
