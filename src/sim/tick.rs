//! Per-tick simulation step
//!
//! `tick` advances one frame of the run: hazard motion, axis-separated
//! player movement and resolution, friction, scoring, pickups, terminal
//! transitions, camera. The step order is load-bearing; each numbered
//! section depends on the state left by the previous one.

use rand::Rng;

use super::collision::{self, VerticalHit};
use super::state::{GameEvent, GameState, RunPhase, Support};
use crate::consts::*;

/// Input intents for a single tick (level-triggered)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Jump key level, for variable jump height and the jump cut. The
    /// initial jump and the double jump are edge-triggered separately
    /// through [`GameState::press_jump`].
    pub jump_held: bool,
    /// Pause toggle (host clears it after one tick)
    pub pause: bool,
}

/// What a tick concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Run continues
    Continue,
    /// Player crossed the track end this tick (or the run already had)
    Finished,
    /// Player died this tick (or the run already had)
    GameOver,
}

/// Advance the run by `dt` seconds (clamped to `MAX_DT`).
///
/// Only mutates while `Running`; in any other phase this returns the
/// outcome matching the phase and touches nothing.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutcome {
    if input.pause {
        match state.phase {
            RunPhase::Running => {
                state.phase = RunPhase::Paused;
                return TickOutcome::Continue;
            }
            RunPhase::Paused => state.phase = RunPhase::Running,
            _ => {}
        }
    }

    match state.phase {
        RunPhase::Running => {}
        RunPhase::Finished => return TickOutcome::Finished,
        RunPhase::GameOver => return TickOutcome::GameOver,
        RunPhase::NotStarted | RunPhase::Paused => return TickOutcome::Continue,
    }

    // The host clamps dt; clamp again so a stalled frame cannot tunnel
    let dt = dt.clamp(0.0, MAX_DT);
    let tun = state.tuning;
    state.time_ticks += 1;

    // Hazards move before the player's collision pass, so a standing
    // player can still be hit
    let hazard_mult = state.hazard_speed_mult;
    for item in &mut state.damage_items {
        if !item.collected {
            item.oscillate(dt, hazard_mult);
        }
    }

    // 1. Horizontal intent
    if input.move_right {
        state.player.vel.x = (state.player.vel.x + tun.move_accel * dt).min(state.max_move_speed);
    } else if input.move_left {
        state.player.vel.x = (state.player.vel.x - tun.move_accel * dt).max(-state.max_move_speed);
    }

    // 2. Horizontal integration + resolution
    state.player.rect.x += state.player.vel.x * dt;
    if let Some(hit) =
        collision::resolve_horizontal(&state.player.rect, state.player.vel.x, &state.obstacles)
    {
        state.player.rect.x = hit.corrected_x;
        state.player.vel.x = 0.0;
    }

    // 3. Vertical intent: gravity, lighter while ascending with jump held
    let ascending = state.player.vel.y < 0.0;
    let gravity_scale = if ascending && input.jump_held {
        tun.ascend_gravity_scale
    } else {
        1.0
    };
    state.player.vel.y += tun.gravity * gravity_scale * dt;
    // Jump cut: releasing while still rising fast shortens the jump. The
    // cut lands the velocity inside the threshold, so it applies once.
    if !input.jump_held && state.player.vel.y < tun.jump_cut_threshold {
        state.player.vel.y *= tun.jump_cut_factor;
    }
    if state.player.vel.y > tun.terminal_fall_speed {
        state.player.vel.y = tun.terminal_fall_speed;
    }

    // 4. Vertical integration + resolution
    let prev_top = state.player.rect.top();
    let prev_bottom = state.player.rect.bottom();
    state.player.rect.y += state.player.vel.y * dt;
    state.player.support = Support::Airborne;

    if state.player.rect.bottom() >= GROUND_Y && prev_bottom <= GROUND_Y + EDGE_EPSILON {
        // Ground plane, entered from above. A player already fully below
        // the plane keeps falling (off-world check ends the run later).
        state.player.rect.y = GROUND_Y - state.player.rect.h;
        state.player.vel.y = 0.0;
        state.player.support = Support::Grounded;
        state.player.can_double_jump = true;
    } else if let Some(hit) = collision::resolve_vertical(
        &state.player.rect,
        state.player.vel.y,
        prev_top,
        prev_bottom,
        &state.obstacles,
    ) {
        match hit {
            VerticalHit::Landed { corrected_y, .. } => {
                state.player.rect.y = corrected_y;
                state.player.vel.y = 0.0;
                state.player.support = Support::Grounded;
                state.player.can_double_jump = true;
            }
            VerticalHit::BumpedHead { corrected_y, .. } => {
                state.player.rect.y = corrected_y;
                state.player.vel.y = 0.0;
            }
        }
    } else if state.player.vel.y.abs() <= GROUND_PROBE_MAX_SPEED
        && collision::ground_support(&state.player.rect, &state.obstacles, GROUND_PROBE)
    {
        // Near-ground probe keeps contact stable at rest on a ledge edge
        state.player.support = Support::Grounded;
        state.player.can_double_jump = true;
    }

    // 5. Friction/drag when no horizontal intent is held
    if !input.move_left && !input.move_right {
        let factor = if state.player.is_grounded() {
            tun.ground_friction
        } else {
            tun.air_resistance
        };
        state.player.vel.x *= factor.powf(dt * 60.0);
        if state.player.vel.x.abs() < tun.stop_threshold {
            state.player.vel.x = 0.0;
        }
    }

    // 6. World clamp: never move behind the camera
    if state.player.rect.x < state.camera_x {
        state.player.rect.x = state.camera_x;
        if state.player.vel.x < 0.0 {
            state.player.vel.x = 0.0;
        }
    }

    // 7. Scoring pass: an obstacle is cleared once the player's center is
    // past its right edge (deferred count to keep the borrow simple)
    let center_x = state.player.rect.center().x;
    let mut passed_now = 0u32;
    for obs in &mut state.obstacles {
        if !obs.passed && center_x > obs.rect.right() {
            obs.passed = true;
            passed_now += 1;
        }
    }
    for _ in 0..passed_now {
        state.score += tun.obstacle_score;
        state.events.push(GameEvent::ObstacleCleared);
    }

    // 8. Pickups (may end the run on lethal damage)
    if let Some(outcome) = resolve_pickups(state) {
        return outcome;
    }

    // 9. Terminal checks; both skip the camera update for this tick
    if state.player.rect.x >= TRACK_LENGTH {
        state.finalize_run(true);
        return TickOutcome::Finished;
    }
    if state.player.rect.y > SCREEN_HEIGHT + 2.0 * state.player.rect.h {
        state.finalize_run(false);
        return TickOutcome::GameOver;
    }

    // 10. Camera trails the player
    state.camera_x = (state.player.rect.x - tun.camera_lookahead).max(0.0);

    TickOutcome::Continue
}

/// Overlap tests against uncollected items, with one-shot effects.
/// Returns a terminal outcome when damage kills the player.
fn resolve_pickups(state: &mut GameState) -> Option<TickOutcome> {
    let player_rect = state.player.rect;
    let tun = state.tuning;

    for i in 0..state.collectibles.len() {
        if state.collectibles[i].collected || !player_rect.overlaps(&state.collectibles[i].rect) {
            continue;
        }
        state.collectibles[i].collected = true;
        state.record_item_pickup(tun.collect_score);
    }

    for i in 0..state.damage_items.len() {
        if state.damage_items[i].collected || !player_rect.overlaps(&state.damage_items[i].rect) {
            continue;
        }
        state.damage_items[i].collected = true;
        if state.apply_damage(tun.damage_hp) {
            state.finalize_run(false);
            return Some(TickOutcome::GameOver);
        }
    }

    for i in 0..state.mystery_items.len() {
        if state.mystery_items[i].collected || !player_rect.overlaps(&state.mystery_items[i].rect) {
            continue;
        }
        state.mystery_items[i].collected = true;
        match state.rng.random_range(0..3u32) {
            0 => {
                state.player.hp = (state.player.hp + tun.heal_hp).min(MAX_HP);
                state.events.push(GameEvent::Healed {
                    hp: state.player.hp,
                });
            }
            1 => {
                state.events.push(GameEvent::MysteryBonus);
                state.record_item_pickup(tun.mystery_bonus_score);
            }
            _ => {
                if state.apply_damage(tun.damage_hp) {
                    state.finalize_run(false);
                    return Some(TickOutcome::GameOver);
                }
            }
        }
    }

    None
}
