//! UET Run entry point
//!
//! Headless demo: an autopilot plays one run at a fixed timestep, events are
//! logged as they happen, and the final state is printed as JSON. Pass a
//! seed as the first argument to replay a layout; otherwise the wall clock
//! seeds the run.

use uet_run::consts::*;
use uet_run::sim::{GameState, TickInput, TickOutcome, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(wall_clock_seed);

    let mut state = GameState::new(seed);
    state.start_run();

    let input = TickInput {
        move_right: true,
        jump_held: true,
        ..Default::default()
    };

    // Cap the session at 5 minutes of simulated time
    let max_ticks = (300.0 / SIM_DT) as u64;
    let mut outcome = TickOutcome::Continue;
    while outcome == TickOutcome::Continue && state.time_ticks < max_ticks {
        if should_jump(&state) {
            state.press_jump();
        }
        outcome = tick(&mut state, &input, SIM_DT);
        for event in state.drain_events() {
            log::debug!("tick {}: {event:?}", state.time_ticks);
        }
    }

    let summary = serde_json::json!({
        "seed": seed,
        "outcome": format!("{outcome:?}"),
        "score": state.score,
        "items": state.items_total,
        "level": state.level,
        "level_name": state.level_name(),
        "hp": state.player.hp,
        "distance": state.player.rect.x,
        "ticks": state.time_ticks,
        "high_scores": state.high_scores,
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("summary serialization failed: {err}"),
    }
}

fn wall_clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Jump when something solid or hot is close ahead of the player's feet.
/// Ground jumps only; the press stays edge-triggered because this fires at
/// most once per launch.
fn should_jump(state: &GameState) -> bool {
    if !state.player.is_grounded() {
        return false;
    }
    let front = state.player.rect.right();
    let ahead = |left: f32| {
        let gap = left - front;
        (0.0..110.0).contains(&gap)
    };

    state
        .obstacles
        .iter()
        .any(|o| !o.passed && ahead(o.rect.left()))
        || state
            .damage_items
            .iter()
            .any(|d| !d.collected && ahead(d.rect.left()))
}
