//! Procedural track generation
//!
//! One run's world is built in four passes: obstacles first, then the three
//! pickup tiers in order (collectible, damage, mystery). Each tier steps
//! along the track with a jittered gap and rejects any candidate whose
//! padded rect would touch geometry from earlier passes. Rejected slots are
//! skipped, never retried, so nothing is guaranteed to exist at any given
//! step and the placement invariant is unconditional.

use rand::Rng;

use super::rect::Rect;
use super::state::{Collectible, DamageItem, GameState, MysteryItem, Obstacle, ObstacleKind};
use crate::consts::*;

/// Replace the world-object containers of `state` with a fresh track.
/// Draws from the state's RNG; player state is untouched.
pub fn generate_track(state: &mut GameState) {
    generate_obstacles(state);
    generate_collectibles(state);
    generate_damage_items(state);
    generate_mystery_items(state);
    log::debug!(
        "track generated: {} obstacles, {}/{}/{} items",
        state.obstacles.len(),
        state.collectibles.len(),
        state.damage_items.len(),
        state.mystery_items.len()
    );
}

/// Candidate placement test: the rect, grown by the placement padding, must
/// be clear of everything placed before it.
fn placement_clear<'a>(candidate: &Rect, mut placed: impl Iterator<Item = &'a Rect>) -> bool {
    let padded = candidate.inflated(PLACEMENT_PADDING);
    placed.all(|r| !padded.overlaps(r))
}

fn generate_obstacles(state: &mut GameState) {
    state.obstacles.clear();
    let mut x = OBSTACLE_START_X;
    while x < TRACK_LENGTH {
        let kind = match state.rng.random_range(0..3u32) {
            0 => ObstacleKind::ShortWide,
            1 => ObstacleKind::TallNarrow,
            _ => ObstacleKind::LowWide,
        };
        state.obstacles.push(Obstacle::at(kind, x));
        x += OBSTACLE_BASE_GAP + state.rng.random_range(0.0..OBSTACLE_GAP_JITTER);
    }
    // World visually terminates past the finish line
    state.obstacles.push(Obstacle::at(
        ObstacleKind::FinishMarker,
        TRACK_LENGTH + FINISH_MARKER_OFFSET,
    ));
}

fn generate_collectibles(state: &mut GameState) {
    state.collectibles.clear();
    let mut x = COLLECT_START_X;
    while x < TRACK_LENGTH {
        let height = COLLECT_HEIGHTS[state.rng.random_range(0..COLLECT_HEIGHTS.len())];
        let rect = Rect::new(x, GROUND_Y - height - COLLECT_SIZE, COLLECT_SIZE, COLLECT_SIZE);
        if placement_clear(&rect, state.obstacles.iter().map(|o| &o.rect)) {
            state.collectibles.push(Collectible {
                rect,
                collected: false,
            });
        }
        x += COLLECT_BASE_GAP + state.rng.random_range(0.0..COLLECT_GAP_JITTER);
    }
}

fn generate_damage_items(state: &mut GameState) {
    state.damage_items.clear();
    let mut x = DAMAGE_START_X;
    while x < TRACK_LENGTH {
        let height = DAMAGE_HEIGHTS[state.rng.random_range(0..DAMAGE_HEIGHTS.len())];
        let dir = if state.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let rect = Rect::new(x, GROUND_Y - height - DAMAGE_SIZE, DAMAGE_SIZE, DAMAGE_SIZE);
        let clear = placement_clear(
            &rect,
            state
                .obstacles
                .iter()
                .map(|o| &o.rect)
                .chain(state.collectibles.iter().map(|c| &c.rect)),
        );
        if clear {
            state.damage_items.push(DamageItem {
                rect,
                collected: false,
                anchor_x: x,
                range: DAMAGE_OSC_RANGE,
                dir,
            });
        }
        x += DAMAGE_BASE_GAP + state.rng.random_range(0.0..DAMAGE_GAP_JITTER);
    }
}

fn generate_mystery_items(state: &mut GameState) {
    state.mystery_items.clear();
    let mut x = MYSTERY_START_X;
    while x < TRACK_LENGTH {
        let rect = Rect::new(
            x,
            GROUND_Y - MYSTERY_HEIGHT - MYSTERY_SIZE,
            MYSTERY_SIZE,
            MYSTERY_SIZE,
        );
        let clear = placement_clear(
            &rect,
            state
                .obstacles
                .iter()
                .map(|o| &o.rect)
                .chain(state.collectibles.iter().map(|c| &c.rect))
                .chain(state.damage_items.iter().map(|d| &d.rect)),
        );
        if clear {
            state.mystery_items.push(MysteryItem {
                rect,
                collected: false,
            });
        }
        x += MYSTERY_BASE_GAP + state.rng.random_range(0.0..MYSTERY_GAP_JITTER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_same_seed_same_track() {
        let mut a = GameState::new(424242);
        let mut b = GameState::new(424242);
        a.start_run();
        b.start_run();

        assert_eq!(a.obstacles.len(), b.obstacles.len());
        for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(oa.kind, ob.kind);
            assert_eq!(oa.rect, ob.rect);
        }
        assert_eq!(a.collectibles.len(), b.collectibles.len());
        assert_eq!(a.mystery_items.len(), b.mystery_items.len());
    }

    #[test]
    fn test_obstacles_rest_on_ground() {
        let mut state = GameState::new(1);
        state.start_run();
        for obs in &state.obstacles {
            assert_eq!(obs.rect.bottom(), GROUND_Y);
            assert!(!obs.passed);
        }
    }

    #[test]
    fn test_finish_marker_past_track_end() {
        let mut state = GameState::new(1);
        state.start_run();
        let marker = state
            .obstacles
            .iter()
            .find(|o| o.kind == ObstacleKind::FinishMarker)
            .expect("finish marker present");
        assert!(marker.rect.x >= TRACK_LENGTH);
        // Everything else lies on the track proper
        assert!(
            state
                .obstacles
                .iter()
                .filter(|o| o.kind != ObstacleKind::FinishMarker)
                .all(|o| o.rect.x < TRACK_LENGTH)
        );
    }

    #[test]
    fn test_obstacle_gaps_at_least_base() {
        let mut state = GameState::new(99);
        state.start_run();
        let xs: Vec<f32> = state.obstacles.iter().map(|o| o.rect.x).collect();
        for pair in xs.windows(2) {
            assert!(pair[1] - pair[0] >= OBSTACLE_BASE_GAP - 0.001 || pair[1] >= TRACK_LENGTH);
        }
    }

    proptest! {
        // The placement invariant, across arbitrary seeds: every committed
        // item keeps at least the padding margin from all earlier-tier
        // geometry at generation time.
        #[test]
        fn prop_generated_tiers_never_overlap(seed in any::<u64>()) {
            let mut state = GameState::new(seed);
            state.start_run();

            for c in &state.collectibles {
                let padded = c.rect.inflated(PLACEMENT_PADDING);
                for o in &state.obstacles {
                    prop_assert!(!padded.overlaps(&o.rect));
                }
            }
            for d in &state.damage_items {
                let padded = d.rect.inflated(PLACEMENT_PADDING);
                for o in &state.obstacles {
                    prop_assert!(!padded.overlaps(&o.rect));
                }
                for c in &state.collectibles {
                    prop_assert!(!padded.overlaps(&c.rect));
                }
            }
            for m in &state.mystery_items {
                let padded = m.rect.inflated(PLACEMENT_PADDING);
                for o in &state.obstacles {
                    prop_assert!(!padded.overlaps(&o.rect));
                }
                for c in &state.collectibles {
                    prop_assert!(!padded.overlaps(&c.rect));
                }
                for d in &state.damage_items {
                    prop_assert!(!padded.overlaps(&d.rect));
                }
            }
        }

        #[test]
        fn prop_items_sit_above_ground(seed in any::<u64>()) {
            let mut state = GameState::new(seed);
            state.start_run();
            for c in &state.collectibles {
                prop_assert!(c.rect.bottom() <= GROUND_Y);
            }
            for d in &state.damage_items {
                prop_assert!(d.rect.bottom() <= GROUND_Y);
            }
            for m in &state.mystery_items {
                prop_assert!(m.rect.bottom() <= GROUND_Y);
            }
        }
    }
}
