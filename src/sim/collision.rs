//! Axis-separated collision resolution against static rectangles
//!
//! Movement integrates one axis at a time and pushes the player out of
//! whatever that axis penetrated before the other axis moves. When the moved
//! rect penetrates several obstacles at once (the seam between two adjacent
//! obstacles), the one with the smallest penetration depth on that axis wins
//! and exactly one obstacle is resolved per axis per tick.

use super::rect::Rect;
use super::state::Obstacle;
use crate::consts::{EDGE_EPSILON, GROUND_Y};

/// A horizontal penetration and where to snap back to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalHit {
    /// Index of the resolved obstacle
    pub obstacle: usize,
    /// Corrected x for the player rect (near edge, minus/plus epsilon)
    pub corrected_x: f32,
}

/// A vertical penetration, classified by approach direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalHit {
    /// Fell onto a top surface: snap the bottom onto it, ground the player
    Landed { obstacle: usize, corrected_y: f32 },
    /// Rose into an underside: snap the top below it, stay airborne
    BumpedHead { obstacle: usize, corrected_y: f32 },
}

/// Resolve the horizontal axis after `rect` has been moved by `vel_x * dt`.
///
/// Considers every obstacle the moved rect penetrates and returns the snap
/// against the nearest surface (smallest penetration), or `None` when the
/// rect is clear or not moving horizontally.
pub fn resolve_horizontal(
    rect: &Rect,
    vel_x: f32,
    obstacles: &[Obstacle],
) -> Option<HorizontalHit> {
    if vel_x == 0.0 {
        return None;
    }

    let mut best: Option<(usize, f32)> = None;
    for (i, obs) in obstacles.iter().enumerate() {
        if !rect.overlaps(&obs.rect) {
            continue;
        }
        let penetration = if vel_x > 0.0 {
            rect.right() - obs.rect.left()
        } else {
            obs.rect.right() - rect.left()
        };
        if penetration <= 0.0 {
            continue;
        }
        if best.is_none_or(|(_, p)| penetration < p) {
            best = Some((i, penetration));
        }
    }

    best.map(|(i, _)| {
        let obs = &obstacles[i].rect;
        let corrected_x = if vel_x > 0.0 {
            obs.left() - rect.w - EDGE_EPSILON
        } else {
            obs.right() + EDGE_EPSILON
        };
        HorizontalHit {
            obstacle: i,
            corrected_x,
        }
    })
}

/// Resolve the vertical axis after `rect` has been moved by `vel_y * dt`.
///
/// `prev_top`/`prev_bottom` are the rect's extents before the move; they
/// decide whether a penetration counts as a landing (was at/above the top)
/// or a head bump (was at/below the underside). Side contacts are left to
/// the horizontal pass.
pub fn resolve_vertical(
    rect: &Rect,
    vel_y: f32,
    prev_top: f32,
    prev_bottom: f32,
    obstacles: &[Obstacle],
) -> Option<VerticalHit> {
    let mut best: Option<(usize, f32, bool)> = None; // (index, penetration, landed)
    for (i, obs) in obstacles.iter().enumerate() {
        if !rect.overlaps(&obs.rect) {
            continue;
        }
        if vel_y > 0.0 && prev_bottom <= obs.rect.top() + EDGE_EPSILON {
            let penetration = rect.bottom() - obs.rect.top();
            if penetration > 0.0 && best.is_none_or(|(_, p, _)| penetration < p) {
                best = Some((i, penetration, true));
            }
        } else if vel_y < 0.0 && prev_top >= obs.rect.bottom() - EDGE_EPSILON {
            let penetration = obs.rect.bottom() - rect.top();
            if penetration > 0.0 && best.is_none_or(|(_, p, _)| penetration < p) {
                best = Some((i, penetration, false));
            }
        }
    }

    best.map(|(i, _, landed)| {
        let obs = &obstacles[i].rect;
        if landed {
            VerticalHit::Landed {
                obstacle: i,
                corrected_y: obs.top() - rect.h,
            }
        } else {
            VerticalHit::BumpedHead {
                obstacle: i,
                corrected_y: obs.bottom() + EDGE_EPSILON,
            }
        }
    })
}

/// Near-ground probe: would the rect, dropped by `probe` pixels, rest on the
/// ground plane or on an obstacle top it has not already sunk past? Used to
/// re-establish ground contact at rest on a ledge edge.
pub fn ground_support(rect: &Rect, obstacles: &[Obstacle], probe: f32) -> bool {
    if rect.bottom() + probe >= GROUND_Y {
        return true;
    }
    obstacles.iter().any(|obs| {
        rect.overlaps_x(&obs.rect)
            && rect.bottom() <= obs.rect.top() + EDGE_EPSILON
            && rect.bottom() + probe >= obs.rect.top()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObstacleKind;

    fn obstacle_at(x: f32) -> Obstacle {
        Obstacle::at(ObstacleKind::ShortWide, x) // 70x45, top at GROUND_Y-45
    }

    #[test]
    fn test_horizontal_snap_moving_right() {
        let obstacles = vec![obstacle_at(200.0)];
        // Player overlapping the obstacle's left face after moving right
        let rect = Rect::new(165.0, GROUND_Y - 50.0, 44.0, 56.0);
        let hit = resolve_horizontal(&rect, 300.0, &obstacles).unwrap();
        assert_eq!(hit.obstacle, 0);
        assert!(hit.corrected_x < 200.0 - 44.0 + 0.1);
        assert!((hit.corrected_x - (200.0 - 44.0 - EDGE_EPSILON)).abs() < 0.001);
    }

    #[test]
    fn test_horizontal_snap_moving_left() {
        let obstacles = vec![obstacle_at(200.0)];
        let rect = Rect::new(260.0, GROUND_Y - 50.0, 44.0, 56.0);
        let hit = resolve_horizontal(&rect, -300.0, &obstacles).unwrap();
        assert!((hit.corrected_x - (270.0 + EDGE_EPSILON)).abs() < 0.001);
    }

    #[test]
    fn test_horizontal_clear_when_not_moving() {
        let obstacles = vec![obstacle_at(200.0)];
        let rect = Rect::new(210.0, GROUND_Y - 50.0, 44.0, 56.0);
        assert!(resolve_horizontal(&rect, 0.0, &obstacles).is_none());
    }

    #[test]
    fn test_horizontal_seam_picks_smaller_penetration() {
        // Two obstacles side by side; the rect barely penetrates the second
        // but deeply penetrates the first
        let obstacles = vec![obstacle_at(200.0), obstacle_at(270.0)];
        let rect = Rect::new(230.0, GROUND_Y - 50.0, 44.0, 56.0);
        // Moving right: penetration into [0] is 74, into [1] is 4
        let hit = resolve_horizontal(&rect, 300.0, &obstacles).unwrap();
        assert_eq!(hit.obstacle, 1);
    }

    #[test]
    fn test_vertical_landing() {
        let obstacles = vec![obstacle_at(200.0)];
        let top = obstacles[0].rect.top();
        // Falling; previous bottom was above the obstacle top
        let rect = Rect::new(210.0, top - 56.0 + 3.0, 44.0, 56.0);
        let hit = resolve_vertical(&rect, 400.0, rect.top() - 10.0, top - 7.0, &obstacles);
        match hit {
            Some(VerticalHit::Landed {
                obstacle,
                corrected_y,
            }) => {
                assert_eq!(obstacle, 0);
                assert!((corrected_y - (top - 56.0)).abs() < 0.001);
            }
            other => panic!("expected landing, got {other:?}"),
        }
    }

    #[test]
    fn test_vertical_head_bump() {
        let obstacles = vec![obstacle_at(200.0)];
        let bottom = obstacles[0].rect.bottom();
        // Rising; previous top was below the obstacle underside
        let rect = Rect::new(210.0, bottom - 5.0, 44.0, 56.0);
        let hit = resolve_vertical(&rect, -400.0, bottom + 2.0, bottom + 2.0 + 56.0, &obstacles);
        match hit {
            Some(VerticalHit::BumpedHead { corrected_y, .. }) => {
                assert!(corrected_y >= bottom);
            }
            other => panic!("expected head bump, got {other:?}"),
        }
    }

    #[test]
    fn test_vertical_side_contact_ignored() {
        let obstacles = vec![obstacle_at(200.0)];
        // Falling past the obstacle's side: previous bottom already below its top
        let rect = Rect::new(190.0, GROUND_Y - 40.0, 44.0, 56.0);
        let prev_top = rect.top() - 2.0;
        let prev_bottom = rect.bottom() - 2.0; // well below obstacle top already
        assert!(resolve_vertical(&rect, 100.0, prev_top, prev_bottom, &obstacles).is_none());
    }

    #[test]
    fn test_ground_support_on_plane_and_ledge() {
        let obstacles = vec![obstacle_at(200.0)];
        let top = obstacles[0].rect.top();

        // Resting on the ground plane
        let on_ground = Rect::new(50.0, GROUND_Y - 56.0, 44.0, 56.0);
        assert!(ground_support(&on_ground, &obstacles, 2.0));

        // Resting on the obstacle
        let on_ledge = Rect::new(210.0, top - 56.0, 44.0, 56.0);
        assert!(ground_support(&on_ledge, &obstacles, 2.0));

        // Hovering well above everything
        let airborne = Rect::new(210.0, top - 200.0, 44.0, 56.0);
        assert!(!ground_support(&airborne, &obstacles, 2.0));
    }
}
