//! Direction selection: the personality heuristic, axis-priority waypoint
//! following, and the odds of choosing one over the other.

use rand::Rng;
use smallvec::SmallVec;

use crate::constants::REFERENCE_CELL_SIZE;
use crate::difficulty::scaled_chance;
use crate::entity::MovableEntity;
use crate::ghost::personality::{GhostPersonality, SelectionPolicy};
use crate::map::direction::Direction;
use crate::map::oracle::GridOracle;
use crate::map::position::{Position, PositionExt};

/// Score multiplier for continuing in the current direction. While fleeing the
/// score is divided by it instead, so the current direction still ranks higher.
pub const CONTINUITY_BONUS: f32 = 0.9;

const EPSILON: f32 = 1e-3;

/// A move the map allows, scored by Manhattan distance to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub direction: Direction,
    pub score: f32,
}

pub type Candidates = SmallVec<[Candidate; 4]>;

/// Scores every direction the ghost can move in, best first.
///
/// "Best" is nearest when chasing and farthest when `fleeing`. The current
/// direction gets a 10% edge either way, and ties keep `DIRECTIONS` order.
pub fn rank_candidates<O: GridOracle + ?Sized>(
    entity: &MovableEntity,
    oracle: &O,
    target: Position,
    step: f32,
    fleeing: bool,
) -> Candidates {
    let current = entity.current_direction();
    let mut candidates: Candidates = Direction::DIRECTIONS
        .iter()
        .filter(|dir| entity.can_move(oracle, **dir, step))
        .map(|&direction| {
            let distance = entity.next_position(direction, step).manhattan_distance(target);
            let score = match (direction == current, fleeing) {
                (true, false) => distance * CONTINUITY_BONUS,
                (true, true) => distance / CONTINUITY_BONUS,
                (false, _) => distance,
            };
            Candidate { direction, score }
        })
        .collect();

    if fleeing {
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    } else {
        candidates.sort_by(|a, b| a.score.total_cmp(&b.score));
    }
    candidates
}

/// Picks one of the ranked candidates according to a selection policy.
///
/// Returns `None` only when there are no candidates.
pub fn select_candidate<R: Rng>(
    ranked: &[Candidate],
    policy: SelectionPolicy,
    current: Direction,
    rng: &mut R,
) -> Option<Direction> {
    let count = ranked.len();
    if count == 0 {
        return None;
    }
    let roll: f32 = rng.random();

    let index = match policy {
        SelectionPolicy::Direct { top_two_chance } => {
            if roll < top_two_chance {
                rng.random_range(0..count.min(2))
            } else {
                0
            }
        }
        SelectionPolicy::Ambush {
            random_chance,
            second_best_chance,
        } => {
            if roll < random_chance {
                rng.random_range(0..count)
            } else if roll < random_chance + second_best_chance {
                1.min(count - 1)
            } else {
                0
            }
        }
        SelectionPolicy::Flank {
            avoid_reverse_chance,
            suboptimal_chance,
        } => {
            let reverse = current.opposite();
            let pool: SmallVec<[Candidate; 4]> = if current != Direction::Idle && count > 1 && roll < avoid_reverse_chance {
                ranked.iter().copied().filter(|c| c.direction != reverse).collect()
            } else {
                ranked.iter().copied().collect()
            };
            let second_roll: f32 = rng.random();
            let choice = if pool.len() > 1 && second_roll < suboptimal_chance {
                rng.random_range(1..pool.len().min(3))
            } else {
                0
            };
            return pool.get(choice).map(|c| c.direction);
        }
        SelectionPolicy::Erratic {
            random_chance,
            worst_chance,
            median_chance,
        } => {
            if roll < random_chance {
                rng.random_range(0..count)
            } else if roll < random_chance + worst_chance {
                count - 1
            } else if roll < random_chance + worst_chance + median_chance {
                count / 2
            } else {
                0
            }
        }
    };

    ranked.get(index).map(|c| c.direction)
}

/// Personality-weighted heuristic choice. While `fleeing`, every personality
/// simply takes the candidate farthest from the target.
pub fn choose_direction_advanced<O: GridOracle + ?Sized, R: Rng>(
    entity: &MovableEntity,
    oracle: &O,
    target: Position,
    step: f32,
    personality: GhostPersonality,
    fleeing: bool,
    rng: &mut R,
) -> Option<Direction> {
    let ranked = rank_candidates(entity, oracle, target, step, fleeing);
    if fleeing {
        return ranked.first().map(|c| c.direction);
    }
    select_candidate(&ranked, personality.profile().selection, entity.current_direction(), rng)
}

/// Direction toward `waypoint`, preferring the axis with the larger delta and
/// falling back to the other axis when the first is blocked.
pub fn axis_priority_direction<O: GridOracle + ?Sized>(
    entity: &MovableEntity,
    oracle: &O,
    waypoint: Position,
    step: f32,
) -> Option<Direction> {
    let delta = waypoint - entity.position;
    let horizontal = if delta.x > EPSILON {
        Some(Direction::Right)
    } else if delta.x < -EPSILON {
        Some(Direction::Left)
    } else {
        None
    };
    let vertical = if delta.y > EPSILON {
        Some(Direction::Down)
    } else if delta.y < -EPSILON {
        Some(Direction::Up)
    } else {
        None
    };

    let (primary, secondary) = if delta.x.abs() >= delta.y.abs() {
        (horizontal, vertical)
    } else {
        (vertical, horizontal)
    };

    [primary, secondary]
        .into_iter()
        .flatten()
        .find(|dir| entity.can_move(oracle, *dir, step))
}

/// Whether a waypoint counts as reached from `position` for a given step.
pub fn waypoint_reached(position: Position, waypoint: Position, step: f32) -> bool {
    let delta = (waypoint - position).abs();
    let tolerance = step / 2.0 + EPSILON;
    delta.x <= tolerance && delta.y <= tolerance
}

/// Probability that a personality steers by A* this tick.
pub fn astar_chance(personality: GhostPersonality, multiplier: f32, distance_to_target: f32, cell_size: f32) -> f32 {
    let profile = personality.profile();
    let far = profile.far_target_distance * cell_size / REFERENCE_CELL_SIZE;
    let base = if distance_to_target > far {
        profile.far_astar_chance
    } else {
        profile.astar_chance
    };
    scaled_chance(base, profile.astar_ceiling, multiplier).clamp(0.0, 1.0)
}
