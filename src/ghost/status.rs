//! Read-only diagnostic snapshots of a ghost's navigation state.

use crate::ghost::personality::GhostPersonality;
use crate::ghost::state::{GhostMode, GhostState, Steering};
use crate::map::position::Position;

/// Path-following diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct AStarStatus {
    pub personality: GhostPersonality,
    pub state: GhostState,
    pub mode: GhostMode,
    pub steering: Steering,
    pub path_length: usize,
    pub path_index: usize,
    /// Milliseconds between forced replans for this ghost.
    pub recompute_interval_ms: f32,
    pub recompute_timer_ms: f32,
    /// Replans since the ghost was created.
    pub replans: u32,
    pub difficulty_multiplier: f32,
    /// Chance of steering by A* on the last tick it was rolled.
    pub astar_chance: f32,
    pub current_target: Option<Position>,
}

/// Patrol route diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct PatrolStatus {
    pub personality: GhostPersonality,
    pub mode: GhostMode,
    pub patrol_index: usize,
    pub route_length: usize,
    pub current_waypoint: Option<Position>,
    pub tolerance: f32,
    pub mode_timer_ms: f32,
    /// How long the current mode lasts before flipping.
    pub mode_duration_ms: f32,
}
