//! Grid A* search between continuous world positions.
//!
//! Positions are snapped to the tile that contains them; nodes are tiles,
//! expanded in the four cardinal directions only. The returned waypoints are
//! tile centers.

use glam::IVec2;
use pathfinding::prelude::astar;
use smallvec::SmallVec;

use crate::map::direction::Direction;
use crate::map::oracle::{EntityKind, GridOracle};
use crate::map::position::Position;

/// Distance estimate used to guide the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// Exact for an open 4-connected grid, so the search stays optimal.
    #[default]
    Manhattan,
    /// Admissible but weaker; expands more nodes.
    Euclidean,
}

impl Heuristic {
    /// Estimated remaining cost, in tiles, from `from` to `to`.
    pub fn estimate(self, from: IVec2, to: IVec2) -> u32 {
        let delta = (to - from).abs();
        match self {
            Heuristic::Manhattan => (delta.x + delta.y) as u32,
            Heuristic::Euclidean => (delta.as_vec2().length()).floor() as u32,
        }
    }
}

/// Open neighbors of a tile, in `Direction::DIRECTIONS` order.
///
/// The fixed order keeps tie-breaking between equal-cost paths deterministic.
fn successors<O: GridOracle + ?Sized>(oracle: &O, tile: IVec2) -> SmallVec<[(IVec2, u32); 4]> {
    Direction::DIRECTIONS
        .iter()
        .map(|dir| tile + dir.as_ivec2())
        .filter(|next| !oracle.is_blocked_tile(*next, EntityKind::GHOST))
        .map(|next| (next, 1))
        .collect()
}

/// Finds the shortest path from `start` to `goal`.
///
/// The result excludes the start tile and includes the goal tile, so its length
/// is the number of moves required. An empty path means "no path available":
/// the start and goal share a tile, the goal is a wall, or it cannot be reached.
pub fn find_path<O: GridOracle + ?Sized>(start: Position, goal: Position, oracle: &O, heuristic: Heuristic) -> Vec<Position> {
    let start_tile = oracle.world_to_tile(start);
    let goal_tile = oracle.world_to_tile(goal);

    if start_tile == goal_tile || oracle.is_blocked_tile(goal_tile, EntityKind::GHOST) {
        return Vec::new();
    }

    astar(
        &start_tile,
        |&tile| successors(oracle, tile),
        |&tile| heuristic.estimate(tile, goal_tile),
        |&tile| tile == goal_tile,
    )
    .map(|(tiles, _cost)| tiles.into_iter().skip(1).map(|tile| oracle.tile_to_world(tile)).collect())
    .unwrap_or_default()
}
