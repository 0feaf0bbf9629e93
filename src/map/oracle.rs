//! The grid occupancy queries consumed by the navigation core.

use std::collections::{HashSet, VecDeque};

use bitflags::bitflags;
use glam::IVec2;

use crate::constants::COLLISION_MARGIN;
use crate::map::direction::Direction;
use crate::map::position::{tile_center, Position, PositionExt};

bitflags! {
    /// Identifies who is asking a collision question, so that the map can apply
    /// per-entity rules such as ghost-only doors.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EntityKind: u8 {
        const PLAYER = 1 << 0;
        const GHOST = 1 << 1;
    }
}

/// Read-only occupancy oracle over a tile grid.
///
/// Every query accepts arbitrary sub-tile world positions. Anything outside the
/// grid is a wall; no query ever fails.
pub trait GridOracle {
    /// Pixels per tile.
    fn cell_size(&self) -> f32;

    /// Grid dimensions as (columns, rows).
    fn dimensions(&self) -> IVec2;

    /// Whether the tile at `tile` is a wall. Out-of-bounds tiles are walls.
    fn is_wall_tile(&self, tile: IVec2) -> bool;

    /// Whether the tile at `tile` blocks `kind`. Walls block everyone.
    fn is_blocked_tile(&self, tile: IVec2, kind: EntityKind) -> bool;

    /// Whether the world point lies on a wall.
    fn is_wall(&self, point: Position) -> bool {
        self.is_wall_tile(point.to_tile(self.cell_size()))
    }

    /// Whether the world point blocks `kind`.
    fn is_blocked(&self, point: Position, kind: EntityKind) -> bool {
        self.is_blocked_tile(point.to_tile(self.cell_size()), kind)
    }

    /// Tests the four corners of a square of side `object_size` centered at
    /// `point`, shrunk by the collision margin.
    fn is_valid_position(&self, point: Position, object_size: f32, kind: EntityKind) -> bool {
        let half = object_size * COLLISION_MARGIN / 2.0;
        [
            Position::new(point.x - half, point.y - half),
            Position::new(point.x + half, point.y - half),
            Position::new(point.x - half, point.y + half),
            Position::new(point.x + half, point.y + half),
        ]
        .into_iter()
        .all(|corner| !self.is_blocked(corner, kind))
    }

    /// Whether the tile coordinate lies inside the grid.
    fn in_bounds(&self, tile: IVec2) -> bool {
        let size = self.dimensions();
        tile.x >= 0 && tile.y >= 0 && tile.x < size.x && tile.y < size.y
    }

    /// World-space center of a tile.
    fn tile_to_world(&self, tile: IVec2) -> Position {
        tile_center(tile, self.cell_size())
    }

    /// Tile containing a world point.
    fn world_to_tile(&self, point: Position) -> IVec2 {
        point.to_tile(self.cell_size())
    }

    /// Finds the tile closest (in steps) to `tile` that does not block `kind`,
    /// searching breadth-first from the tile clamped into the grid.
    ///
    /// Returns `None` only when nothing on the map is walkable for `kind`.
    fn nearest_open_tile(&self, tile: IVec2, kind: EntityKind) -> Option<IVec2> {
        let size = self.dimensions();
        if size.x <= 0 || size.y <= 0 {
            return None;
        }
        let start = tile.clamp(IVec2::ZERO, size - IVec2::ONE);

        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            if !self.is_blocked_tile(current, kind) {
                return Some(current);
            }
            for dir in Direction::DIRECTIONS {
                let next = current + dir.as_ivec2();
                if self.in_bounds(next) && visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        None
    }
}
