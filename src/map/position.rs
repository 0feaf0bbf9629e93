//! World-space positions.
//!
//! Positions are plain `glam::Vec2` values (component-wise arithmetic, `length`,
//! `distance`); this module adds the grid-specific operations on top.

use glam::{IVec2, Vec2};

/// A point in world space, in pixels.
pub type Position = Vec2;

/// Grid helpers for world positions.
pub trait PositionExt {
    /// Sum of the absolute component differences.
    fn manhattan_distance(self, other: Position) -> f32;

    /// The tile containing this point, by floor division.
    fn to_tile(self, cell_size: f32) -> IVec2;

    /// The center of the tile containing this point.
    fn snap_to_tile_center(self, cell_size: f32) -> Position;
}

impl PositionExt for Position {
    fn manhattan_distance(self, other: Position) -> f32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    fn to_tile(self, cell_size: f32) -> IVec2 {
        (self / cell_size).floor().as_ivec2()
    }

    fn snap_to_tile_center(self, cell_size: f32) -> Position {
        tile_center(self.to_tile(cell_size), cell_size)
    }
}

/// World-space center of a tile.
pub fn tile_center(tile: IVec2, cell_size: f32) -> Position {
    (tile.as_vec2() + Vec2::splat(0.5)) * cell_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, -2.0);
        assert_eq!(a.manhattan_distance(b), 7.0);
        assert_eq!(b.manhattan_distance(a), 7.0);
    }

    #[test]
    fn test_to_tile_floors_negative_coordinates() {
        assert_eq!(Vec2::new(-0.5, 31.9).to_tile(32.0), IVec2::new(-1, 0));
        assert_eq!(Vec2::new(64.0, 32.0).to_tile(32.0), IVec2::new(2, 1));
    }

    #[test]
    fn test_snap_to_tile_center() {
        assert_eq!(Vec2::new(40.0, 70.0).snap_to_tile_center(32.0), Vec2::new(48.0, 80.0));
        assert_eq!(tile_center(IVec2::new(4, 4), 1.0), Vec2::new(4.5, 4.5));
    }
}
