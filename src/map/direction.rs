use glam::{IVec2, Vec2};
use strum_macros::AsRefStr;

/// The four cardinal directions, plus `Idle` for an entity that is not moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Idle,
}

impl Direction {
    /// The four cardinal directions.
    /// This is just a convenience constant for iterating over the directions.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the opposite direction. `Idle` is its own opposite.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Idle => Direction::Idle,
        }
    }

    /// Returns the unit displacement of this direction (zero for `Idle`).
    ///
    /// World space has y pointing down, matching screen coordinates.
    pub fn as_vec2(self) -> Vec2 {
        self.into()
    }

    /// Returns the direction as a tile offset.
    pub fn as_ivec2(self) -> IVec2 {
        self.as_vec2().as_ivec2()
    }

    /// Whether this direction moves along the x axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Whether this direction moves along the y axis.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Returns the direction as a usize (0-4). Useful for indexing into arrays.
    pub const fn as_usize(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
            Direction::Idle => 4,
        }
    }
}

impl From<Direction> for Vec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -Vec2::Y,
            Direction::Down => Vec2::Y,
            Direction::Left => -Vec2::X,
            Direction::Right => Vec2::X,
            Direction::Idle => Vec2::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        assert_eq!(Direction::Idle.opposite(), Direction::Idle);
    }

    #[test]
    fn test_direction_as_vec2() {
        assert_eq!(Direction::Up.as_vec2(), -Vec2::Y);
        assert_eq!(Direction::Down.as_vec2(), Vec2::Y);
        assert_eq!(Direction::Left.as_vec2(), -Vec2::X);
        assert_eq!(Direction::Right.as_vec2(), Vec2::X);
        assert_eq!(Direction::Idle.as_vec2(), Vec2::ZERO);
    }

    #[test]
    fn test_directions_constant_excludes_idle() {
        assert_eq!(Direction::DIRECTIONS.len(), 4);
        assert!(!Direction::DIRECTIONS.contains(&Direction::Idle));
    }

    #[test]
    fn test_direction_axes() {
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Up.is_vertical());
        assert!(!Direction::Idle.is_horizontal());
        assert!(!Direction::Idle.is_vertical());
    }

    #[test]
    fn test_direction_as_ref() {
        assert_eq!(Direction::Up.as_ref(), "up");
        assert_eq!(Direction::Idle.as_ref(), "idle");
    }
}
