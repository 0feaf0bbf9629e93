//! This module contains all the constants used by the navigation engine.

use std::time::Duration;

/// Target simulation rate of the orchestration loop.
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Movement speeds are expressed in world units per 60 Hz frame.
pub const FRAMES_PER_SECOND: f32 = 60.0;

/// The tile size all px-equivalent tunables are authored against.
///
/// Distances such as patrol tolerances or the orange flee radius are scaled by
/// `cell_size / REFERENCE_CELL_SIZE` so that they mean the same thing on any map.
pub const REFERENCE_CELL_SIZE: f32 = 32.0;

/// The default cell size for maps that do not declare one.
pub const DEFAULT_CELL_SIZE: f32 = 32.0;

/// Speed a ghost returns to after vulnerability ends or a full reset.
pub const DEFAULT_GHOST_SPEED: f32 = 1.5;

/// Speed lost while vulnerable.
pub const VULNERABLE_SPEED_DECREMENT: f32 = 1.0;

/// Speed floor while vulnerable.
pub const MIN_VULNERABLE_SPEED: f32 = 1.0;

/// How long an eaten ghost sits at its spawn before re-entering play, in milliseconds.
pub const EATEN_DELAY_MS: f32 = 5000.0;

/// Power pellet window before difficulty scaling, in milliseconds.
pub const BASE_VULNERABLE_MS: u32 = 8000;

/// Ghost body size as a fraction of the cell size (28 px on a 32 px tile).
pub const GHOST_BODY_RATIO: f32 = 0.875;

/// Player speed used by the orchestration loop.
pub const DEFAULT_PLAYER_SPEED: f32 = 2.0;

/// Player body size as a fraction of the cell size.
pub const PLAYER_BODY_RATIO: f32 = 0.875;

/// Collision boxes are shrunk by this factor before corner tests.
pub const COLLISION_MARGIN: f32 = 0.8;

/// Difficulty rating assumed when a map does not declare one.
pub const DEFAULT_DIFFICULTY: u8 = 50;

/// Upper bound of the difficulty rating.
pub const MAX_DIFFICULTY: u8 = 200;

/// Points awarded by the orchestration loop.
pub const PELLET_SCORE: u32 = 10;
pub const POWER_PELLET_SCORE: u32 = 50;
pub const GHOST_SCORE: u32 = 200;

/// Lives the player starts a game with.
pub const STARTING_LIVES: u8 = 3;

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapTile {
    /// An empty, walkable tile.
    Empty,
    /// A wall tile.
    Wall,
    /// A regular pellet.
    Pellet,
    /// A power pellet.
    PowerPellet,
    /// A door only ghosts may pass through.
    GhostDoor,
}

impl MapTile {
    /// Decodes a cell code from a JSON layout (0 empty, 1 wall, 2 pellet, 3 power pellet).
    pub const fn from_code(code: i64) -> Option<MapTile> {
        match code {
            0 => Some(MapTile::Empty),
            1 => Some(MapTile::Wall),
            2 => Some(MapTile::Pellet),
            3 => Some(MapTile::PowerPellet),
            _ => None,
        }
    }

    /// Whether this tile holds something the player can eat.
    pub const fn is_edible(self) -> bool {
        matches!(self, MapTile::Pellet | MapTile::PowerPellet)
    }
}
