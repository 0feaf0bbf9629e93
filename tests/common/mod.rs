#![allow(dead_code)]

use glam::{IVec2, Vec2};
use pacman_ghosts::ghost::{Ghost, GhostPersonality};
use pacman_ghosts::map::builder::Map;
use pacman_ghosts::map::oracle::GridOracle;
use pacman_ghosts::map::position::Position;

/// One 60 Hz frame, in seconds.
pub const FRAME: f32 = 1.0 / 60.0;

pub fn map_path(name: &str) -> String {
    format!("{}/maps/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// A wall-free room of the given size.
pub fn open_room(width: usize, height: usize, cell_size: f32) -> Map {
    let rows = vec![" ".repeat(width); height];
    Map::from_ascii(&rows, cell_size).unwrap()
}

pub fn board(rows: &[&str]) -> Map {
    Map::from_ascii(rows, 32.0).unwrap()
}

/// A ghost with a fixed random seed.
pub fn seeded_ghost(personality: GhostPersonality, spawn: Position, seed: u64) -> Ghost {
    let mut ghost = Ghost::new(personality, spawn);
    ghost.seed_rng(seed);
    ghost
}

pub fn tile_of(map: &Map, position: Position) -> IVec2 {
    map.world_to_tile(position)
}

pub fn center_of(map: &Map, x: i32, y: i32) -> Vec2 {
    map.tile_to_world(IVec2::new(x, y))
}

/// Whether two waypoints are one orthogonal step apart.
pub fn is_adjacent(map: &Map, a: Position, b: Position) -> bool {
    let delta = (tile_of(map, a) - tile_of(map, b)).abs();
    delta.x + delta.y == 1
}
