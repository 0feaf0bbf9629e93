//! Ghost navigation and behavior engine for a Pac-Man style game.

pub mod constants;
pub mod difficulty;
pub mod entity;
pub mod error;
pub mod formatter;
pub mod game;
pub mod ghost;
pub mod map;
pub mod pathfinding;
