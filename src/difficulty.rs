//! Difficulty model.
//!
//! Maps a map's difficulty rating (0-200) to the timing and aggressiveness
//! parameters the ghost state machine consumes. Movement speed is deliberately
//! absent: difficulty changes how often and how sharply ghosts hunt, never how
//! fast they move.

use crate::constants::MAX_DIFFICULTY;

/// Lower bound on the A* replanning interval.
pub const MIN_ASTAR_INTERVAL_MS: f32 = 200.0;
/// Replanning interval at difficulty 0.
pub const BASE_ASTAR_INTERVAL_MS: f32 = 2000.0;
/// Power pellet windows never shrink below this.
pub const MIN_VULNERABLE_MS: u32 = 1000;
/// Patrol phase length at difficulty 0 and its floor.
pub const BASE_PATROL_MS: f32 = 10_000.0;
pub const MIN_PATROL_MS: f32 = 2000.0;
/// Chase phase length at difficulty 0 and its ceiling.
pub const BASE_CHASE_MS: f32 = 15_000.0;
pub const MAX_CHASE_MS: f32 = 40_000.0;
/// How much each point of multiplier above 1 adds to the chance of using A*.
pub const ASTAR_CHANCE_PER_MULTIPLIER: f32 = 0.6;

/// `min(d / 100, 2)`, with the rating clamped to [0, 200].
pub fn difficulty_factor(rating: u8) -> f32 {
    (rating.min(MAX_DIFFICULTY) as f32 / 100.0).min(2.0)
}

/// `1 + difficulty_factor`, in [1, 3].
pub fn difficulty_multiplier(rating: u8) -> f32 {
    1.0 + difficulty_factor(rating)
}

/// Milliseconds between forced A* replans.
pub fn astar_recompute_interval_ms(rating: u8) -> f32 {
    (BASE_ASTAR_INTERVAL_MS * (1.0 - 0.4 * difficulty_factor(rating))).max(MIN_ASTAR_INTERVAL_MS)
}

/// Power pellet window after difficulty scaling, never below one second.
pub fn vulnerable_duration_ms(base_duration_ms: u32, rating: u8) -> u32 {
    let multiplier = difficulty_multiplier(rating);
    let scaled = base_duration_ms as f32 * (1.0 - 0.85 * (multiplier - 1.0));
    scaled.max(MIN_VULNERABLE_MS as f32).round() as u32
}

/// Patrol phase length, in [2000, 10000] ms.
pub fn patrol_duration_ms(rating: u8) -> f32 {
    let multiplier = difficulty_multiplier(rating);
    (BASE_PATROL_MS * (1.0 - 0.45 * (multiplier - 1.0))).max(MIN_PATROL_MS)
}

/// Chase phase length, in [15000, 40000] ms.
pub fn chase_duration_ms(rating: u8) -> f32 {
    let multiplier = difficulty_multiplier(rating);
    (BASE_CHASE_MS * (1.0 + 0.8 * (multiplier - 1.0))).min(MAX_CHASE_MS)
}

/// Raises a base probability with the multiplier, capped at `ceiling`.
pub fn scaled_chance(base: f32, ceiling: f32, multiplier: f32) -> f32 {
    (base + ASTAR_CHANCE_PER_MULTIPLIER * (multiplier - 1.0)).min(ceiling)
}

/// All difficulty-derived parameters for one rating, computed once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub rating: u8,
    pub factor: f32,
    pub multiplier: f32,
    pub astar_interval_ms: f32,
    pub patrol_ms: f32,
    pub chase_ms: f32,
}

impl DifficultyProfile {
    pub fn from_rating(rating: u8) -> Self {
        let rating = rating.min(MAX_DIFFICULTY);
        Self {
            rating,
            factor: difficulty_factor(rating),
            multiplier: difficulty_multiplier(rating),
            astar_interval_ms: astar_recompute_interval_ms(rating),
            patrol_ms: patrol_duration_ms(rating),
            chase_ms: chase_duration_ms(rating),
        }
    }

    /// Power pellet window for this rating.
    pub fn vulnerable_duration_ms(&self, base_duration_ms: u32) -> u32 {
        vulnerable_duration_ms(base_duration_ms, self.rating)
    }
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Self::from_rating(0)
    }
}
