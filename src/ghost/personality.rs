//! Per-personality tunables.
//!
//! Everything that makes one ghost behave differently from another lives in
//! [`PersonalityProfile`], one static entry per [`GhostPersonality`]. Distances
//! are px-equivalents on a 32 px reference tile and get scaled by the map's
//! actual cell size at use sites.

use glam::Vec2;
use strum_macros::{AsRefStr, EnumCount, EnumIter};

use crate::map::parser::SpawnPoint;

/// Number of waypoints in every patrol route.
pub const PATROL_ROUTE_LEN: usize = 8;

/// The four ghosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum GhostPersonality {
    /// Direct pursuer.
    Red,
    /// Ambusher, aims ahead of the player.
    Pink,
    /// Flanker, works off the red ghost's position.
    Cyan,
    /// Erratic, backs off when close.
    Orange,
}

impl GhostPersonality {
    pub fn profile(self) -> &'static PersonalityProfile {
        &PROFILES[self as usize]
    }

    /// The map spawn point this ghost starts from.
    pub const fn spawn_point(self) -> SpawnPoint {
        match self {
            GhostPersonality::Red => SpawnPoint::GhostRed,
            GhostPersonality::Pink => SpawnPoint::GhostPink,
            GhostPersonality::Cyan => SpawnPoint::GhostCyan,
            GhostPersonality::Orange => SpawnPoint::GhostOrange,
        }
    }
}

/// How a personality turns a ranked list of candidate moves into a choice.
///
/// Probabilities are cumulative against a single uniform draw, in field order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionPolicy {
    /// Nearest candidate, except for `top_two_chance` where it picks randomly
    /// between the best two.
    Direct { top_two_chance: f32 },
    /// Fully random for `random_chance`, second best for `second_best_chance`,
    /// nearest otherwise.
    Ambush { random_chance: f32, second_best_chance: f32 },
    /// Drops the reversing move with probability `avoid_reverse_chance` when
    /// other moves exist, then takes a suboptimal move among the top three for
    /// `suboptimal_chance`, nearest otherwise.
    Flank { avoid_reverse_chance: f32, suboptimal_chance: f32 },
    /// Random, worst, or median candidate for the given chances, nearest
    /// otherwise.
    Erratic {
        random_chance: f32,
        worst_chance: f32,
        median_chance: f32,
    },
}

/// Static tuning for one personality.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalityProfile {
    /// Distance at which a patrol waypoint counts as reached.
    pub patrol_tolerance: f32,
    /// Patrol waypoints as fractions of the map extent, resolved to the nearest
    /// open tile at use.
    pub patrol_route: [Vec2; PATROL_ROUTE_LEN],
    /// Probability of steering by A* on a given tick, before difficulty.
    pub astar_chance: f32,
    /// Replaces `astar_chance` while the target is farther than
    /// `far_target_distance`.
    pub far_astar_chance: f32,
    pub far_target_distance: f32,
    /// Upper bound on the difficulty-scaled A* chance.
    pub astar_ceiling: f32,
    /// Multiplies the difficulty's replan interval.
    pub astar_cadence_scale: f32,
    pub selection: SelectionPolicy,
}

/// Orange flees toward its corner when the player is within this distance.
pub const ORANGE_FLEE_DISTANCE: f32 = 80.0;
/// Orange's flee corner, as a fraction of the map extent.
pub const ORANGE_FLEE_CORNER: Vec2 = Vec2::new(0.0, 1.0);
/// How many tiles ahead of the player pink aims.
pub const PINK_LOOKAHEAD_TILES: f32 = 4.0;
/// How many tiles ahead of the player cyan pivots around.
pub const CYAN_LOOKAHEAD_TILES: f32 = 2.0;
/// Floor on any ghost's replan interval after cadence scaling.
pub const MIN_GHOST_ASTAR_INTERVAL_MS: f32 = 100.0;

static PROFILES: [PersonalityProfile; 4] = [
    // Red: top-right loop, nearly always plans.
    PersonalityProfile {
        patrol_tolerance: 28.0,
        patrol_route: [
            Vec2::new(0.95, 0.05),
            Vec2::new(0.75, 0.05),
            Vec2::new(0.55, 0.15),
            Vec2::new(0.75, 0.30),
            Vec2::new(0.95, 0.30),
            Vec2::new(0.95, 0.15),
            Vec2::new(0.80, 0.20),
            Vec2::new(0.65, 0.10),
        ],
        astar_chance: 0.8,
        far_astar_chance: 0.8,
        far_target_distance: f32::INFINITY,
        astar_ceiling: 0.98,
        astar_cadence_scale: 0.5,
        selection: SelectionPolicy::Direct { top_two_chance: 0.05 },
    },
    // Pink: top-left loop.
    PersonalityProfile {
        patrol_tolerance: 35.0,
        patrol_route: [
            Vec2::new(0.05, 0.05),
            Vec2::new(0.25, 0.05),
            Vec2::new(0.45, 0.15),
            Vec2::new(0.25, 0.30),
            Vec2::new(0.05, 0.30),
            Vec2::new(0.05, 0.15),
            Vec2::new(0.20, 0.20),
            Vec2::new(0.35, 0.10),
        ],
        astar_chance: 0.5,
        far_astar_chance: 0.5,
        far_target_distance: f32::INFINITY,
        astar_ceiling: 0.85,
        astar_cadence_scale: 0.8,
        selection: SelectionPolicy::Ambush {
            random_chance: 0.2,
            second_best_chance: 0.3,
        },
    },
    // Cyan: bottom-right loop.
    PersonalityProfile {
        patrol_tolerance: 30.0,
        patrol_route: [
            Vec2::new(0.95, 0.95),
            Vec2::new(0.75, 0.95),
            Vec2::new(0.55, 0.85),
            Vec2::new(0.75, 0.70),
            Vec2::new(0.95, 0.70),
            Vec2::new(0.95, 0.85),
            Vec2::new(0.80, 0.80),
            Vec2::new(0.65, 0.90),
        ],
        astar_chance: 0.7,
        far_astar_chance: 0.7,
        far_target_distance: f32::INFINITY,
        astar_ceiling: 0.95,
        astar_cadence_scale: 0.65,
        selection: SelectionPolicy::Flank {
            avoid_reverse_chance: 0.8,
            suboptimal_chance: 0.15,
        },
    },
    // Orange: bottom-left loop, plans mostly when the target is far away.
    PersonalityProfile {
        patrol_tolerance: 40.0,
        patrol_route: [
            Vec2::new(0.05, 0.95),
            Vec2::new(0.25, 0.95),
            Vec2::new(0.45, 0.85),
            Vec2::new(0.25, 0.70),
            Vec2::new(0.05, 0.70),
            Vec2::new(0.05, 0.85),
            Vec2::new(0.20, 0.80),
            Vec2::new(0.35, 0.90),
        ],
        astar_chance: 0.25,
        far_astar_chance: 0.6,
        far_target_distance: 256.0,
        astar_ceiling: 0.8,
        astar_cadence_scale: 1.0,
        selection: SelectionPolicy::Erratic {
            random_chance: 0.25,
            worst_chance: 0.15,
            median_chance: 0.2,
        },
    },
];
