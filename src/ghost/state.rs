use strum_macros::AsRefStr;

/// What a ghost can currently do to, or have done to it by, the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum GhostState {
    /// Hunting or patrolling; touching the player costs a life.
    #[default]
    Normal,
    /// Fleeing after a power pellet; touching the player gets the ghost eaten.
    Vulnerable,
    /// Sitting at spawn after being eaten, unable to move.
    EatenDelay,
}

/// Which target the ghost is steering toward while `Normal` or `Vulnerable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum GhostMode {
    /// Following its scripted route, ignoring the player.
    #[default]
    Patrol,
    /// Pursuing a target derived from the player.
    Chase,
}

impl GhostMode {
    /// The other mode.
    pub const fn toggled(self) -> GhostMode {
        match self {
            GhostMode::Patrol => GhostMode::Chase,
            GhostMode::Chase => GhostMode::Patrol,
        }
    }
}

/// How a ghost picks its direction each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Steering {
    /// Chooses between A* and the personality heuristic per tick, weighted by
    /// personality and difficulty.
    #[default]
    Adaptive,
    /// Never plans a path.
    HeuristicOnly,
    /// Always follows an A* path, using the heuristic only when no path exists.
    PathOnly,
}
