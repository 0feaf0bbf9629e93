//! The ghost behavior state machine.
//!
//! A ghost is always in one [`GhostState`] and, outside of the eaten delay, one
//! [`GhostMode`]. Each tick it picks a target for its mode and personality,
//! decides between following an A* path and the personality heuristic, and
//! moves through its [`MovableEntity`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use crate::constants::{
    DEFAULT_DIFFICULTY, DEFAULT_GHOST_SPEED, EATEN_DELAY_MS, GHOST_BODY_RATIO, MAX_DIFFICULTY, MIN_VULNERABLE_SPEED,
    REFERENCE_CELL_SIZE, VULNERABLE_SPEED_DECREMENT,
};
use crate::difficulty::DifficultyProfile;
use crate::entity::MovableEntity;
use crate::error::MapError;
use crate::map::builder::Map;
use crate::map::direction::Direction;
use crate::map::oracle::{EntityKind, GridOracle};
use crate::map::position::Position;
use crate::pathfinding::{find_path, Heuristic};

pub mod personality;
pub mod state;
pub mod status;
pub mod steering;
pub mod targeting;

pub use personality::{GhostPersonality, PersonalityProfile, SelectionPolicy};
pub use state::{GhostMode, GhostState, Steering};
pub use status::{AStarStatus, PatrolStatus};
pub use targeting::GhostSnapshot;

use personality::{MIN_GHOST_ASTAR_INTERVAL_MS, PATROL_ROUTE_LEN};
use steering::{astar_chance, axis_priority_direction, choose_direction_advanced, waypoint_reached};
use targeting::{resolve_map_point, target_position};

/// A single ghost: identity, movement, timers, and cached navigation state.
#[derive(Debug, Clone)]
pub struct Ghost {
    pub personality: GhostPersonality,
    pub movement: MovableEntity,
    base_speed: f32,
    spawn_position: Position,
    state: GhostState,
    mode: GhostMode,
    steering: Steering,
    difficulty: DifficultyProfile,
    mode_timer_ms: f32,
    vulnerable_timer_ms: f32,
    spawn_delay_ms: f32,
    animation_time: f32,
    path: Vec<Position>,
    path_index: usize,
    /// Target the current path was planned toward.
    path_target: Option<Position>,
    recompute_timer_ms: f32,
    replans: u32,
    patrol_index: usize,
    patrol_waypoint: Option<Position>,
    current_target: Option<Position>,
    last_astar_chance: f32,
    rng: SmallRng,
}

impl Ghost {
    /// Creates a ghost at `spawn_position` with the default speed and difficulty.
    pub fn new(personality: GhostPersonality, spawn_position: Position) -> Ghost {
        Ghost {
            personality,
            movement: MovableEntity::new(spawn_position, DEFAULT_GHOST_SPEED, GHOST_BODY_RATIO, EntityKind::GHOST),
            base_speed: DEFAULT_GHOST_SPEED,
            spawn_position,
            state: GhostState::Normal,
            mode: GhostMode::Patrol,
            steering: Steering::Adaptive,
            difficulty: DifficultyProfile::from_rating(DEFAULT_DIFFICULTY),
            mode_timer_ms: 0.0,
            vulnerable_timer_ms: 0.0,
            spawn_delay_ms: 0.0,
            animation_time: 0.0,
            path: Vec::new(),
            path_index: 0,
            path_target: None,
            recompute_timer_ms: 0.0,
            replans: 0,
            patrol_index: 0,
            patrol_waypoint: None,
            current_target: None,
            last_astar_chance: 0.0,
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Creates a ghost at its spawn point on `map`, using the map's difficulty.
    pub fn from_map(personality: GhostPersonality, map: &Map) -> Result<Ghost, MapError> {
        let spawn = personality.spawn_point();
        let position = map.spawn_position(spawn).ok_or(MapError::MissingSpawn(spawn.name()))?;
        Ok(Ghost::new(personality, position).with_difficulty(map.difficulty()))
    }

    /// Sets the base speed, in units per 60 Hz frame.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.base_speed = speed;
        self.movement.speed = speed;
        self
    }

    pub fn with_steering(mut self, steering: Steering) -> Self {
        self.steering = steering;
        self
    }

    pub fn with_difficulty(mut self, rating: u8) -> Self {
        self.set_difficulty(rating);
        self
    }

    /// Replaces the OS-seeded generator with a deterministic one.
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    pub fn state(&self) -> GhostState {
        self.state
    }

    pub fn mode(&self) -> GhostMode {
        self.mode
    }

    pub fn steering(&self) -> Steering {
        self.steering
    }

    pub fn position(&self) -> Position {
        self.movement.position
    }

    pub fn direction(&self) -> Direction {
        self.movement.current_direction()
    }

    pub fn speed(&self) -> f32 {
        self.movement.speed
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    pub fn spawn_position(&self) -> Position {
        self.spawn_position
    }

    pub fn difficulty(&self) -> &DifficultyProfile {
        &self.difficulty
    }

    pub fn animation_time(&self) -> f32 {
        self.animation_time
    }

    pub fn current_target(&self) -> Option<Position> {
        self.current_target
    }

    /// The cached A* path, including already consumed waypoints.
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn is_vulnerable(&self) -> bool {
        self.state == GhostState::Vulnerable
    }

    pub fn is_in_spawn_delay(&self) -> bool {
        self.state == GhostState::EatenDelay
    }

    pub fn vulnerable_remaining_ms(&self) -> f32 {
        self.vulnerable_timer_ms
    }

    pub fn spawn_delay_remaining_ms(&self) -> f32 {
        self.spawn_delay_ms
    }

    /// Power pellet window this ghost would get for `base_duration_ms`.
    pub fn difficulty_adjusted_vulnerable_duration(&self, base_duration_ms: u32) -> u32 {
        self.difficulty.vulnerable_duration_ms(base_duration_ms)
    }

    pub fn snapshot(&self) -> GhostSnapshot {
        GhostSnapshot {
            personality: self.personality,
            position: self.movement.position,
            state: self.state,
        }
    }

    /// Milliseconds between forced replans, after the personality's cadence.
    pub fn astar_interval_ms(&self) -> f32 {
        (self.difficulty.astar_interval_ms * self.personality.profile().astar_cadence_scale).max(MIN_GHOST_ASTAR_INTERVAL_MS)
    }

    /// How long the current mode lasts before flipping.
    pub fn mode_duration_ms(&self) -> f32 {
        match self.mode {
            GhostMode::Patrol => self.difficulty.patrol_ms,
            GhostMode::Chase => self.difficulty.chase_ms,
        }
    }

    /// Advances the ghost by `dt` seconds.
    ///
    /// Without a map or a player position only the animation, spawn-delay and
    /// vulnerability clocks run. `other_ghosts` may include this ghost.
    pub fn update<O: GridOracle + ?Sized>(
        &mut self,
        dt: f32,
        player_position: Option<Position>,
        player_direction: Option<Direction>,
        map: Option<&O>,
        other_ghosts: &[GhostSnapshot],
    ) {
        let dt_ms = dt * 1000.0;
        self.animation_time += dt;

        if self.state == GhostState::EatenDelay {
            self.spawn_delay_ms -= dt_ms;
            if self.spawn_delay_ms <= 0.0 {
                self.spawn_delay_ms = 0.0;
                self.transition(GhostState::Normal);
            }
            return;
        }

        if self.state == GhostState::Vulnerable {
            self.vulnerable_timer_ms -= dt_ms;
            if self.vulnerable_timer_ms <= 0.0 {
                self.vulnerable_timer_ms = 0.0;
                self.movement.speed = DEFAULT_GHOST_SPEED;
                self.invalidate_path();
                self.transition(GhostState::Normal);
            }
        }

        let (Some(map), Some(player_position)) = (map, player_position) else {
            return;
        };
        let player_direction = player_direction.unwrap_or_default();

        self.mode_timer_ms += dt_ms;
        if self.mode_timer_ms >= self.mode_duration_ms() {
            self.set_mode(self.mode.toggled());
        }
        self.recompute_timer_ms += dt_ms;

        let waypoint = self.advance_patrol(map);
        let target = target_position(
            self.mode,
            self.personality,
            self.movement.position,
            waypoint,
            player_position,
            player_direction,
            other_ghosts,
            map,
        );
        self.current_target = Some(target);

        let step = self.movement.step_distance(dt);
        if step <= 0.0 {
            return;
        }
        let direction = self.choose_direction(map, target, step);
        self.apply_movement(map, target, step, direction);
    }

    /// The target this ghost would steer toward right now.
    pub fn get_target_position<O: GridOracle + ?Sized>(
        &self,
        player_position: Position,
        player_direction: Direction,
        other_ghosts: &[GhostSnapshot],
        map: &O,
    ) -> Position {
        let waypoint = self.patrol_waypoint_on(map);
        target_position(
            self.mode,
            self.personality,
            self.movement.position,
            waypoint,
            player_position,
            player_direction,
            other_ghosts,
            map,
        )
    }

    /// Makes the ghost edible for the difficulty-adjusted `base_duration_ms`.
    /// A ghost waiting at spawn after being eaten is unaffected.
    pub fn set_vulnerable(&mut self, base_duration_ms: u32) {
        if self.state == GhostState::EatenDelay {
            trace!(ghost = self.personality.as_ref(), "Ignoring power pellet during spawn delay");
            return;
        }
        let duration = self.difficulty.vulnerable_duration_ms(base_duration_ms);
        self.vulnerable_timer_ms = duration as f32;
        self.movement.speed = (self.base_speed - VULNERABLE_SPEED_DECREMENT).max(MIN_VULNERABLE_SPEED);
        self.invalidate_path();
        self.transition(GhostState::Vulnerable);
        debug!(ghost = self.personality.as_ref(), duration_ms = duration, "Ghost vulnerable");
    }

    /// Sends the ghost back to spawn, where it sits still for five seconds.
    pub fn set_eaten_with_delay(&mut self) {
        self.movement.position = self.spawn_position;
        self.movement.halt();
        self.movement.speed = DEFAULT_GHOST_SPEED;
        self.mode = GhostMode::Patrol;
        self.mode_timer_ms = 0.0;
        self.vulnerable_timer_ms = 0.0;
        self.spawn_delay_ms = EATEN_DELAY_MS;
        self.invalidate_path();
        self.transition(GhostState::EatenDelay);
    }

    /// Returns the ghost to its spawn with every timer and route cleared.
    pub fn reset_position(&mut self) {
        self.movement.position = self.spawn_position;
        self.movement.halt();
        self.movement.speed = DEFAULT_GHOST_SPEED;
        self.state = GhostState::Normal;
        self.mode = GhostMode::Patrol;
        self.mode_timer_ms = 0.0;
        self.vulnerable_timer_ms = 0.0;
        self.spawn_delay_ms = 0.0;
        self.patrol_index = 0;
        self.patrol_waypoint = None;
        self.current_target = None;
        self.invalidate_path();
        debug!(ghost = self.personality.as_ref(), "Ghost reset to spawn");
    }

    /// Sets the difficulty rating, clamped to [0, 200]. Speed is unaffected.
    pub fn set_difficulty(&mut self, rating: u8) {
        self.difficulty = DifficultyProfile::from_rating(rating.min(MAX_DIFFICULTY));
    }

    /// Forces a mode and restarts its timer.
    pub fn set_mode(&mut self, mode: GhostMode) {
        if mode != self.mode {
            debug!(ghost = self.personality.as_ref(), from = self.mode.as_ref(), to = mode.as_ref(), "Ghost mode changed");
        }
        self.mode = mode;
        self.mode_timer_ms = 0.0;
        self.invalidate_path();
    }

    pub fn set_steering(&mut self, steering: Steering) {
        self.steering = steering;
    }

    pub fn get_astar_status(&self) -> AStarStatus {
        AStarStatus {
            personality: self.personality,
            state: self.state,
            mode: self.mode,
            steering: self.steering,
            path_length: self.path.len(),
            path_index: self.path_index,
            recompute_interval_ms: self.astar_interval_ms(),
            recompute_timer_ms: self.recompute_timer_ms,
            replans: self.replans,
            difficulty_multiplier: self.difficulty.multiplier,
            astar_chance: self.last_astar_chance,
            current_target: self.current_target,
        }
    }

    pub fn get_patrol_status(&self) -> PatrolStatus {
        PatrolStatus {
            personality: self.personality,
            mode: self.mode,
            patrol_index: self.patrol_index,
            route_length: PATROL_ROUTE_LEN,
            current_waypoint: self.patrol_waypoint,
            tolerance: self.personality.profile().patrol_tolerance,
            mode_timer_ms: self.mode_timer_ms,
            mode_duration_ms: self.mode_duration_ms(),
        }
    }

    fn transition(&mut self, next: GhostState) {
        if next != self.state {
            debug!(ghost = self.personality.as_ref(), from = self.state.as_ref(), to = next.as_ref(), "Ghost state changed");
        }
        self.state = next;
    }

    fn invalidate_path(&mut self) {
        self.path.clear();
        self.path_index = 0;
        self.path_target = None;
    }

    fn patrol_waypoint_on<O: GridOracle + ?Sized>(&self, map: &O) -> Position {
        resolve_map_point(map, self.personality.profile().patrol_route[self.patrol_index])
    }

    /// Moves to the next patrol waypoint once the current one is within
    /// tolerance, and returns the waypoint to steer toward.
    fn advance_patrol<O: GridOracle + ?Sized>(&mut self, map: &O) -> Position {
        let mut waypoint = self.patrol_waypoint_on(map);
        if self.mode == GhostMode::Patrol {
            let tolerance = self.personality.profile().patrol_tolerance * map.cell_size() / REFERENCE_CELL_SIZE;
            if self.movement.position.distance(waypoint) < tolerance {
                self.patrol_index = (self.patrol_index + 1) % PATROL_ROUTE_LEN;
                self.invalidate_path();
                waypoint = self.patrol_waypoint_on(map);
                trace!(ghost = self.personality.as_ref(), index = self.patrol_index, "Next patrol waypoint");
            }
        }
        self.patrol_waypoint = Some(waypoint);
        waypoint
    }

    fn should_use_astar(&mut self, target: Position, cell_size: f32) -> bool {
        let distance = self.movement.position.distance(target);
        self.last_astar_chance = astar_chance(self.personality, self.difficulty.multiplier, distance, cell_size);
        self.rng.random::<f32>() < self.last_astar_chance
    }

    fn choose_direction<O: GridOracle + ?Sized>(&mut self, map: &O, target: Position, step: f32) -> Option<Direction> {
        let fleeing = self.state == GhostState::Vulnerable;
        if !fleeing {
            let use_astar = match self.steering {
                Steering::HeuristicOnly => false,
                Steering::PathOnly => true,
                Steering::Adaptive => self.should_use_astar(target, map.cell_size()),
            };
            if use_astar {
                if let Some(direction) = self.astar_pathfinding(map, target, step) {
                    return Some(direction);
                }
            }
        }
        choose_direction_advanced(&self.movement, map, target, step, self.personality, fleeing, &mut self.rng)
    }

    /// Follows the cached path, replanning first when it is stale. Returns
    /// `None` when there is no path or no way to move along it.
    fn astar_pathfinding<O: GridOracle + ?Sized>(&mut self, map: &O, target: Position, step: f32) -> Option<Direction> {
        let target_moved = self
            .path_target
            .is_none_or(|planned| planned.distance(target) > map.cell_size());
        let stale = self.path.is_empty()
            || self.path_index >= self.path.len()
            || self.recompute_timer_ms >= self.astar_interval_ms()
            || target_moved;
        if stale {
            self.replan(map, target);
        }

        let body_size = self.movement.body_size(map);
        while let Some(&waypoint) = self.path.get(self.path_index) {
            if !waypoint_reached(self.movement.position, waypoint, step) {
                break;
            }
            if map.is_valid_position(waypoint, body_size, EntityKind::GHOST) {
                self.movement.position = waypoint;
            }
            self.path_index += 1;
        }

        let waypoint = *self.path.get(self.path_index)?;
        let direction = axis_priority_direction(&self.movement, map, waypoint, step);
        if direction.is_none() {
            trace!(ghost = self.personality.as_ref(), ?waypoint, "Path blocked, dropping it");
            self.invalidate_path();
        }
        direction
    }

    fn replan<O: GridOracle + ?Sized>(&mut self, map: &O, target: Position) {
        self.path = find_path(self.movement.position, target, map, Heuristic::Manhattan);
        self.path_index = 0;
        self.path_target = Some(target);
        self.recompute_timer_ms = 0.0;
        self.replans += 1;
        trace!(
            ghost = self.personality.as_ref(),
            waypoints = self.path.len(),
            replans = self.replans,
            "Replanned path"
        );
    }

    /// Commits and executes `direction`. A blocked move is re-decided by the
    /// heuristic within the same tick.
    fn apply_movement<O: GridOracle + ?Sized>(
        &mut self,
        map: &O,
        target: Position,
        step: f32,
        direction: Option<Direction>,
    ) {
        self.movement.request_direction(direction.unwrap_or_default());
        if self.movement.commit_direction(map, step) && self.movement.advance(map, step) {
            return;
        }

        trace!(ghost = self.personality.as_ref(), ?direction, "Move blocked, recomputing");
        self.invalidate_path();
        let fleeing = self.state == GhostState::Vulnerable;
        let fallback = choose_direction_advanced(&self.movement, map, target, step, self.personality, fleeing, &mut self.rng);
        self.movement.request_direction(fallback.unwrap_or_default());
        if !(self.movement.commit_direction(map, step) && self.movement.advance(map, step)) {
            warn!(ghost = self.personality.as_ref(), position = ?self.movement.position, "Ghost has no valid move");
            self.movement.halt();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn room() -> Map {
        Map::from_ascii(&["#######", "#     #", "#     #", "#     #", "#######"], 32.0).unwrap()
    }

    fn ghost() -> Ghost {
        let mut ghost = Ghost::new(GhostPersonality::Red, Vec2::new(48.0, 48.0));
        ghost.seed_rng(11);
        ghost
    }

    #[test]
    fn test_vulnerable_slows_and_recovers() {
        let mut ghost = ghost().with_speed(3.0);
        ghost.set_vulnerable(8000);
        assert_eq!(ghost.state(), GhostState::Vulnerable);
        assert_eq!(ghost.speed(), 2.0);

        ghost.update::<Map>(10.0, None, None, None, &[]);
        assert_eq!(ghost.state(), GhostState::Normal);
        assert_eq!(ghost.speed(), DEFAULT_GHOST_SPEED);
    }

    #[test]
    fn test_vulnerable_speed_floor() {
        let mut ghost = ghost();
        ghost.set_vulnerable(8000);
        assert_eq!(ghost.speed(), MIN_VULNERABLE_SPEED);
    }

    #[test]
    fn test_power_pellet_ignored_while_eaten() {
        let mut ghost = ghost();
        ghost.set_eaten_with_delay();
        ghost.set_vulnerable(8000);
        assert!(ghost.is_in_spawn_delay());
    }

    #[test]
    fn test_eaten_teleports_and_waits() {
        let map = room();
        let mut ghost = ghost();
        ghost.movement.position = Vec2::new(144.0, 80.0);
        ghost.set_mode(GhostMode::Chase);
        ghost.set_eaten_with_delay();
        assert_eq!(ghost.position(), ghost.spawn_position());
        assert_eq!(ghost.mode(), GhostMode::Patrol);

        for _ in 0..60 {
            ghost.update(0.05, Some(Vec2::new(176.0, 112.0)), Some(Direction::Left), Some(&map), &[]);
            assert_eq!(ghost.position(), ghost.spawn_position());
        }
        assert!(ghost.is_in_spawn_delay());
    }

    #[test]
    fn test_mode_flips_after_patrol_duration() {
        let map = room();
        let mut ghost = ghost().with_difficulty(200).with_steering(Steering::HeuristicOnly);
        let patrol_ms = ghost.difficulty().patrol_ms;
        let ticks = (patrol_ms / 100.0).ceil() as usize;
        for _ in 0..ticks {
            ghost.update(0.1, Some(Vec2::new(176.0, 112.0)), None, Some(&map), &[]);
        }
        assert_eq!(ghost.mode(), GhostMode::Chase);
        assert!(ghost.get_patrol_status().mode_timer_ms < 1.0);
    }

    #[test]
    fn test_mode_timer_paused_without_player() {
        let mut ghost = ghost();
        ghost.update::<Map>(60.0, None, None, None, &[]);
        assert_eq!(ghost.mode(), GhostMode::Patrol);
        assert_eq!(ghost.get_patrol_status().mode_timer_ms, 0.0);
        assert!(ghost.animation_time() > 59.0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let map = room();
        let mut ghost = ghost().with_steering(Steering::PathOnly);
        ghost.set_mode(GhostMode::Chase);
        for _ in 0..10 {
            ghost.update(1.0 / 60.0, Some(Vec2::new(176.0, 112.0)), None, Some(&map), &[]);
        }
        assert!(ghost.get_astar_status().replans > 0);
        ghost.set_vulnerable(8000);
        ghost.reset_position();

        assert_eq!(ghost.position(), ghost.spawn_position());
        assert_eq!(ghost.state(), GhostState::Normal);
        assert_eq!(ghost.mode(), GhostMode::Patrol);
        assert_eq!(ghost.speed(), DEFAULT_GHOST_SPEED);
        assert_eq!(ghost.vulnerable_remaining_ms(), 0.0);
        assert_eq!(ghost.get_patrol_status().patrol_index, 0);
        assert_eq!(ghost.get_astar_status().path_length, 0);
    }

    #[test]
    fn test_blocked_move_is_redecided_in_the_same_tick() {
        let map = room();
        let mut ghost = ghost().with_steering(Steering::PathOnly);
        ghost.set_mode(GhostMode::Chase);
        // Close enough to the top wall that one more step up collides.
        let start = Vec2::new(48.0, 43.5);
        ghost.movement.position = start;
        ghost.path = vec![Vec2::new(48.0, 80.0)];
        ghost.path_target = Some(Vec2::new(176.0, 112.0));

        ghost.apply_movement(&map, Vec2::new(176.0, 112.0), 1.5, Some(Direction::Up));

        assert_ne!(ghost.position(), start);
        assert_ne!(ghost.direction(), Direction::Up);
        assert_eq!(ghost.get_astar_status().path_length, 0);
        assert!(map.is_valid_position(ghost.position(), ghost.movement.body_size(&map), EntityKind::GHOST));
    }

    #[test]
    fn test_blocked_path_falls_back_to_heuristic() {
        let map = room();
        let player = Vec2::new(176.0, 112.0);
        let mut ghost = ghost().with_steering(Steering::PathOnly);
        ghost.set_mode(GhostMode::Chase);
        let start = Vec2::new(48.0, 43.5);
        ghost.movement.position = start;
        // A cached waypoint straight up, into the wall row.
        ghost.path = vec![Vec2::new(48.0, 16.0)];
        ghost.path_target = Some(player);

        ghost.update(1.0 / 60.0, Some(player), None, Some(&map), &[]);

        let status = ghost.get_astar_status();
        assert_ne!(ghost.position(), start);
        assert_eq!(status.path_length, 0);
        assert_eq!(status.replans, 0);
        assert!(map.is_valid_position(ghost.position(), ghost.movement.body_size(&map), EntityKind::GHOST));
    }

    #[test]
    fn test_cadence_differs_per_personality() {
        let red = Ghost::new(GhostPersonality::Red, Vec2::ZERO);
        let orange = Ghost::new(GhostPersonality::Orange, Vec2::ZERO);
        assert!(red.astar_interval_ms() < orange.astar_interval_ms());

        let hard = Ghost::new(GhostPersonality::Red, Vec2::ZERO).with_difficulty(200);
        assert!(hard.astar_interval_ms() >= MIN_GHOST_ASTAR_INTERVAL_MS);
    }

    #[test]
    fn test_patrol_waypoint_advances_within_tolerance() {
        let map = room();
        let mut ghost = ghost().with_steering(Steering::HeuristicOnly);
        // First red waypoint resolves to the top-right open tile.
        let first = resolve_map_point(&map, GhostPersonality::Red.profile().patrol_route[0]);
        ghost.movement.position = first;
        ghost.update(1.0 / 60.0, Some(Vec2::new(48.0, 112.0)), None, Some(&map), &[]);
        assert_eq!(ghost.get_patrol_status().patrol_index, 1);
    }
}
