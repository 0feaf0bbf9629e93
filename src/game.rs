//! The orchestration loop: feeds player state into each ghost, resolves
//! collisions, and keeps score.

use smallvec::SmallVec;
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::constants::{
    MapTile, BASE_VULNERABLE_MS, COLLISION_MARGIN, DEFAULT_PLAYER_SPEED, GHOST_BODY_RATIO, GHOST_SCORE, PELLET_SCORE,
    PLAYER_BODY_RATIO, POWER_PELLET_SCORE, STARTING_LIVES,
};
use crate::entity::MovableEntity;
use crate::error::MapError;
use crate::ghost::{Ghost, GhostPersonality, GhostSnapshot, GhostState};
use crate::map::builder::Map;
use crate::map::direction::Direction;
use crate::map::oracle::{EntityKind, GridOracle};
use crate::map::parser::SpawnPoint;
use crate::map::position::Position;

/// Something that happened during a tick, for the caller to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PelletEaten { points: u32 },
    PowerPelletEaten { points: u32 },
    GhostEaten { ghost: GhostPersonality, points: u32 },
    PlayerDied { lives_left: u8 },
    GameOver { score: u32 },
    LevelCleared { level: u32 },
}

/// One game in progress: the map, the player, four ghosts, and bookkeeping.
#[derive(Debug, Clone)]
pub struct Game {
    map: Map,
    /// The map as loaded, restored when a level is cleared.
    initial_map: Map,
    player: MovableEntity,
    player_spawn: Position,
    ghosts: Vec<Ghost>,
    pellets_remaining: usize,
    score: u32,
    lives: u8,
    level: u32,
    game_over: bool,
}

impl Game {
    /// Starts a game on `map`, placing the player and all four ghosts at their
    /// spawn points.
    ///
    /// # Errors
    ///
    /// Fails if the map lacks any of the five spawn points.
    pub fn new(map: Map) -> Result<Game, MapError> {
        let player_spawn = map
            .spawn_position(SpawnPoint::Player)
            .ok_or(MapError::MissingSpawn(SpawnPoint::Player.name()))?;
        let ghosts = GhostPersonality::iter()
            .map(|personality| Ghost::from_map(personality, &map))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Game {
            pellets_remaining: map.count_pellets(),
            initial_map: map.clone(),
            map,
            player: MovableEntity::new(player_spawn, DEFAULT_PLAYER_SPEED, PLAYER_BODY_RATIO, EntityKind::PLAYER),
            player_spawn,
            ghosts,
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            game_over: false,
        })
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn player(&self) -> &MovableEntity {
        &self.player
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    pub fn ghosts_mut(&mut self) -> &mut [Ghost] {
        &mut self.ghosts
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn pellets_remaining(&self) -> usize {
        self.pellets_remaining
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Buffers a direction for the player; it takes effect once there is room.
    pub fn steer_player(&mut self, direction: Direction) {
        self.player.request_direction(direction);
    }

    /// Seeds every ghost's generator from `seed`.
    pub fn seed_ghosts(&mut self, seed: u64) {
        for (offset, ghost) in self.ghosts.iter_mut().enumerate() {
            ghost.seed_rng(seed.wrapping_add(offset as u64));
        }
    }

    /// Distance at which a ghost and the player touch.
    pub fn collision_distance(&self) -> f32 {
        self.map.cell_size() * (GHOST_BODY_RATIO + PLAYER_BODY_RATIO) / 2.0 * COLLISION_MARGIN
    }

    /// Advances the whole game by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.game_over {
            return events;
        }

        self.move_player(dt);
        self.eat_pellet(&mut events);
        self.update_ghosts(dt);
        self.resolve_collisions(&mut events);

        if !self.game_over && self.pellets_remaining == 0 {
            self.level += 1;
            info!(level = self.level, score = self.score, "Level cleared");
            events.push(GameEvent::LevelCleared { level: self.level });
            self.map = self.initial_map.clone();
            self.pellets_remaining = self.map.count_pellets();
            self.reset_positions();
        }

        events
    }

    fn move_player(&mut self, dt: f32) {
        let step = self.player.step_distance(dt);
        if self.player.requested_direction() != self.player.current_direction() {
            self.player.commit_direction(&self.map, step);
        }
        self.player.advance(&self.map, step);
    }

    fn eat_pellet(&mut self, events: &mut Vec<GameEvent>) {
        match self.map.remove_pellet_at(self.player.position) {
            Some(MapTile::Pellet) => {
                self.score += PELLET_SCORE;
                self.pellets_remaining = self.pellets_remaining.saturating_sub(1);
                events.push(GameEvent::PelletEaten { points: PELLET_SCORE });
            }
            Some(MapTile::PowerPellet) => {
                self.score += POWER_PELLET_SCORE;
                self.pellets_remaining = self.pellets_remaining.saturating_sub(1);
                for ghost in &mut self.ghosts {
                    ghost.set_vulnerable(BASE_VULNERABLE_MS);
                }
                debug!(score = self.score, "Power pellet eaten");
                events.push(GameEvent::PowerPelletEaten {
                    points: POWER_PELLET_SCORE,
                });
            }
            _ => {}
        }
    }

    /// Updates ghosts in order. Each sees the others as they are at that
    /// moment, so earlier ghosts have already moved this tick.
    fn update_ghosts(&mut self, dt: f32) {
        let player_position = self.player.position;
        let player_direction = self.player.current_direction();
        for index in 0..self.ghosts.len() {
            let siblings: SmallVec<[GhostSnapshot; 4]> = self
                .ghosts
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index)
                .map(|(_, ghost)| ghost.snapshot())
                .collect();
            self.ghosts[index].update(
                dt,
                Some(player_position),
                Some(player_direction),
                Some(&self.map),
                &siblings,
            );
        }
    }

    fn resolve_collisions(&mut self, events: &mut Vec<GameEvent>) {
        let reach = self.collision_distance();
        let player_position = self.player.position;

        let mut caught_by = None;
        for ghost in &mut self.ghosts {
            if ghost.position().distance(player_position) >= reach {
                continue;
            }
            match ghost.state() {
                GhostState::Vulnerable => {
                    ghost.set_eaten_with_delay();
                    self.score += GHOST_SCORE;
                    events.push(GameEvent::GhostEaten {
                        ghost: ghost.personality,
                        points: GHOST_SCORE,
                    });
                }
                GhostState::Normal => {
                    caught_by = Some(ghost.personality);
                    break;
                }
                GhostState::EatenDelay => {}
            }
        }

        let Some(personality) = caught_by else {
            return;
        };
        self.lives = self.lives.saturating_sub(1);
        info!(ghost = personality.as_ref(), lives = self.lives, "Player caught");
        events.push(GameEvent::PlayerDied { lives_left: self.lives });
        if self.lives == 0 {
            self.game_over = true;
            info!(score = self.score, "Game over");
            events.push(GameEvent::GameOver { score: self.score });
        } else {
            self.reset_positions();
        }
    }

    fn reset_positions(&mut self) {
        self.player.position = self.player_spawn;
        self.player.halt();
        for ghost in &mut self.ghosts {
            ghost.reset_position();
        }
    }
}
