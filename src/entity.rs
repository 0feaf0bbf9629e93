//! Shared movement state for anything that walks the grid.
//!
//! Players and ghosts both embed a [`MovableEntity`]; what differs between them
//! is who writes the requested direction (input vs. navigation), not how the
//! movement itself is resolved against the map.

use tracing::trace;

use crate::constants::FRAMES_PER_SECOND;
use crate::map::direction::Direction;
use crate::map::oracle::{EntityKind, GridOracle};
use crate::map::position::{Position, PositionExt};

/// Position, speed and the requested/committed direction pair.
///
/// Direction changes are two-phase: callers `request_direction`, and the
/// request only becomes the `current_direction` once `commit_direction` finds
/// room to move that way.
#[derive(Debug, Clone, PartialEq)]
pub struct MovableEntity {
    pub position: Position,
    /// World units per 60 Hz frame.
    pub speed: f32,
    /// Body size as a fraction of the map's cell size.
    pub body_ratio: f32,
    pub kind: EntityKind,
    requested_direction: Direction,
    current_direction: Direction,
}

impl MovableEntity {
    pub fn new(position: Position, speed: f32, body_ratio: f32, kind: EntityKind) -> Self {
        Self {
            position,
            speed,
            body_ratio,
            kind,
            requested_direction: Direction::Idle,
            current_direction: Direction::Idle,
        }
    }

    pub fn requested_direction(&self) -> Direction {
        self.requested_direction
    }

    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    /// Records a direction to switch to at the next commit.
    pub fn request_direction(&mut self, direction: Direction) {
        self.requested_direction = direction;
    }

    /// Stops the entity and forgets any pending request.
    pub fn halt(&mut self) {
        self.requested_direction = Direction::Idle;
        self.current_direction = Direction::Idle;
    }

    /// Distance covered in `dt` seconds.
    pub fn step_distance(&self, dt: f32) -> f32 {
        self.speed * dt * FRAMES_PER_SECOND
    }

    /// Body size in world units on the given map.
    pub fn body_size<O: GridOracle + ?Sized>(&self, oracle: &O) -> f32 {
        oracle.cell_size() * self.body_ratio
    }

    /// Where a step of `distance` in `direction` would land.
    pub fn next_position(&self, direction: Direction, distance: f32) -> Position {
        self.position + direction.as_vec2() * distance
    }

    /// Whether a step of `distance` in `direction` keeps the body out of walls.
    pub fn can_move<O: GridOracle + ?Sized>(&self, oracle: &O, direction: Direction, distance: f32) -> bool {
        direction != Direction::Idle
            && oracle.is_valid_position(self.next_position(direction, distance), self.body_size(oracle), self.kind)
    }

    /// Promotes the requested direction to the current one if there is room to
    /// move that way. Returns whether the entity is now heading in the
    /// requested direction.
    ///
    /// Turning onto the other axis recenters the body on its lane when that
    /// position is free, so that grid corridors stay reachable.
    pub fn commit_direction<O: GridOracle + ?Sized>(&mut self, oracle: &O, distance: f32) -> bool {
        let requested = self.requested_direction;
        if requested == Direction::Idle {
            self.current_direction = Direction::Idle;
            return false;
        }
        if requested == self.current_direction {
            return self.can_move(oracle, requested, distance);
        }

        let turning = requested.is_horizontal() != self.current_direction.is_horizontal();
        if turning && self.current_direction != Direction::Idle {
            let center = self.position.snap_to_tile_center(oracle.cell_size());
            let aligned = if requested.is_horizontal() {
                Position::new(self.position.x, center.y)
            } else {
                Position::new(center.x, self.position.y)
            };
            if aligned != self.position && oracle.is_valid_position(aligned, self.body_size(oracle), self.kind) {
                trace!(from = ?self.position, to = ?aligned, "Aligning to lane before turning");
                self.position = aligned;
            }
        }

        if self.can_move(oracle, requested, distance) {
            self.current_direction = requested;
            true
        } else {
            false
        }
    }

    /// Moves `distance` along the current direction. Returns false (without
    /// moving) when the step would collide.
    pub fn advance<O: GridOracle + ?Sized>(&mut self, oracle: &O, distance: f32) -> bool {
        if !self.can_move(oracle, self.current_direction, distance) {
            return false;
        }
        self.position = self.next_position(self.current_direction, distance);
        true
    }
}
