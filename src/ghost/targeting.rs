//! Target selection. Everything here is a pure function of its inputs.

use glam::{IVec2, Vec2};

use crate::constants::REFERENCE_CELL_SIZE;
use crate::ghost::personality::{
    GhostPersonality, CYAN_LOOKAHEAD_TILES, ORANGE_FLEE_CORNER, ORANGE_FLEE_DISTANCE, PINK_LOOKAHEAD_TILES,
};
use crate::ghost::state::{GhostMode, GhostState};
use crate::map::direction::Direction;
use crate::map::oracle::{EntityKind, GridOracle};
use crate::map::position::Position;

/// What one ghost needs to know about another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostSnapshot {
    pub personality: GhostPersonality,
    pub position: Position,
    pub state: GhostState,
}

/// Resolves a point given as a fraction of the map extent to the center of the
/// nearest tile a ghost can stand on.
///
/// Falls back to the raw point when the map has no open tiles at all.
pub fn resolve_map_point<O: GridOracle + ?Sized>(oracle: &O, fraction: Vec2) -> Position {
    let max_tile = (oracle.dimensions() - IVec2::ONE).max(IVec2::ZERO).as_vec2();
    let tile = (fraction.clamp(Vec2::ZERO, Vec2::ONE) * max_tile).round().as_ivec2();
    match oracle.nearest_open_tile(tile, EntityKind::GHOST) {
        Some(open) => oracle.tile_to_world(open),
        None => oracle.tile_to_world(tile),
    }
}

/// Chase target for a personality.
///
/// `ghost_position` is the chasing ghost's own position; `siblings` may include
/// or omit the ghost itself.
pub fn chase_target<O: GridOracle + ?Sized>(
    personality: GhostPersonality,
    ghost_position: Position,
    player_position: Position,
    player_direction: Direction,
    siblings: &[GhostSnapshot],
    oracle: &O,
) -> Position {
    let cell_size = oracle.cell_size();
    let ahead = |tiles: f32| player_position + player_direction.as_vec2() * tiles * cell_size;

    match personality {
        GhostPersonality::Red => player_position,
        GhostPersonality::Pink => ahead(PINK_LOOKAHEAD_TILES),
        GhostPersonality::Cyan => {
            match siblings.iter().find(|ghost| ghost.personality == GhostPersonality::Red) {
                Some(red) => (ahead(CYAN_LOOKAHEAD_TILES) + red.position) / 2.0,
                None => player_position,
            }
        }
        GhostPersonality::Orange => {
            let flee_distance = ORANGE_FLEE_DISTANCE * cell_size / REFERENCE_CELL_SIZE;
            if ghost_position.distance(player_position) > flee_distance {
                player_position
            } else {
                resolve_map_point(oracle, ORANGE_FLEE_CORNER)
            }
        }
    }
}

/// The target for the given mode: the current patrol waypoint while patrolling,
/// the personality's chase target otherwise.
#[allow(clippy::too_many_arguments)]
pub fn target_position<O: GridOracle + ?Sized>(
    mode: GhostMode,
    personality: GhostPersonality,
    ghost_position: Position,
    patrol_waypoint: Position,
    player_position: Position,
    player_direction: Direction,
    siblings: &[GhostSnapshot],
    oracle: &O,
) -> Position {
    match mode {
        GhostMode::Patrol => patrol_waypoint,
        GhostMode::Chase => chase_target(
            personality,
            ghost_position,
            player_position,
            player_direction,
            siblings,
            oracle,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::builder::Map;

    fn open_room() -> Map {
        let rows = vec![" ".repeat(10); 10];
        Map::from_ascii(&rows, 32.0).unwrap()
    }

    #[test]
    fn test_pink_aims_ahead() {
        let map = open_room();
        let player = Vec2::new(48.0, 48.0);
        let target = chase_target(GhostPersonality::Pink, Vec2::ZERO, player, Direction::Right, &[], &map);
        assert_eq!(target, Vec2::new(48.0 + 128.0, 48.0));

        let idle = chase_target(GhostPersonality::Pink, Vec2::ZERO, player, Direction::Idle, &[], &map);
        assert_eq!(idle, player);
    }

    #[test]
    fn test_cyan_pivots_on_red() {
        let map = open_room();
        let player = Vec2::new(100.0, 100.0);
        let red = GhostSnapshot {
            personality: GhostPersonality::Red,
            position: Vec2::new(20.0, 36.0),
            state: GhostState::Normal,
        };
        let target = chase_target(GhostPersonality::Cyan, Vec2::ZERO, player, Direction::Down, &[red], &map);
        assert_eq!(target, Vec2::new(60.0, 100.0));

        let alone = chase_target(GhostPersonality::Cyan, Vec2::ZERO, player, Direction::Down, &[], &map);
        assert_eq!(alone, player);
    }

    #[test]
    fn test_orange_flees_when_close() {
        let map = open_room();
        let player = Vec2::new(160.0, 160.0);
        let far = chase_target(GhostPersonality::Orange, Vec2::new(16.0, 16.0), player, Direction::Up, &[], &map);
        assert_eq!(far, player);

        let near = chase_target(GhostPersonality::Orange, Vec2::new(150.0, 160.0), player, Direction::Up, &[], &map);
        assert_eq!(near, Vec2::new(16.0, 9.0 * 32.0 + 16.0));
    }

    #[test]
    fn test_resolve_skips_walls() {
        let map = Map::from_ascii(&["###", "#  ", "###"], 32.0).unwrap();
        assert_eq!(resolve_map_point(&map, Vec2::ZERO), Vec2::new(48.0, 48.0));
        assert_eq!(resolve_map_point(&map, Vec2::new(1.0, 0.5)), Vec2::new(80.0, 48.0));
    }

    #[test]
    fn test_patrol_mode_ignores_player() {
        let map = open_room();
        let waypoint = Vec2::new(300.0, 16.0);
        let target = target_position(
            GhostMode::Patrol,
            GhostPersonality::Red,
            Vec2::ZERO,
            waypoint,
            Vec2::new(48.0, 48.0),
            Direction::Left,
            &[],
            &map,
        );
        assert_eq!(target, waypoint);
    }
}
