use glam::Vec2;
use pacman_ghosts::map::builder::Map;
use pacman_ghosts::map::oracle::{EntityKind, GridOracle};
use pacman_ghosts::pathfinding::{find_path, Heuristic};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

#[test]
fn test_open_room_corner_to_corner() {
    let map = common::open_room(5, 5, 1.0);
    let path = find_path(Vec2::new(0.5, 0.5), Vec2::new(4.5, 4.5), &map, Heuristic::Manhattan);

    assert_that(&path.len()).is_equal_to(8);
    assert_eq!(path.last().copied(), Some(Vec2::new(4.5, 4.5)));
    assert!(common::is_adjacent(&map, Vec2::new(0.5, 0.5), path[0]));
    for pair in path.windows(2) {
        assert!(common::is_adjacent(&map, pair[0], pair[1]));
    }
}

#[test]
fn test_unique_shortest_path_length() {
    let map = common::board(&[
        "#########",
        "#       #",
        "####### #",
        "#       #",
        "#########",
    ]);
    let start = common::center_of(&map, 1, 1);
    let goal = common::center_of(&map, 1, 3);
    let path = find_path(start, goal, &map, Heuristic::Manhattan);

    assert_that(&path.len()).is_equal_to(14);
    assert_eq!(path[5], common::center_of(&map, 7, 1));
    assert_eq!(path[6], common::center_of(&map, 7, 2));
}

#[test]
fn test_enclosed_goal_is_unreachable() {
    let map = common::board(&["     ", " ### ", " # # ", " ### ", "     "]);
    let path = find_path(
        common::center_of(&map, 0, 0),
        common::center_of(&map, 2, 2),
        &map,
        Heuristic::Manhattan,
    );
    assert_that(&path.is_empty()).is_true();
}

#[test]
fn test_out_of_bounds_goal_is_unreachable() {
    let map = common::open_room(4, 4, 32.0);
    let path = find_path(Vec2::new(16.0, 16.0), Vec2::new(-100.0, 16.0), &map, Heuristic::Manhattan);
    assert_that(&path.is_empty()).is_true();
}

#[test]
fn test_paths_are_valid_across_a_maze() {
    let map = Map::load(common::map_path("classic.txt")).unwrap();
    let dimensions = map.dimensions();
    let open: Vec<_> = (0..dimensions.y)
        .flat_map(|y| (0..dimensions.x).map(move |x| glam::IVec2::new(x, y)))
        .filter(|tile| !map.is_blocked_tile(*tile, EntityKind::GHOST))
        .collect();

    let mut found = 0;
    for start in open.iter().step_by(7) {
        for goal in open.iter().step_by(11) {
            let from = map.tile_to_world(*start);
            let to = map.tile_to_world(*goal);
            let path = find_path(from, to, &map, Heuristic::Manhattan);
            if start == goal {
                assert_that(&path.is_empty()).is_true();
                continue;
            }
            if path.is_empty() {
                continue;
            }
            found += 1;

            let manhattan = (*goal - *start).abs();
            assert!(path.len() >= (manhattan.x + manhattan.y) as usize);
            assert_eq!(path.last().copied(), Some(to));
            assert!(common::is_adjacent(&map, from, path[0]));
            for pair in path.windows(2) {
                assert!(common::is_adjacent(&map, pair[0], pair[1]));
            }
            for waypoint in &path {
                assert!(!map.is_wall(*waypoint));
            }
        }
    }
    assert_that(&found).is_greater_than(0);
}

#[test]
fn test_paths_are_deterministic() {
    let map = common::open_room(8, 8, 32.0);
    let start = common::center_of(&map, 0, 7);
    let goal = common::center_of(&map, 7, 0);
    let first = find_path(start, goal, &map, Heuristic::Manhattan);
    let second = find_path(start, goal, &map, Heuristic::Manhattan);
    assert_eq!(first, second);
}

#[test]
fn test_heuristics_agree_on_length() {
    let map = Map::load(common::map_path("classic.txt")).unwrap();
    let start = common::center_of(&map, 1, 1);
    let goal = common::center_of(&map, 17, 11);
    let manhattan = find_path(start, goal, &map, Heuristic::Manhattan);
    let euclidean = find_path(start, goal, &map, Heuristic::Euclidean);
    assert_that(&manhattan.is_empty()).is_false();
    assert_eq!(manhattan.len(), euclidean.len());
}

#[test]
fn test_ghost_doors_are_passable() {
    let map = common::board(&["#####", "# = #", "#####"]);
    let path = find_path(
        common::center_of(&map, 1, 1),
        common::center_of(&map, 3, 1),
        &map,
        Heuristic::Manhattan,
    );
    assert_that(&path.len()).is_equal_to(2);
    assert!(map.is_blocked(path[0], EntityKind::PLAYER));
}
