use glam::IVec2;
use pacman_ghosts::error::{GameError, MapError, ParseError};
use pacman_ghosts::map::builder::Map;
use pacman_ghosts::map::oracle::GridOracle;
use pacman_ghosts::map::parser::SpawnPoint;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use strum::IntoEnumIterator;

mod common;

const TINY: &str = r#"{
  "metadata": {"name": "Tiny", "width": 3, "height": 3, "difficulty": 120},
  "spawn_positions": {
    "player": {"x": 1, "y": 1},
    "ghost_red": {"x": 0, "y": 0},
    "ghost_pink": {"x": 1, "y": 0},
    "ghost_cyan": {"x": 2, "y": 0},
    "ghost_orange": {"x": 0, "y": 1}
  },
  "layout": [[0, 0, 0], [0, 2, 3], [1, 1, 1]]
}"#;

#[test]
fn test_load_json_map() {
    let map = Map::load(common::map_path("classic.json")).unwrap();

    assert_that(&map.width()).is_equal_to(19);
    assert_that(&map.height()).is_equal_to(13);
    assert_that(&map.difficulty()).is_equal_to(50);
    assert_that(&map.cell_size()).is_equal_to(32.0);
    assert_eq!(map.metadata.name, "Classic Mini");
    assert_eq!(map.spawn_tile(SpawnPoint::Player), Some(IVec2::new(9, 11)));
    assert_eq!(map.spawn_tile(SpawnPoint::GhostRed), Some(IVec2::new(8, 6)));
    assert_that(&map.count_pellets()).is_greater_than(0);
}

#[test]
fn test_ascii_and_json_maps_agree() {
    let json = Map::load(common::map_path("classic.json")).unwrap();
    let ascii = Map::load(common::map_path("classic.txt")).unwrap();

    assert_eq!(ascii.dimensions(), json.dimensions());
    for spawn in SpawnPoint::iter() {
        assert_eq!(ascii.spawn_tile(spawn), json.spawn_tile(spawn), "{spawn:?}");
    }
}

#[test]
fn test_small_document_decodes() {
    let map = Map::from_json_str(TINY).unwrap();
    assert_that(&map.difficulty()).is_equal_to(120);
    assert_that(&map.count_pellets()).is_equal_to(2);
    assert_eq!(map.metadata.author, "Unknown");
    assert!(map.is_wall_tile(IVec2::new(1, 2)));
    assert!(!map.is_wall_tile(IVec2::new(1, 1)));
}

#[test]
fn test_missing_spawn_is_rejected() {
    let source = TINY.replace(r#""ghost_orange": {"x": 0, "y": 1}"#, r#""bonus": {"x": 0, "y": 1}"#);
    let result = Map::from_json_str(&source);
    assert!(matches!(
        result,
        Err(GameError::Map(MapError::MissingSpawn("ghost_orange")))
    ));
}

#[test]
fn test_difficulty_out_of_range_is_rejected() {
    let source = TINY.replace(r#""difficulty": 120"#, r#""difficulty": 250"#);
    assert!(matches!(
        Map::from_json_str(&source),
        Err(GameError::Map(MapError::InvalidDifficulty(250)))
    ));

    let source = TINY.replace(r#""difficulty": 120"#, r#""difficulty": -1"#);
    assert!(matches!(
        Map::from_json_str(&source),
        Err(GameError::Map(MapError::InvalidDifficulty(-1)))
    ));
}

#[test]
fn test_missing_difficulty_uses_default() {
    let source = TINY.replace(r#", "difficulty": 120"#, "");
    let map = Map::from_json_str(&source).unwrap();
    assert_that(&map.difficulty()).is_equal_to(50);
}

#[test]
fn test_dimension_mismatch_is_rejected() {
    let source = TINY.replace(r#""width": 3"#, r#""width": 4"#);
    match Map::from_json_str(&source) {
        Err(GameError::Map(error)) => assert_eq!(
            error,
            MapError::DimensionMismatch {
                field: "width",
                declared: 4,
                actual: 3
            }
        ),
        other => panic!("expected a dimension mismatch, got {other:?}"),
    }
}

#[test]
fn test_unknown_cell_code_is_rejected() {
    let source = TINY.replace("[1, 1, 1]", "[1, 9, 1]");
    match Map::from_json_str(&source) {
        Err(GameError::MapParse(error)) => {
            assert_eq!(error, ParseError::UnknownCellCode { code: 9, row: 2, column: 1 })
        }
        other => panic!("expected an unknown cell code, got {other:?}"),
    }
}

#[test]
fn test_spawn_outside_grid_is_rejected() {
    let source = TINY.replace(r#""player": {"x": 1, "y": 1}"#, r#""player": {"x": 3, "y": 1}"#);
    assert!(matches!(
        Map::from_json_str(&source),
        Err(GameError::Map(MapError::SpawnOutOfBounds { name: "player", x: 3, .. }))
    ));
}

#[test]
fn test_ragged_layout_is_rejected() {
    let source = TINY.replace("[0, 2, 3]", "[0, 2]");
    assert!(matches!(
        Map::from_json_str(&source),
        Err(GameError::Map(MapError::RaggedRow { row: 1, .. }))
    ));
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(matches!(Map::from_json_str("{ layout: "), Err(GameError::Json(_))));
}

#[test]
fn test_missing_file_is_an_io_error() {
    assert!(matches!(
        Map::load(common::map_path("does-not-exist.json")),
        Err(GameError::Io(_))
    ));
}

#[test]
fn test_difficulty_override_is_clamped() {
    let map = Map::from_json_str(TINY).unwrap().with_difficulty(255);
    assert_that(&map.difficulty()).is_equal_to(200);
}
