//! Map parsing functionality for converting raw layouts into structured data.
//!
//! Two inputs are understood: ASCII boards (handy for tests and quick experiments)
//! and the JSON map documents written by the map editor.

use std::collections::BTreeMap;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumCount, EnumIter, EnumString};

use crate::constants::MapTile;
use crate::error::ParseError;

/// Named spawn locations a map provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter, EnumCount)]
#[strum(serialize_all = "snake_case")]
pub enum SpawnPoint {
    Player,
    GhostRed,
    GhostPink,
    GhostCyan,
    GhostOrange,
}

impl SpawnPoint {
    /// Returns the spawn point as a usize. Useful for indexing into arrays.
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    /// The ASCII board marker for this spawn.
    pub const fn marker(self) -> char {
        match self {
            SpawnPoint::Player => '0',
            SpawnPoint::GhostRed => '1',
            SpawnPoint::GhostPink => '2',
            SpawnPoint::GhostCyan => '3',
            SpawnPoint::GhostOrange => '4',
        }
    }

    /// Name used in error messages and JSON keys.
    pub fn name(self) -> &'static str {
        match self {
            SpawnPoint::Player => "player",
            SpawnPoint::GhostRed => "ghost_red",
            SpawnPoint::GhostPink => "ghost_pink",
            SpawnPoint::GhostCyan => "ghost_cyan",
            SpawnPoint::GhostOrange => "ghost_orange",
        }
    }
}

/// Structured representation of a parsed board.
#[derive(Debug)]
pub struct ParsedMap {
    /// Row-major tiles: `tiles[y][x]`.
    pub tiles: Vec<Vec<MapTile>>,
    /// Spawn markers found on the board, as tile coordinates.
    pub spawns: Vec<(SpawnPoint, IVec2)>,
}

/// Parser for converting ASCII boards into structured map data.
pub struct MapTileParser;

impl MapTileParser {
    /// Converts ASCII characters from the board layout into corresponding tile types.
    ///
    /// Walls (`#`), collectible pellets (`.` and `o`), traversable spaces (` `) and
    /// ghost-only doors (`=`). Spawn markers (`0`-`4`) are converted to `Empty`
    /// tiles while their positions are tracked separately.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnknownCharacter` for any other character.
    pub fn parse_character(c: char) -> Result<MapTile, ParseError> {
        match c {
            '#' => Ok(MapTile::Wall),
            '.' => Ok(MapTile::Pellet),
            'o' => Ok(MapTile::PowerPellet),
            ' ' => Ok(MapTile::Empty),
            '=' => Ok(MapTile::GhostDoor),
            '0'..='4' => Ok(MapTile::Empty),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    fn spawn_for(c: char) -> Option<SpawnPoint> {
        match c {
            '0' => Some(SpawnPoint::Player),
            '1' => Some(SpawnPoint::GhostRed),
            '2' => Some(SpawnPoint::GhostPink),
            '3' => Some(SpawnPoint::GhostCyan),
            '4' => Some(SpawnPoint::GhostOrange),
            _ => None,
        }
    }

    /// Parses an ASCII board. Row length consistency is checked by the map builder.
    ///
    /// # Errors
    ///
    /// Returns an error on unknown characters or a spawn marker that appears twice.
    pub fn parse_board<S: AsRef<str>>(raw_board: &[S]) -> Result<ParsedMap, ParseError> {
        let mut tiles = Vec::with_capacity(raw_board.len());
        let mut spawns: Vec<(SpawnPoint, IVec2)> = Vec::new();

        for (y, line) in raw_board.iter().enumerate() {
            let mut row = Vec::with_capacity(line.as_ref().len());
            for (x, character) in line.as_ref().chars().enumerate() {
                row.push(Self::parse_character(character)?);

                if let Some(spawn) = Self::spawn_for(character) {
                    if spawns.iter().any(|(existing, _)| *existing == spawn) {
                        return Err(ParseError::DuplicateSpawn(character));
                    }
                    spawns.push((spawn, IVec2::new(x as i32, y as i32)));
                }
            }
            tiles.push(row);
        }

        Ok(ParsedMap { tiles, spawns })
    }
}

/// A tile coordinate as stored in JSON map documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: i64,
    pub y: i64,
}

/// Descriptive data attached to a JSON map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapMetadataDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cell_size: Option<f32>,
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default)]
    pub height: Option<usize>,
    #[serde(default)]
    pub difficulty: Option<i64>,
}

/// The on-disk JSON map format written by the map editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    #[serde(default)]
    pub metadata: Option<MapMetadataDocument>,
    /// Free-form cell legend; informational only.
    #[serde(default)]
    pub legend: BTreeMap<String, String>,
    #[serde(default)]
    pub spawn_positions: BTreeMap<String, TileCoord>,
    pub layout: Vec<Vec<i64>>,
}

impl MapDocument {
    /// Decodes a JSON document.
    pub fn from_json(source: &str) -> Result<MapDocument, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Converts the numeric layout into tiles.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnknownCellCode` for codes outside 0-3.
    pub fn tiles(&self) -> Result<Vec<Vec<MapTile>>, ParseError> {
        self.layout
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(column, &code)| MapTile::from_code(code).ok_or(ParseError::UnknownCellCode { code, row, column }))
                    .collect()
            })
            .collect()
    }
}
