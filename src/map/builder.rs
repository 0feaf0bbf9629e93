//! Map construction and validation.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use glam::IVec2;
use strum::{EnumCount, IntoEnumIterator};
use tracing::{debug, warn};

use crate::constants::{MapTile, DEFAULT_CELL_SIZE, DEFAULT_DIFFICULTY, MAX_DIFFICULTY};
use crate::error::{GameResult, MapError};
use crate::map::oracle::{EntityKind, GridOracle};
use crate::map::parser::{MapDocument, MapTileParser, SpawnPoint};
use crate::map::position::{Position, PositionExt};

/// Descriptive data about a map. Only `difficulty` affects gameplay.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMetadata {
    pub name: String,
    pub author: String,
    pub description: String,
    pub version: String,
    /// Difficulty rating in [0, 200]. Read-only once the map is built.
    pub difficulty: u8,
}

impl Default for MapMetadata {
    fn default() -> Self {
        Self {
            name: "Untitled".to_string(),
            author: "Unknown".to_string(),
            description: String::new(),
            version: "1.0".to_string(),
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

/// A validated tile grid with a cell size, spawn points and metadata.
///
/// Every row has the same length and every spawn lies inside the grid. After
/// construction the only mutation is pellet removal.
#[derive(Debug, Clone)]
pub struct Map {
    /// Row-major tiles: `tiles[y][x]`.
    tiles: Vec<Vec<MapTile>>,
    width: usize,
    height: usize,
    cell_size: f32,
    spawns: [Option<IVec2>; SpawnPoint::COUNT],
    pub metadata: MapMetadata,
}

impl Map {
    /// Creates a map from row-major tiles.
    ///
    /// # Errors
    ///
    /// Fails on an empty layout, ragged rows, or a non-positive cell size.
    pub fn new(tiles: Vec<Vec<MapTile>>, cell_size: f32) -> Result<Map, MapError> {
        let height = tiles.len();
        let width = tiles.first().map(Vec::len).ok_or(MapError::EmptyLayout)?;
        if width == 0 {
            return Err(MapError::EmptyLayout);
        }
        for (row, cells) in tiles.iter().enumerate() {
            if cells.len() != width {
                return Err(MapError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }
        if !(cell_size > 0.0 && cell_size.is_finite()) {
            return Err(MapError::InvalidCellSize(cell_size));
        }

        Ok(Map {
            tiles,
            width,
            height,
            cell_size,
            spawns: [None; SpawnPoint::COUNT],
            metadata: MapMetadata::default(),
        })
    }

    /// Parses an ASCII board into a map.
    pub fn from_ascii<S: AsRef<str>>(raw_board: &[S], cell_size: f32) -> GameResult<Map> {
        let parsed = MapTileParser::parse_board(raw_board)?;
        let mut map = Map::new(parsed.tiles, cell_size)?;
        for (spawn, tile) in parsed.spawns {
            map.set_spawn(spawn, tile)?;
        }
        Ok(map)
    }

    /// Decodes a JSON map document into a map.
    ///
    /// All five spawn positions are required, the metadata dimensions (if given)
    /// must match the layout, and the difficulty must lie in [0, 200].
    pub fn from_json_str(source: &str) -> GameResult<Map> {
        let document = MapDocument::from_json(source)?;
        let tiles = document.tiles()?;
        let metadata = document.metadata.clone().unwrap_or_default();
        let mut map = Map::new(tiles, metadata.cell_size.unwrap_or(DEFAULT_CELL_SIZE))?;

        if let Some(declared) = metadata.width {
            if declared != map.width {
                return Err(MapError::DimensionMismatch {
                    field: "width",
                    declared,
                    actual: map.width,
                }
                .into());
            }
        }
        if let Some(declared) = metadata.height {
            if declared != map.height {
                return Err(MapError::DimensionMismatch {
                    field: "height",
                    declared,
                    actual: map.height,
                }
                .into());
            }
        }

        let difficulty = metadata.difficulty.unwrap_or(DEFAULT_DIFFICULTY as i64);
        if !(0..=MAX_DIFFICULTY as i64).contains(&difficulty) {
            return Err(MapError::InvalidDifficulty(difficulty).into());
        }

        for (key, coord) in &document.spawn_positions {
            let Ok(spawn) = SpawnPoint::from_str(key) else {
                warn!(key = %key, "Ignoring unknown spawn position");
                continue;
            };
            let in_bounds = (0..map.width as i64).contains(&coord.x) && (0..map.height as i64).contains(&coord.y);
            if !in_bounds {
                return Err(MapError::SpawnOutOfBounds {
                    name: spawn.name(),
                    x: coord.x,
                    y: coord.y,
                    width: map.width,
                    height: map.height,
                }
                .into());
            }
            map.set_spawn(spawn, IVec2::new(coord.x as i32, coord.y as i32))?;
        }
        if let Some(missing) = SpawnPoint::iter().find(|spawn| map.spawn_tile(*spawn).is_none()) {
            return Err(MapError::MissingSpawn(missing.name()).into());
        }

        let defaults = MapMetadata::default();
        map.metadata = MapMetadata {
            name: metadata.name.unwrap_or(defaults.name),
            author: metadata.author.unwrap_or(defaults.author),
            description: metadata.description.unwrap_or(defaults.description),
            version: metadata.version.unwrap_or(defaults.version),
            difficulty: difficulty as u8,
        };

        debug!(
            name = %map.metadata.name,
            width = map.width,
            height = map.height,
            difficulty = map.metadata.difficulty,
            pellets = map.count_pellets(),
            "Loaded JSON map"
        );
        Ok(map)
    }

    /// Loads a map from disk. `.json` files are decoded as map documents,
    /// anything else is read as an ASCII board with the default cell size.
    pub fn load(path: impl AsRef<Path>) -> GameResult<Map> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
            Map::from_json_str(&source)
        } else {
            let lines: Vec<&str> = source.lines().filter(|line| !line.is_empty()).collect();
            Map::from_ascii(&lines, DEFAULT_CELL_SIZE)
        }
    }

    /// Sets the difficulty rating, clamped to [0, 200].
    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.metadata.difficulty = difficulty.min(MAX_DIFFICULTY);
        self
    }

    /// Places a spawn point.
    ///
    /// # Errors
    ///
    /// Fails if the tile lies outside the grid.
    pub fn set_spawn(&mut self, spawn: SpawnPoint, tile: IVec2) -> Result<(), MapError> {
        if !self.in_bounds(tile) {
            return Err(MapError::SpawnOutOfBounds {
                name: spawn.name(),
                x: tile.x as i64,
                y: tile.y as i64,
                width: self.width,
                height: self.height,
            });
        }
        self.spawns[spawn.as_usize()] = Some(tile);
        Ok(())
    }

    /// Tile coordinate of a spawn point, if the map defines it.
    pub fn spawn_tile(&self, spawn: SpawnPoint) -> Option<IVec2> {
        self.spawns[spawn.as_usize()]
    }

    /// World-space center of a spawn point's tile.
    pub fn spawn_position(&self, spawn: SpawnPoint) -> Option<Position> {
        self.spawn_tile(spawn).map(|tile| self.tile_to_world(tile))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn difficulty(&self) -> u8 {
        self.metadata.difficulty
    }

    /// The tile at a grid coordinate, or `None` when out of bounds.
    pub fn tile(&self, tile: IVec2) -> Option<MapTile> {
        if !self.in_bounds(tile) {
            return None;
        }
        Some(self.tiles[tile.y as usize][tile.x as usize])
    }

    /// Removes the pellet under a world point, returning what was eaten.
    pub fn remove_pellet_at(&mut self, point: Position) -> Option<MapTile> {
        let tile = point.to_tile(self.cell_size);
        match self.tile(tile) {
            Some(eaten) if eaten.is_edible() => {
                self.tiles[tile.y as usize][tile.x as usize] = MapTile::Empty;
                Some(eaten)
            }
            _ => None,
        }
    }

    /// Number of pellets and power pellets left on the board.
    pub fn count_pellets(&self) -> usize {
        self.tiles.iter().flatten().filter(|tile| tile.is_edible()).count()
    }
}

impl GridOracle for Map {
    fn cell_size(&self) -> f32 {
        self.cell_size
    }

    fn dimensions(&self) -> IVec2 {
        IVec2::new(self.width as i32, self.height as i32)
    }

    fn is_wall_tile(&self, tile: IVec2) -> bool {
        !matches!(
            self.tile(tile),
            Some(MapTile::Empty | MapTile::Pellet | MapTile::PowerPellet | MapTile::GhostDoor)
        )
    }

    fn is_blocked_tile(&self, tile: IVec2, kind: EntityKind) -> bool {
        match self.tile(tile) {
            None | Some(MapTile::Wall) => true,
            Some(MapTile::GhostDoor) => !kind.contains(EntityKind::GHOST),
            Some(_) => false,
        }
    }
}
