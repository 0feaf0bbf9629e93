//! Centralized error types for the ghost engine.
//!
//! The navigation core never fails; every dead end is handled by policy. The
//! errors here cover map construction and loading, which sit at the boundary
//! between the engine and its on-disk inputs.

use std::io;

/// Main error type for the crate.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error type for map parsing operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Unknown character in board: {0}")]
    UnknownCharacter(char),

    #[error("Unknown cell code {code} at row {row}, column {column}")]
    UnknownCellCode { code: i64, row: usize, column: usize },

    #[error("Duplicate spawn marker '{0}'")]
    DuplicateSpawn(char),

    #[error("Map parsing failed: {0}")]
    ParseFailed(String),
}

/// Errors raised while validating a map's invariants.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MapError {
    #[error("Map layout is empty")]
    EmptyLayout,

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("Cell size must be positive, got {0}")]
    InvalidCellSize(f32),

    #[error("Spawn '{name}' at ({x}, {y}) lies outside the {width}x{height} grid")]
    SpawnOutOfBounds {
        name: &'static str,
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    #[error("Missing spawn position: {0}")]
    MissingSpawn(&'static str),

    #[error("Metadata {field} {declared} does not match layout {actual}")]
    DimensionMismatch {
        field: &'static str,
        declared: usize,
        actual: usize,
    },

    #[error("Difficulty {0} is outside [0, 200]")]
    InvalidDifficulty(i64),
}

/// Result type for map loading operations.
pub type GameResult<T> = Result<T, GameError>;
