//! Error types for engine construction, board parsing and catalog registration.
//!
//! Gameplay outcomes (a click on an empty cell, an island that is too small, a locked
//! board) are not errors; see [`crate::engine::Rejection`].

use thiserror::Error;

use crate::types::{TypeIndex, MAX_CELLS, MIN_ISLAND_SIZE};

/// Invalid board or engine parameters. No engine is produced when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width must be at least 1")]
    ZeroWidth,
    #[error("board height must be at least 1")]
    ZeroHeight,
    #[error("color count must be at least 1")]
    ZeroColors,
    #[error("board has {cells} cells, fewer than the {min} needed for a legal move", min = MIN_ISLAND_SIZE)]
    TooFewCells { cells: usize },
    #[error("board has {cells} cells, more than the supported maximum of {max}", max = MAX_CELLS)]
    TooManyCells { cells: usize },
    #[error("{colors} colors requested but the tile catalog describes only {registered}")]
    UncoveredColors { colors: u16, registered: usize },
    #[error("board holds tile type {type_index}, outside the {color_count} configured colors")]
    TypeOutOfRange { type_index: TypeIndex, color_count: u16 },
}

/// Failure to build a [`crate::Grid`] from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridTextError {
    #[error("board text has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unrecognised cell {ch:?} at row {row}, column {col}")]
    BadChar { ch: char, row: usize, col: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("tile type catalog is full ({0} entries)")]
    Full(usize),
}
