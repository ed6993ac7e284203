//! Shared types and constants for the tile-islands engine.
//!
//! Everything in here is plain data with no dependencies, so the same vocabulary can be
//! used by the engine, by renderers and by tooling that records or replays games.
//!
//! # Coordinates
//!
//! Cells are addressed by `(x, y)` with `x` growing to the right and `y` growing
//! **upwards**: row `0` is the bottom of the board and gravity pulls tiles towards it.
//! Storage is row-major, so the flat index of a cell is `x + y * width`.
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_ISLAND_SIZE` | 3 | Smallest island that can be removed |
//! | `FALL_MS_PER_ROW` | 150 | Animation time for a tile falling one row |
//! | `MAX_CELLS` | 1 048 576 | Largest board the engine accepts |
//!
//! # Examples
//!
//! ```
//! use tile_islands_types::{CellPos, Rgb, TileDescription, MIN_ISLAND_SIZE};
//!
//! let pos = CellPos::new(2, 0);
//! assert_eq!(pos.index(5), 2);
//! assert_eq!(CellPos::from_index(7, 5), CellPos::new(2, 1));
//!
//! let red = TileDescription::new(Rgb::new(255, 0, 0));
//! assert_ne!(red, TileDescription::default());
//! assert_eq!(MIN_ISLAND_SIZE, 3);
//! ```

use std::fmt;

/// Smallest island that a removal request is allowed to clear.
pub const MIN_ISLAND_SIZE: usize = 3;

/// Time a renderer spends animating a tile falling one row (milliseconds).
pub const FALL_MS_PER_ROW: u32 = 150;

/// Upper bound on `width * height` accepted at construction.
pub const MAX_CELLS: usize = 1 << 20;

/// Default board width used by the autoplay driver.
pub const DEFAULT_WIDTH: u16 = 10;

/// Default board height used by the autoplay driver.
pub const DEFAULT_HEIGHT: u16 = 12;

/// Default number of tile colors.
pub const DEFAULT_COLOR_COUNT: u16 = 4;

/// Stable identity of a tile type, as handed out by the tile type catalog.
pub type TypeIndex = u16;

/// A board cell: `None` when empty, otherwise the type of the tile resting there.
pub type Cell = Option<TypeIndex>;

/// Logical board coordinate. `y == 0` is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub x: u16,
    pub y: u16,
}

impl CellPos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Flat row-major index of this position on a board `width` cells wide.
    #[inline(always)]
    pub fn index(self, width: u16) -> usize {
        self.x as usize + self.y as usize * width as usize
    }

    /// Inverse of [`CellPos::index`].
    #[inline(always)]
    pub fn from_index(index: usize, width: u16) -> Self {
        let width = width as usize;
        Self {
            x: (index % width) as u16,
            y: (index / width) as u16,
        }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Descriptive attributes of a tile type. Two descriptions are the same type
/// exactly when they compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileDescription {
    pub color: Rgb,
}

impl TileDescription {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_pos_index_roundtrip_on_narrow_board() {
        for index in 0..12 {
            let pos = CellPos::from_index(index, 3);
            assert!(pos.x < 3);
            assert_eq!(pos.index(3), index);
        }
        assert_eq!(CellPos::from_index(5, 3), CellPos::new(2, 1));
    }

    #[test]
    fn test_default_description_is_white() {
        assert_eq!(TileDescription::default().color, Rgb::WHITE);
        assert_eq!(Rgb::default(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_fall_timing_defaults() {
        assert_eq!(MIN_ISLAND_SIZE, 3);
        assert_eq!(FALL_MS_PER_ROW, 150);
        assert!(MAX_CELLS >= DEFAULT_WIDTH as usize * DEFAULT_HEIGHT as usize);
    }
}
