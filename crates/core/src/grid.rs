//! Grid module - rectangular tile storage
//!
//! The grid is a `width x height` board where each cell is empty or holds a tile type.
//! Cells live in a flat row-major buffer (`x + y * width`) for cache locality; the
//! dimensions are fixed for the lifetime of a grid.
//! Coordinates: `x` grows to the right, `y` grows upwards, so row 0 is the bottom row
//! that falling tiles settle on.

use crate::error::{ConfigError, GridTextError};
use crate::types::{Cell, CellPos, TypeIndex, MAX_CELLS};

/// The board - `width` columns x `height` rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![None; len],
        })
    }

    /// Parse a grid from text, one line per row, **top row first**.
    ///
    /// `.` is an empty cell, `0`-`9` are types 0-9 and `a`-`z` are types 10-35.
    /// Surrounding whitespace and blank lines are ignored.
    ///
    /// ```
    /// use tile_islands_core::Grid;
    ///
    /// let grid = Grid::from_text("1..\n001").unwrap();
    /// assert_eq!(grid.get(0, 0), Some(Some(0)));
    /// assert_eq!(grid.get(0, 1), Some(Some(1)));
    /// assert_eq!(grid.get(1, 1), Some(None));
    /// ```
    pub fn from_text(text: &str) -> Result<Self, GridTextError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(GridTextError::Empty);
        };
        let width = first.chars().count();
        let height = rows.len();
        let width16 = u16::try_from(width).map_err(|_| ConfigError::TooManyCells {
            cells: width.saturating_mul(height),
        })?;
        let height16 = u16::try_from(height).map_err(|_| ConfigError::TooManyCells {
            cells: width.saturating_mul(height),
        })?;

        let mut grid = Self::new(width16, height16)?;
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridTextError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            let y = (height - 1 - row) as u16;
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    '0'..='9' => Some(ch as TypeIndex - '0' as TypeIndex),
                    'a'..='z' => Some(ch as TypeIndex - 'a' as TypeIndex + 10),
                    _ => return Err(GridTextError::BadChar { ch, row, col }),
                };
                grid.set(col as u16, y, cell);
            }
        }
        Ok(grid)
    }

    /// Render the grid in the format accepted by [`Grid::from_text`].
    /// Types above 35 are drawn as `#`.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let ch = match self.cells[self.index_unchecked(x, y)] {
                    None => '.',
                    Some(t @ 0..=9) => (b'0' + t as u8) as char,
                    Some(t @ 10..=35) => (b'a' + (t - 10) as u8) as char,
                    Some(_) => '#',
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    fn checked_len(width: u16, height: u16) -> Result<usize, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        let cells = width as usize * height as usize;
        if cells > MAX_CELLS {
            return Err(ConfigError::TooManyCells { cells });
        }
        Ok(cells)
    }

    #[inline(always)]
    fn index_unchecked(&self, x: u16, y: u16) -> usize {
        x as usize + y as usize * self.width as usize
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    pub fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.index_unchecked(x, y))
    }

    /// Position of a flat index. Panics if the index is outside the grid.
    #[inline]
    pub fn pos(&self, index: usize) -> CellPos {
        assert!(index < self.cells.len(), "cell index {index} out of range");
        CellPos::from_index(index, self.width)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells. Constructors reject zero-sized boards, so this is
    /// always false for a built grid.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Cell at a flat index. Panics if the index is outside the grid.
    #[inline(always)]
    pub fn at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Overwrite the cell at a flat index. Panics if the index is outside the grid.
    #[inline(always)]
    pub fn set_at(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: u16, y: u16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Number of cells holding a tile
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells buffer
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Fill every cell with a type produced by `pick`, bottom row first.
    pub fn fill_with(&mut self, mut pick: impl FnMut() -> TypeIndex) {
        for cell in &mut self.cells {
            *cell = Some(pick());
        }
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}
