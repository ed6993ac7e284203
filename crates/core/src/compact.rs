//! Compaction - the gravity pass that closes gaps left by a removal
//!
//! Each column is handled on its own. The gaps of a column (maximal runs of empty
//! cells) are located once, bottom to top, and then every occupied run above a gap
//! is dropped by the total height of all gaps beneath it. Tiles keep their relative
//! order and land contiguously on top of whatever already rests below.

use crate::grid::Grid;
use crate::types::FALL_MS_PER_ROW;

/// A vertical run of empty cells in one column, `bottom..=top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gap {
    pub bottom: u16,
    pub top: u16,
}

impl Gap {
    pub fn height(&self) -> u16 {
        self.top - self.bottom + 1
    }
}

/// One tile moved by a compaction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallDescriptor {
    pub column: u16,
    pub from_row: u16,
    pub to_row: u16,
}

impl FallDescriptor {
    /// Distance fallen in rows.
    pub fn rows(&self) -> u16 {
        self.from_row - self.to_row
    }

    /// How long a renderer should spend animating this fall.
    pub fn duration_ms(&self) -> u32 {
        self.rows() as u32 * FALL_MS_PER_ROW
    }
}

/// Result of a compaction pass: every moved tile plus the longest single fall.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompactionReport {
    /// Moves grouped by column (ascending), bottom-most tile first within a column.
    pub falls: Vec<FallDescriptor>,
    pub longest_fall: u16,
}

impl CompactionReport {
    pub fn is_empty(&self) -> bool {
        self.falls.is_empty()
    }

    /// Time until the last tile has landed, at [`FALL_MS_PER_ROW`] per row.
    pub fn settle_ms(&self) -> u32 {
        self.longest_fall as u32 * FALL_MS_PER_ROW
    }
}

impl Grid {
    /// Gaps in column `x`, bottom-most first.
    pub fn column_gaps(&self, x: u16) -> Vec<Gap> {
        let mut gaps: Vec<Gap> = Vec::new();
        for y in 0..self.height() {
            if self.is_occupied(x, y) {
                continue;
            }
            match gaps.last_mut() {
                Some(gap) if gap.top + 1 == y => gap.top = y,
                _ => gaps.push(Gap { bottom: y, top: y }),
            }
        }
        gaps
    }

    /// Drop every tile in every column onto the tiles below it.
    ///
    /// The grid is fully settled when this returns; the report only describes the
    /// moves for animation.
    pub fn compact(&mut self) -> CompactionReport {
        let mut report = CompactionReport::default();
        for x in 0..self.width() {
            self.compact_column(x, &mut report);
        }
        report
    }

    fn compact_column(&mut self, x: u16, report: &mut CompactionReport) {
        let gaps = self.column_gaps(x);
        let height = self.height();
        if gaps.is_empty() || (gaps.len() == 1 && gaps[0].height() == height) {
            return;
        }

        let width = self.width() as usize;
        let column = x as usize;
        let mut drop = 0u16;
        for (i, gap) in gaps.iter().enumerate() {
            drop += gap.height();
            let run_end = gaps.get(i + 1).map_or(height, |next| next.bottom);

            for from_row in gap.top + 1..run_end {
                let to_row = from_row - drop;
                let from = column + from_row as usize * width;
                let to = column + to_row as usize * width;
                let tile = self.at(from);
                self.set_at(to, tile);
                self.set_at(from, None);

                report.falls.push(FallDescriptor {
                    column: x,
                    from_row,
                    to_row,
                });
                report.longest_fall = report.longest_fall.max(drop);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaps_are_found_bottom_to_top() {
        // Column 0, bottom to top: X . Y . . Z
        let grid = Grid::from_text("2\n.\n.\n1\n.\n0").unwrap();
        assert_eq!(
            grid.column_gaps(0),
            vec![Gap { bottom: 1, top: 1 }, Gap { bottom: 3, top: 4 }]
        );
    }

    #[test]
    fn test_full_and_empty_columns_are_untouched() {
        let mut grid = Grid::from_text("0.\n1.\n2.").unwrap();
        let before = grid.clone();
        let report = grid.compact();
        assert!(report.is_empty());
        assert_eq!(report.settle_ms(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_stacked_gaps_accumulate_drop() {
        let mut grid = Grid::from_text("2\n.\n.\n1\n.\n0").unwrap();
        let report = grid.compact();

        assert_eq!(grid.to_text(), ".\n.\n.\n2\n1\n0\n");
        assert_eq!(
            report.falls,
            vec![
                FallDescriptor {
                    column: 0,
                    from_row: 2,
                    to_row: 1
                },
                FallDescriptor {
                    column: 0,
                    from_row: 5,
                    to_row: 2
                },
            ]
        );
        assert_eq!(report.longest_fall, 3);
        assert_eq!(report.falls[1].duration_ms(), 3 * FALL_MS_PER_ROW);
    }

    #[test]
    fn test_columns_are_independent() {
        let mut grid = Grid::from_text(
            "
            01.
            .2.
            3.4
            ",
        )
        .unwrap();
        let report = grid.compact();
        assert_eq!(grid.to_text(), "...\n01.\n324\n");
        assert_eq!(report.falls.len(), 3);
        assert_eq!(report.longest_fall, 1);
        assert!(report.falls.windows(2).all(|w| w[0].column <= w[1].column));
    }
}
