//! Island discovery - flood fill over same-typed, 4-connected cells
//!
//! An island is derived on demand and never stored on the board. All traversals take a
//! [`VisitedSet`] so a whole-board scan can share one set and touch every cell once.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{CellPos, TypeIndex, MIN_ISLAND_SIZE};
use crate::visited::VisitedSet;

/// A maximal set of 4-connected cells sharing one tile type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Island {
    pub type_index: TypeIndex,
    /// Flat grid indices, in traversal order. The first entry is the seed cell.
    pub indices: Vec<usize>,
}

impl Island {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether removing this island is a legal move.
    pub fn is_removable(&self) -> bool {
        self.indices.len() >= MIN_ISLAND_SIZE
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Seed cell the island was grown from.
    pub fn seed(&self) -> usize {
        self.indices[0]
    }

    /// Indices in ascending order, independent of traversal order.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut sorted = self.indices.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Board positions of the island's cells.
    pub fn positions(&self, width: u16) -> Vec<CellPos> {
        self.indices
            .iter()
            .map(|&idx| CellPos::from_index(idx, width))
            .collect()
    }
}

impl Grid {
    /// Occupied neighbours (below, above, left, right) of `index` with the same type.
    ///
    /// An empty `index` has no island and yields no neighbours.
    /// Panics if `index` is outside the grid.
    pub fn neighbors_of_same_type(&self, index: usize) -> ArrayVec<usize, 4> {
        let mut out = ArrayVec::new();
        let Some(kind) = self.at(index) else {
            return out;
        };

        let width = self.width() as usize;
        let x = index % width;
        let y = index / width;

        let mut push = |idx: usize| {
            if self.at(idx) == Some(kind) {
                out.push(idx);
            }
        };
        if y > 0 {
            push(index - width);
        }
        if y + 1 < self.height() as usize {
            push(index + width);
        }
        if x > 0 {
            push(index - 1);
        }
        if x + 1 < width {
            push(index + 1);
        }
        out
    }

    /// Island containing `start`, or `None` when `start` is empty.
    /// Panics if `start` is outside the grid.
    pub fn find_island(&self, start: usize) -> Option<Island> {
        let mut visited = VisitedSet::new(self.len());
        self.find_island_with(start, &mut visited)
    }

    /// Island containing `start`, skipping cells already in `visited`.
    ///
    /// Every cell of the returned island is added to `visited`. Returns `None` when
    /// `start` is empty or was visited before.
    pub fn find_island_with(&self, start: usize, visited: &mut VisitedSet) -> Option<Island> {
        let type_index = self.at(start)?;
        if !visited.insert(start) {
            return None;
        }

        let mut indices = vec![start];
        let mut to_visit = vec![start];
        while let Some(current) = to_visit.pop() {
            for next in self.neighbors_of_same_type(current) {
                if visited.insert(next) {
                    indices.push(next);
                    to_visit.push(next);
                }
            }
        }

        Some(Island {
            type_index,
            indices,
        })
    }

    /// Whether any island of at least [`MIN_ISLAND_SIZE`] cells exists.
    ///
    /// Stops at the first such island; each cell is expanded at most once.
    pub fn has_legal_move(&self) -> bool {
        let mut visited = VisitedSet::new(self.len());
        (0..self.len()).any(|idx| {
            self.find_island_with(idx, &mut visited)
                .is_some_and(|island| island.is_removable())
        })
    }

    /// Every removable island on the board, ordered by seed index.
    pub fn removable_islands(&self) -> Vec<Island> {
        let mut visited = VisitedSet::new(self.len());
        (0..self.len())
            .filter_map(|idx| self.find_island_with(idx, &mut visited))
            .filter(Island::is_removable)
            .collect()
    }
}
