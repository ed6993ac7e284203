//! Read-only export of an engine's board for renderers and logs.

use crate::engine::GridEngine;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major, bottom row first. `0` is empty, otherwise `type_index + 1`.
    pub cells: Vec<u16>,
    /// FNV-1a hash of `cells`.
    pub board_hash: u64,
    pub has_legal_move: bool,
    pub locked: bool,
    pub settle_remaining_ms: u32,
}

impl GridSnapshot {
    /// Rows from the top of the board down, the order a screen draws them in.
    pub fn rows_top_down(&self) -> Vec<Vec<u16>> {
        self.cells
            .chunks(self.width as usize)
            .rev()
            .map(<[u16]>::to_vec)
            .collect()
    }

    pub fn playable(&self) -> bool {
        self.has_legal_move && !self.locked
    }
}

fn fnv1a64(values: &[u16]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for value in values {
        for b in value.to_le_bytes() {
            h ^= b as u64;
            h = h.wrapping_mul(0x00000100000001B3);
        }
    }
    h
}

impl GridEngine {
    pub fn snapshot(&self) -> GridSnapshot {
        let cells: Vec<u16> = self
            .grid()
            .cells()
            .iter()
            .map(|cell| cell.map_or(0, |t| t.saturating_add(1)))
            .collect();
        GridSnapshot {
            width: self.width(),
            height: self.height(),
            board_hash: fnv1a64(&cells),
            cells,
            has_legal_move: self.has_legal_move(),
            locked: self.is_locked(),
            settle_remaining_ms: self.settle_remaining_ms(),
        }
    }
}
