//! Fixed-size bitset used to mark grid cells during flood fills.
//!
//! One set is sized to the grid and shared across every flood fill of a board scan,
//! so each cell is expanded at most once per scan.

#[derive(Debug, Clone)]
pub struct VisitedSet {
    bits: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    pub fn new(len: usize) -> Self {
        Self {
            bits: vec![0; len.div_ceil(64)],
            len,
        }
    }

    /// Number of indices the set can hold.
    pub fn capacity(&self) -> usize {
        self.len
    }

    /// Mark `idx`. Returns `true` if it was not marked before.
    #[inline(always)]
    pub fn insert(&mut self, idx: usize) -> bool {
        assert!(idx < self.len, "visited index {idx} out of range");
        let word = idx >> 6; // idx / 64
        let mask = 1u64 << (idx & 63);
        let fresh = self.bits[word] & mask == 0;
        self.bits[word] |= mask;
        fresh
    }

    #[inline(always)]
    pub fn contains(&self, idx: usize) -> bool {
        idx < self.len && self.bits[idx >> 6] & (1u64 << (idx & 63)) != 0
    }

    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    /// Number of marked indices.
    pub fn count(&self) -> usize {
        self.bits.iter().map(|word| word.count_ones() as usize).sum()
    }
}
