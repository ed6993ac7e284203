//! RNG module - seeded tile randomisation
//!
//! A small LCG keeps boards reproducible: the same seed and board configuration always
//! produce the same tiles, which the tests and the autoplay replay log rely on.

use crate::types::TypeIndex;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The high bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() >> 16) * max) >> 16
    }

    /// Uniform tile type in `[0, color_count)`.
    pub fn next_type(&mut self, color_count: u16) -> TypeIndex {
        self.next_range(color_count as u32) as TypeIndex
    }

    /// Current generator state; `SimpleRng::new(state)` continues the same stream.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
