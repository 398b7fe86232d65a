//! RNG module - uniform random piece generation
//!
//! Each draw picks one of the seven kinds with equal probability, independently
//! of earlier draws (no bag, no repeat protection). The generator is seeded
//! explicitly so a game can be replayed exactly.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
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
    ///
    /// Scales by the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state.
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform piece generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceGenerator {
    rng: SimpleRng,
}

impl PieceGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next kind. The only side effect is advancing the RNG.
    pub fn draw(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Current RNG state (feeding it back into `new` continues the sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
