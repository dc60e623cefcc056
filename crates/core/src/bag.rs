//! Bag module - double 7-bag piece sequencing
//!
//! The sequencer owns a 14-slot buffer seeded with two full sets of the
//! seven shapes and a cursor. Draws walk the buffer; exhausting it triggers
//! a reshuffle of 14 random swap-with-slot-0 transpositions. The shuffle is
//! not a uniform permutation, but it preserves the multiset, so any 14
//! consecutive draws from a bag boundary contain each shape exactly twice.
//!
//! Randomness comes from a small seedable LCG so the piece sequence is
//! reproducible in tests.

use pixel_tetris_types::Shape;

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Number of slots in the buffer: two full sets of seven shapes
const BAG_SLOTS: usize = 14;

/// The piece sequencer
#[derive(Debug, Clone)]
pub struct PieceBag {
    slots: [Shape; BAG_SLOTS],
    cursor: usize,
    rng: SimpleRng,
}

impl PieceBag {
    /// Create a sequencer with the given RNG seed. The seed slots count as
    /// already consumed, so the first draw reshuffles.
    pub fn new(seed: u32) -> Self {
        let mut slots = [Shape::None; BAG_SLOTS];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = Shape::ALL[i % Shape::ALL.len()];
        }
        Self {
            slots,
            cursor: BAG_SLOTS,
            rng: SimpleRng::new(seed),
        }
    }

    /// Deal the next shape, reshuffling when the buffer is exhausted.
    /// Never deals the placeholder shape.
    pub fn next(&mut self) -> Shape {
        if self.cursor < BAG_SLOTS {
            let shape = self.slots[self.cursor];
            self.cursor += 1;
            return shape;
        }
        for _ in 0..BAG_SLOTS {
            let i = self.rng.next_range(BAG_SLOTS as u32) as usize;
            self.slots.swap(0, i);
        }
        self.cursor = 1;
        self.slots[0]
    }

    /// Current RNG state, usable to reproduce the remaining sequence
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}
