//! Per-row random streams
//!
//! Every row of every tick draws from its own ChaCha stream, so the neighbour
//! shuffle does not depend on which thread plans the row or in what order.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const TICK_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickSeed {
    seed: u64,
    tick: u64,
}

impl TickSeed {
    pub fn new(seed: u64, tick: u64) -> Self {
        Self { seed, tick }
    }

    pub fn seed(&self) -> u64 { self.seed }

    pub fn tick(&self) -> u64 { self.tick }

    pub fn row_rng(&self, row: u32) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ self.tick.wrapping_mul(TICK_MIX));
        rng.set_stream(row as u64);
        rng
    }
}
