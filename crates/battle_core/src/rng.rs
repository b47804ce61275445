use std::ops::{Range, RangeInclusive};

use rand::{rngs::StdRng, Rng, SeedableRng};

pub const DEFAULT_SEED: u64 = 42;

/// Seeded random source handed to the simulator. Remembers its seed so
/// reports can say how to replay a battle.
#[derive(Debug, Clone)]
pub struct BattleRng {
    seed: u64,
    rng: StdRng,
}

impl BattleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn gen_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.gen_range(range)
    }

    /// Uniform draw from the half-open `range`.
    pub fn gen_f64(&mut self, range: Range<f64>) -> f64 {
        self.rng.gen_range(range)
    }

    /// Uniform draw from `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    pub fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
