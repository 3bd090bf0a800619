use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::tictactoe::Mark;

/// Seedable random source for a single game session.
///
/// Every random decision a session makes goes through this type, so replaying a
/// session with the same seed reproduces it exactly.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    /// Picks X or O with equal probability.
    pub fn random_mark(&mut self) -> Mark {
        if self.random_bool() { Mark::X } else { Mark::O }
    }
}
