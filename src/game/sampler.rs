use rand::{rngs::StdRng, Rng, SeedableRng};

use super::state::Position;

/// Single source of randomness for a game.
///
/// Seeded once and then shared by placement and the hungry trigger, so every
/// draw comes from the same stream.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Seed from `seed`, or from OS entropy when `None`
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Uniform cell in `[0, width) x [0, height)`
    pub fn cell(&mut self, width: usize, height: usize) -> Position {
        let x = self.rng.gen_range(0..width) as i32;
        let y = self.rng.gen_range(0..height) as i32;
        Position::new(x, y)
    }

    /// Uniform integer in `[0, max]`
    pub fn draw(&mut self, max: u32) -> u32 {
        self.rng.gen_range(0..=max)
    }
}
