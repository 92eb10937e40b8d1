use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::tictactoe::{FirstPlayerMode, Side};

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

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    pub fn first_side(&mut self, mode: FirstPlayerMode) -> Side {
        match mode {
            FirstPlayerMode::Human => Side::Minimizer,
            FirstPlayerMode::Ai => Side::Maximizer,
            FirstPlayerMode::Random => {
                if self.random_bool() {
                    Side::Minimizer
                } else {
                    Side::Maximizer
                }
            }
        }
    }
}
