//! Test doubles for `ScenarioContext`.

use mpe_env::ScenarioContext;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Replays scripted draws in order; falls back to `low` once exhausted.
pub struct ScriptedContext {
    reals: VecDeque<f64>,
    ints: VecDeque<i64>,
}

impl ScriptedContext {
    pub fn new(reals: Vec<f64>, ints: Vec<i64>) -> Self {
        Self {
            reals: reals.into(),
            ints: ints.into(),
        }
    }
}

impl ScenarioContext for ScriptedContext {
    fn uniform(&mut self, low: f64, _high: f64) -> f64 {
        self.reals.pop_front().unwrap_or(low)
    }

    fn randint(&mut self, low: i64, _high: i64) -> i64 {
        self.ints.pop_front().unwrap_or(low)
    }

    fn seed(&self) -> u64 {
        0
    }
}

/// Seeded ChaCha8 context for property tests.
pub struct SeededContext {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededContext {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl ScenarioContext for SeededContext {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..high)
    }

    fn randint(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..high)
    }

    fn seed(&self) -> u64 {
        self.seed
    }
}
