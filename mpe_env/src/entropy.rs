//! Production implementation of ScenarioContext using OS entropy.

use crate::ScenarioContext;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Production context backed by an OS-seeded `StdRng`.
///
/// Runs are not reproducible; use a seeded context for evaluation.
pub struct EntropyContext {
    rng: StdRng,
}

impl EntropyContext {
    /// Creates a new EntropyContext.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioContext for EntropyContext {
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
        // Production is not seeded
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_context_ranges() {
        let mut ctx = EntropyContext::new();
        for _ in 0..1000 {
            let x = ctx.uniform(-0.8, 0.8);
            assert!((-0.8..0.8).contains(&x));

            let k = ctx.randint(-1, 1);
            assert!(k == -1 || k == 0);
        }
    }

    #[test]
    fn test_entropy_context_empty_range() {
        let mut ctx = EntropyContext::new();
        assert_eq!(ctx.uniform(1.0, 1.0), 1.0);
        assert_eq!(ctx.randint(3, 3), 3);
    }

    #[test]
    fn test_entropy_context_seed() {
        let ctx = EntropyContext::new();
        assert_eq!(ctx.seed(), 0);
    }
}
