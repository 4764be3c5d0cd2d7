//! Randomness seam for scenario controllers.

use crate::types::Vec2;

/// The single source of randomness for `reset`.
///
/// This trait abstracts the generator so scenario code runs unchanged in
/// production (OS entropy) and in deterministic simulation (seeded
/// ChaCha8).
///
/// # Implementations
///
/// - **Production**: `EntropyContext` - `StdRng` seeded from the OS
/// - **Simulation**: `mpe_sim::SimContext` - `ChaCha8Rng(seed)`
///
/// # Determinism
///
/// Every draw a scenario makes goes through these methods, in a fixed
/// order. Seeding the context before `make_world` reproduces the whole
/// run.
pub trait ScenarioContext {
    /// Draws a real uniformly from `[low, high)`.
    ///
    /// Returns `low` when the interval is empty.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Draws an integer uniformly from the half-open range `[low, high)`.
    ///
    /// Returns `low` when the range is empty.
    fn randint(&mut self, low: i64, high: i64) -> i64;

    /// Returns the context's seed (for logging/debugging).
    ///
    /// In production, returns 0 (not seeded).
    fn seed(&self) -> u64;

    /// Draws a point uniformly from the square `[low, high)²`, x first.
    fn uniform_vec2(&mut self, low: f64, high: f64) -> Vec2 {
        let x = self.uniform(low, high);
        let y = self.uniform(low, high);
        Vec2::new(x, y)
    }
}
