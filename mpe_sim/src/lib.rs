//! Deterministic benchmark harness for the particle scenarios.
//!
//! The harness plays the driver role: it owns the [`World`](mpe_env::World)
//! and a seeded [`SimContext`], builds the world once, then for every episode
//! resets it and steps through observe / reward / benchmark before advancing
//! the world step.
//!
//! # Determinism
//!
//! All scenario draws come from one ChaCha8 stream seeded by
//! [`SimConfig::seed`]. The stand-in motion model draws from a separate
//! stream derived from the same seed, so switching motion models never
//! shifts reset positions or goal selection.
//!
//! # Usage
//!
//! ```ignore
//! use mpe_sim::{ScenarioRunner, SimConfig};
//! use mpe_sim::scenarios::ScenarioId;
//!
//! let runner = ScenarioRunner::new(SimConfig { seed: 7, ..Default::default() });
//! let result = runner.run(ScenarioId::GoalNavigation);
//! assert!(result.passed);
//! ```

mod config;
mod context;
mod error;
mod exporter;
mod motion;
mod runner;
pub mod scenarios;

pub use config::{MotionKind, SimConfig};
pub use context::SimContext;
pub use error::HarnessError;
pub use exporter::{RunExport, SimExport};
pub use motion::{Frozen, MotionModel, RandomWalk};
pub use runner::{EpisodeReport, ScenarioResult, ScenarioRunner};
