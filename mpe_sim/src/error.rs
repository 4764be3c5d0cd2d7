//! Error types for the benchmark harness.

use mpe_env::ScenarioError;
use thiserror::Error;

/// Errors that can occur while running or exporting a benchmark.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Scenario construction or evaluation failed
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    /// Observation width changed within a run
    #[error("Observation shape changed for agent {agent}: expected {expected}, got {got}")]
    ObservationShape {
        agent: usize,
        expected: usize,
        got: usize,
    },

    /// Invalid harness configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Reading a config file or writing an export failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HarnessError {
    /// Creates a config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
