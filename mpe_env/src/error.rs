//! Error types for scenario controllers.

use crate::types::Role;
use thiserror::Error;

/// Errors surfaced by scenario construction and per-step evaluation.
///
/// All of these are configuration or programming defects; nothing at
/// this layer does I/O, so nothing is retried.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Configuration rejected at `make_world`
    #[error("Invalid scenario config: {0}")]
    InvalidConfig(String),

    /// The world has no landmarks, so no goal can be selected
    #[error("World has no landmarks")]
    NoLandmarks,

    /// Reward requested for an agent that has no goal bound
    #[error("Agent {agent} has no goal bound")]
    GoalUnbound { agent: usize },

    /// Goal index does not name a landmark
    #[error("Landmark index {index} out of range ({count} landmarks)")]
    UnknownLandmark { index: usize, count: usize },

    /// A role the scenario anchors on is absent from the roster
    #[error("No agent with role {0}")]
    MissingRole(Role),
}

impl ScenarioError {
    /// Creates a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
