//! Harness configuration.

use crate::error::HarnessError;
use mpe_core::{CooperativePushConfig, GoalNavigationConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Stand-in motion applied between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MotionKind {
    /// Entities hold their reset positions
    Frozen,

    /// Agents drift with Gaussian velocity noise
    RandomWalk,
}

/// Configuration for a benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Master seed for determinism
    pub seed: u64,

    /// Episodes per scenario
    pub episodes: usize,

    /// Steps per episode
    pub steps: u64,

    /// Motion model between steps
    pub motion: MotionKind,

    /// Velocity noise standard deviation for the random walk
    pub motion_noise_std: f64,

    /// Integration step for the random walk
    pub dt: f64,

    /// Cooperative push role counts
    pub cooperative_push: CooperativePushConfig,

    /// Goal navigation roster and curriculum
    pub goal_navigation: GoalNavigationConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            episodes: 10,
            steps: 25,
            motion: MotionKind::Frozen,
            motion_noise_std: 0.5,
            dt: 0.1,
            cooperative_push: CooperativePushConfig::default(),
            goal_navigation: GoalNavigationConfig::default(),
        }
    }
}

impl SimConfig {
    /// Loads a config from a JSON file; missing fields take defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let text = std::fs::read_to_string(path)?;
        let config: SimConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks harness-level settings. Scenario configs validate themselves
    /// when the world is built.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.episodes == 0 {
            return Err(HarnessError::config("episodes must be at least 1"));
        }
        if !(self.motion_noise_std >= 0.0 && self.motion_noise_std.is_finite()) {
            return Err(HarnessError::config(
                "motion_noise_std must be a finite non-negative number",
            ));
        }
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(HarnessError::config("dt must be a finite positive number"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let json = r#"{
            "seed": 7,
            "motion": "random_walk",
            "goal_navigation": {
                "num_agents": 2,
                "num_landmarks": 3,
                "step_unknown": 5,
                "unknown_decay": true,
                "decay_episode": 1,
                "critic_full_obs": true
            }
        }"#;
        let config: SimConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.motion, MotionKind::RandomWalk);
        assert_eq!(config.episodes, SimConfig::default().episodes);
        assert_eq!(config.goal_navigation.num_agents, 2);
        assert!(config.goal_navigation.critic_full_obs);
        assert_eq!(config.cooperative_push, CooperativePushConfig::default());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = SimConfig {
            episodes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimConfig {
            dt: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimConfig {
            motion_noise_std: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SimConfig::load("/nonexistent/mpe_sim_config.json").unwrap_err();
        assert!(matches!(err, HarnessError::Io(_)));
    }
}
