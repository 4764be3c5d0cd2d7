//! JSON exporter for benchmark runs.

use crate::error::HarnessError;
use crate::runner::{EpisodeReport, ScenarioResult};
use mpe_core::RewardSharing;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export of a single scenario run.
#[derive(Debug, Clone, Serialize)]
pub struct RunExport {
    /// Scenario name
    pub scenario: String,

    /// Seed used
    pub seed: u64,

    /// Whether the run passed
    pub passed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_sharing: Option<RewardSharing>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,

    /// Per-episode reports
    pub episodes: Vec<EpisodeReport>,
}

impl From<&ScenarioResult> for RunExport {
    fn from(result: &ScenarioResult) -> Self {
        Self {
            scenario: result.scenario.name().to_string(),
            seed: result.seed,
            passed: result.passed,
            reward_sharing: result.reward_sharing,
            failure_reason: result.failure_reason.clone(),
            episodes: result.episodes.clone(),
        }
    }
}

/// Complete export for one CLI invocation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimExport {
    /// All runs, in execution order
    pub runs: Vec<RunExport>,
}

impl SimExport {
    /// Creates an empty export container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a finished run.
    pub fn add_run(&mut self, result: &ScenarioResult) {
        self.runs.push(RunExport::from(result));
    }

    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), HarnessError> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::runner::ScenarioRunner;
    use crate::scenarios::ScenarioId;

    #[test]
    fn test_export_layout() {
        let config = SimConfig {
            episodes: 2,
            steps: 3,
            ..Default::default()
        };
        let result = ScenarioRunner::new(config).run(ScenarioId::GoalNavigation);

        let mut export = SimExport::new();
        export.add_run(&result);

        let value = serde_json::to_value(&export).unwrap();
        let run = &value["runs"][0];
        assert_eq!(run["scenario"], "goal_navigation");
        assert_eq!(run["seed"], 42);
        assert_eq!(run["reward_sharing"], "Individual");
        assert!(run.get("failure_reason").is_none());
        assert_eq!(run["episodes"].as_array().map(|e| e.len()), Some(2));
        assert_eq!(run["episodes"][1]["episode"], 1);
        assert_eq!(run["episodes"][0]["observation_dim"], 13);
    }

    #[test]
    fn test_write_to_file() {
        let result = ScenarioRunner::new(SimConfig {
            episodes: 1,
            steps: 1,
            ..Default::default()
        })
        .run(ScenarioId::CooperativePush);

        let mut export = SimExport::new();
        export.add_run(&result);

        let path = std::env::temp_dir().join(format!("mpe_sim_export_{}.json", std::process::id()));
        export.write_to_file(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["runs"][0]["scenario"], "cooperative_push");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let export = SimExport::new();
        let err = export.write_to_file("/nonexistent/dir/export.json").unwrap_err();
        assert!(matches!(err, HarnessError::Io(_)));
    }
}
