//! Scenario identifiers for the harness.

use crate::config::SimConfig;
use mpe_core::{CooperativePush, GoalNavigation, Scenario};

/// Scenario identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioId {
    /// Pushers and a dummy steer a large body onto a landmark
    CooperativePush,

    /// One agent pursues a goal whose indicator fades over training
    GoalNavigation,
}

impl ScenarioId {
    /// Returns a list of all scenarios.
    pub fn all() -> Vec<ScenarioId> {
        vec![ScenarioId::CooperativePush, ScenarioId::GoalNavigation]
    }

    /// Returns the scenario name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioId::CooperativePush => "cooperative_push",
            ScenarioId::GoalNavigation => "goal_navigation",
        }
    }

    /// Returns a description of the scenario.
    pub fn description(&self) -> &'static str {
        match self {
            ScenarioId::CooperativePush => {
                "dummy + pusher move the adversary onto a landmark (shared reward)"
            }
            ScenarioId::GoalNavigation => {
                "agent 0 navigates to a goal landmark with a decaying goal indicator"
            }
        }
    }

    /// Builds the scenario controller from the run config.
    pub fn build(&self, config: &SimConfig) -> Box<dyn Scenario> {
        match self {
            ScenarioId::CooperativePush => {
                Box::new(CooperativePush::new(config.cooperative_push.clone()))
            }
            ScenarioId::GoalNavigation => {
                Box::new(GoalNavigation::new(config.goal_navigation.clone()))
            }
        }
    }
}

impl std::fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ScenarioId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cooperative_push" | "cooperativepush" | "simple_cooperation" | "push" => {
                Ok(ScenarioId::CooperativePush)
            }
            "goal_navigation" | "goalnavigation" | "single_navigation" | "navigation" => {
                Ok(ScenarioId::GoalNavigation)
            }
            "all" => Err("Use ScenarioId::all() for every scenario".to_string()),
            _ => Err(format!("Unknown scenario: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("cooperative_push".parse::<ScenarioId>(), Ok(ScenarioId::CooperativePush));
        assert_eq!("simple_cooperation".parse::<ScenarioId>(), Ok(ScenarioId::CooperativePush));
        assert_eq!("Goal_Navigation".parse::<ScenarioId>(), Ok(ScenarioId::GoalNavigation));
        assert_eq!("single_navigation".parse::<ScenarioId>(), Ok(ScenarioId::GoalNavigation));
        assert!("all".parse::<ScenarioId>().is_err());
        assert!("tag".parse::<ScenarioId>().is_err());
    }

    #[test]
    fn test_display_round_trips_name() {
        for id in ScenarioId::all() {
            assert_eq!(id.to_string().parse::<ScenarioId>(), Ok(id));
        }
    }

    #[test]
    fn test_build_matches_name() {
        let config = SimConfig::default();
        for id in ScenarioId::all() {
            assert_eq!(id.build(&config).name(), id.name());
        }
    }
}
