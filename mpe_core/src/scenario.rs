//! The scenario controller contract.

use mpe_env::{Agent, Entity, ScenarioContext, ScenarioError, World};
use serde::{Deserialize, Serialize};

/// How the reward signal is distributed across agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardSharing {
    /// Every agent receives the same team-level term
    Shared,

    /// Each agent is scored against its own objective
    Individual,
}

/// Per-agent observation.
///
/// The layout of each vector is fixed for a fixed roster; downstream
/// policies are trained against the exact ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Observation {
    /// One vector shared by actor and critic
    Single(Vec<f64>),

    /// Partially observable actor view plus a privileged critic view
    ActorCritic { actor: Vec<f64>, critic: Vec<f64> },
}

impl Observation {
    /// Returns the policy-facing vector.
    pub fn actor(&self) -> &[f64] {
        match self {
            Observation::Single(obs) => obs,
            Observation::ActorCritic { actor, .. } => actor,
        }
    }

    /// Returns the value-estimator vector, when one is separate.
    pub fn critic(&self) -> Option<&[f64]> {
        match self {
            Observation::Single(_) => None,
            Observation::ActorCritic { critic, .. } => Some(critic),
        }
    }

    /// Length of the actor vector.
    pub fn len(&self) -> usize {
        self.actor().len()
    }

    /// True when the actor vector is empty.
    pub fn is_empty(&self) -> bool {
        self.actor().is_empty()
    }
}

/// Evaluation-only metrics for one agent at one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkData {
    /// Reward decomposition matching `Scenario::reward`'s objective
    pub reward: f64,

    /// Collisions counted against this agent
    pub collisions: u32,

    /// Sum over landmarks of the closest agent distance (0 if not tracked)
    pub min_dists: f64,

    /// Landmarks considered occupied
    pub occupied_landmarks: u32,
}

/// A scenario controller.
///
/// Stateless across calls apart from its own configuration; all episode
/// state lives in the `World` passed in. Only `make_world` and
/// `reset_world` mutate; every per-step query takes `&World`.
pub trait Scenario {
    /// Returns the scenario name.
    fn name(&self) -> &'static str;

    /// Whether the reward is team-level or per agent.
    fn reward_sharing(&self) -> RewardSharing;

    /// Builds the world from this scenario's configuration and resets it.
    ///
    /// Rejects inconsistent configurations with `ScenarioError::InvalidConfig`.
    fn make_world(&self, ctx: &mut dyn ScenarioContext) -> Result<World, ScenarioError>;

    /// Re-places every entity for a new episode.
    fn reset_world(
        &self,
        world: &mut World,
        ctx: &mut dyn ScenarioContext,
    ) -> Result<(), ScenarioError>;

    /// Scalar reward for `agent` in the current state.
    fn reward(&self, agent: &Agent, world: &World) -> Result<f64, ScenarioError>;

    /// Observation for `agent` in the current state.
    fn observation(&self, agent: &Agent, world: &World) -> Result<Observation, ScenarioError>;

    /// Evaluation metrics for `agent` in the current state.
    fn benchmark_data(&self, agent: &Agent, world: &World) -> Result<BenchmarkData, ScenarioError>;

    /// Collision predicate. Must be symmetric.
    fn is_collision(&self, a: &dyn Entity, b: &dyn Entity) -> bool;

    /// Whether `reward` is defined for `agent`.
    ///
    /// Drivers skip agents for which this is false.
    fn is_rewarded(&self, _agent: &Agent) -> bool {
        true
    }

    /// Rewards for every rewarded agent, in roster order.
    fn step_rewards(&self, world: &World) -> Result<Vec<f64>, ScenarioError> {
        world
            .agents
            .iter()
            .filter(|agent| self.is_rewarded(agent))
            .map(|agent| self.reward(agent, world))
            .collect()
    }

    /// Length of the actor observation (0 for an empty roster).
    fn observation_dim(&self, world: &World) -> Result<usize, ScenarioError> {
        match world.agents.first() {
            Some(agent) => Ok(self.observation(agent, world)?.len()),
            None => Ok(0),
        }
    }
}
