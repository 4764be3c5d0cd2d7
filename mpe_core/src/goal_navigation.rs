//! Goal navigation with a fading goal indicator.
//!
//! `num_agents` agents share a field of `num_landmarks` landmarks. Each
//! episode one landmark is drawn as the goal and bound to `agents[0]`.
//! Observations carry a one-hot goal index that is blanked once the
//! episode passes the curriculum horizon (`step_unknown`); the horizon
//! itself shrinks every `decay_episode` resets when decay is enabled.
//!
//! With `critic_full_obs` the scenario emits an actor/critic pair: the
//! critic always sees the true goal, the actor only while it is visible.

use crate::geometry::{distance, overlaps};
use crate::scenario::{BenchmarkData, Observation, RewardSharing, Scenario};
use mpe_env::{Agent, Curriculum, Entity, Landmark, Role, ScenarioContext, ScenarioError, World};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Radius of every navigating agent.
pub const AGENT_SIZE: f64 = 0.15;

/// A landmark counts as occupied when some agent is closer than this.
pub const OCCUPIED_RADIUS: f64 = 0.1;

/// Agents spawn in `[-1, 1]²`.
const AGENT_SPAWN: f64 = 1.0;

/// Landmarks spawn in `[-0.8, 0.8]²`.
const LANDMARK_SPAWN: f64 = 0.8;

/// Configuration for the goal navigation scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalNavigationConfig {
    /// Agents in the world; `agents[0]` pursues the goal
    pub num_agents: usize,

    /// Candidate goal landmarks
    pub num_landmarks: usize,

    /// Initial goal-visibility horizon in steps
    pub step_unknown: u64,

    /// Shrink the horizon over training
    pub unknown_decay: bool,

    /// Resets between horizon decrements
    pub decay_episode: u64,

    /// Emit a separate privileged critic observation
    pub critic_full_obs: bool,
}

impl Default for GoalNavigationConfig {
    fn default() -> Self {
        Self {
            num_agents: 1,
            num_landmarks: 3,
            step_unknown: 10,
            unknown_decay: false,
            decay_episode: 100,
            critic_full_obs: false,
        }
    }
}

impl GoalNavigationConfig {
    /// Rejects configurations that leave the goal or the schedule undefined.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.num_agents == 0 {
            return Err(ScenarioError::config("goal navigation needs at least one agent"));
        }
        if self.num_landmarks == 0 {
            return Err(ScenarioError::NoLandmarks);
        }
        if self.unknown_decay && self.decay_episode == 0 {
            return Err(ScenarioError::config(
                "decay_episode must be positive when unknown_decay is set",
            ));
        }
        Ok(())
    }

    fn curriculum(&self) -> Curriculum {
        Curriculum {
            step_unknown: self.step_unknown,
            unknown_decay: self.unknown_decay,
            decay_episode: self.decay_episode,
        }
    }
}

/// The goal navigation scenario.
#[derive(Debug, Clone, Default)]
pub struct GoalNavigation {
    config: GoalNavigationConfig,
}

impl GoalNavigation {
    /// Creates the scenario from a configuration.
    pub fn new(config: GoalNavigationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GoalNavigationConfig {
        &self.config
    }

    /// Draws a goal landmark and binds it to the designated agent.
    fn select_goal(
        &self,
        world: &mut World,
        ctx: &mut dyn ScenarioContext,
    ) -> Result<(), ScenarioError> {
        let count = world.num_landmarks();
        if count == 0 {
            return Err(ScenarioError::NoLandmarks);
        }
        let goal = ctx.randint(0, count as i64) as usize;
        let designated = world
            .agents
            .first_mut()
            .ok_or_else(|| ScenarioError::config("goal navigation world has no agents"))?;
        designated.goal = Some(goal);
        world.select_goal = goal;
        Ok(())
    }

    /// Velocity, position, then every landmark relative to the agent.
    fn stable_features(&self, agent: &Agent, world: &World) -> Vec<f64> {
        let mut obs = Vec::with_capacity(4 + 2 * world.num_landmarks());
        obs.extend(agent.state.velocity.iter());
        obs.extend(agent.state.position.iter());
        for landmark in &world.landmarks {
            obs.extend((landmark.state.position - agent.state.position).iter());
        }
        obs
    }

    /// One-hot goal index, blanked when `visible` is false.
    fn goal_index(&self, world: &World, visible: bool) -> Result<Vec<f64>, ScenarioError> {
        world.landmark(world.select_goal)?;
        let mut index = vec![0.0; world.num_landmarks()];
        if visible {
            index[world.select_goal] = 1.0;
        }
        Ok(index)
    }

    /// Observation with an explicit actor/critic choice.
    ///
    /// Every agent derives the goal index from shared world state, whether
    /// or not it carries the goal binding itself.
    pub fn observation_with(
        &self,
        agent: &Agent,
        world: &World,
        critic_full_obs: bool,
    ) -> Result<Observation, ScenarioError> {
        let stable = self.stable_features(agent, world);
        let visible = world.curriculum.goal_visible(world.world_step);

        let mut actor = self.goal_index(world, visible)?;
        actor.extend_from_slice(&stable);

        if !critic_full_obs {
            return Ok(Observation::Single(actor));
        }

        let mut critic = self.goal_index(world, true)?;
        critic.extend_from_slice(&stable);
        Ok(Observation::ActorCritic { actor, critic })
    }

    /// Other agents `agent` is colliding with.
    fn collisions(&self, agent: &Agent, world: &World) -> u32 {
        if !agent.collide {
            return 0;
        }
        world
            .agents
            .iter()
            .filter(|other| self.is_collision(*other, agent))
            .count() as u32
    }
}

impl Scenario for GoalNavigation {
    fn name(&self) -> &'static str {
        "goal_navigation"
    }

    fn reward_sharing(&self) -> RewardSharing {
        RewardSharing::Individual
    }

    fn make_world(&self, ctx: &mut dyn ScenarioContext) -> Result<World, ScenarioError> {
        self.config.validate()?;

        let mut world = World::new();
        world.curriculum = self.config.curriculum();
        world.num_reset = 0;
        let dim_c = world.dim_c;

        world.agents = (0..self.config.num_agents)
            .map(|i| Agent::new(i, Role::Navigator, AGENT_SIZE, dim_c))
            .collect();
        world.landmarks = (0..self.config.num_landmarks).map(Landmark::new).collect();

        self.select_goal(&mut world, ctx)?;
        self.reset_world(&mut world, ctx)?;
        Ok(world)
    }

    fn reset_world(
        &self,
        world: &mut World,
        ctx: &mut dyn ScenarioContext,
    ) -> Result<(), ScenarioError> {
        world.assign_agent_colors();
        world.assign_landmark_colors();

        for agent in &mut world.agents {
            agent.place(ctx.uniform_vec2(-AGENT_SPAWN, AGENT_SPAWN));
        }
        for landmark in &mut world.landmarks {
            landmark.place(LANDMARK_SPAWN * ctx.uniform_vec2(-1.0, 1.0));
        }

        self.select_goal(world, ctx)?;
        world.world_step = 0;
        world.num_reset += 1;

        if world.curriculum.advance(world.num_reset) {
            info!(
                "goal_navigation curriculum: step_unknown -> {} after {} resets",
                world.curriculum.step_unknown, world.num_reset
            );
        }

        debug!(
            "goal_navigation reset #{}: goal=landmark {}, step_unknown={}",
            world.num_reset, world.select_goal, world.curriculum.step_unknown
        );
        Ok(())
    }

    fn reward(&self, agent: &Agent, world: &World) -> Result<f64, ScenarioError> {
        let goal = world.goal_of(agent)?;
        let dist = distance(&agent.state.position, &goal.state.position);
        Ok(-dist - self.collisions(agent, world) as f64)
    }

    fn observation(&self, agent: &Agent, world: &World) -> Result<Observation, ScenarioError> {
        self.observation_with(agent, world, self.config.critic_full_obs)
    }

    fn benchmark_data(&self, agent: &Agent, world: &World) -> Result<BenchmarkData, ScenarioError> {
        let mut data = BenchmarkData::default();

        for landmark in &world.landmarks {
            let closest = world
                .agents
                .iter()
                .map(|a| distance(&a.state.position, &landmark.state.position))
                .fold(f64::INFINITY, f64::min);
            data.min_dists += closest;
            data.reward -= closest;
            if closest < OCCUPIED_RADIUS {
                data.occupied_landmarks += 1;
            }
        }

        let collisions = self.collisions(agent, world);
        data.collisions = collisions;
        data.reward -= collisions as f64;
        Ok(data)
    }

    fn is_collision(&self, a: &dyn Entity, b: &dyn Entity) -> bool {
        a.id() != b.id() && a.collides() && b.collides() && overlaps(a, b)
    }

    fn is_rewarded(&self, agent: &Agent) -> bool {
        agent.goal.is_some()
    }
}
