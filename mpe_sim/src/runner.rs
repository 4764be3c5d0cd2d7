//! Scenario runner - drives scenario controllers through seeded episodes.

use crate::config::SimConfig;
use crate::context::SimContext;
use crate::error::HarnessError;
use crate::motion::{self, MotionModel};
use crate::scenarios::ScenarioId;

use mpe_core::{RewardSharing, Scenario};
use mpe_env::World;
use serde::Serialize;
use tracing::{debug, info};

/// RNG stream reserved for the motion model.
const MOTION_STREAM: u64 = 1;

/// Aggregated metrics for one episode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeReport {
    /// Episode index within the run
    pub episode: usize,

    /// Steps executed
    pub steps: u64,

    /// Goal visibility horizon in effect for this episode
    pub step_unknown: u64,

    /// Landmark index selected as the goal at reset
    pub select_goal: usize,

    /// Resets performed so far
    pub num_reset: u64,

    /// Mean over steps of the mean reward of rewarded agents
    pub mean_reward: f64,

    /// Collision terms summed over agents and steps
    pub total_collisions: u64,

    /// Mean over steps of the agent-averaged `min_dists`
    pub mean_min_dists: f64,

    /// Mean over steps of the agent-averaged occupied landmark count
    pub mean_occupied_landmarks: f64,

    /// Actor observation width
    pub observation_dim: usize,
}

/// Results from running a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    /// Scenario that was run
    pub scenario: ScenarioId,

    /// Seed used
    pub seed: u64,

    /// Whether every episode completed with finite rewards
    pub passed: bool,

    /// How the scenario distributes reward
    pub reward_sharing: Option<RewardSharing>,

    /// Per-episode reports (empty when the world could not be built)
    pub episodes: Vec<EpisodeReport>,

    /// Failure message if any
    pub failure_reason: Option<String>,
}

impl ScenarioResult {
    /// Mean of the per-episode mean rewards.
    pub fn mean_reward(&self) -> f64 {
        if self.episodes.is_empty() {
            return 0.0;
        }
        self.episodes.iter().map(|e| e.mean_reward).sum::<f64>() / self.episodes.len() as f64
    }
}

/// Runs scenarios against a harness config.
pub struct ScenarioRunner {
    config: SimConfig,
}

impl ScenarioRunner {
    /// Creates a new scenario runner.
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Returns the active config.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Runs a scenario and returns the result.
    pub fn run(&self, scenario: ScenarioId) -> ScenarioResult {
        info!("Starting scenario: {} (seed={})", scenario.name(), self.config.seed);

        let controller = scenario.build(&self.config);
        let reward_sharing = Some(controller.reward_sharing());
        let mut episodes = Vec::with_capacity(self.config.episodes);

        let failure = match self.run_episodes(controller.as_ref(), &mut episodes) {
            Ok(()) => episodes
                .iter()
                .find(|e| !e.mean_reward.is_finite())
                .map(|e| format!("non-finite reward in episode {}", e.episode)),
            Err(e) => Some(e.to_string()),
        };

        ScenarioResult {
            scenario,
            seed: self.config.seed,
            passed: failure.is_none(),
            reward_sharing,
            episodes,
            failure_reason: failure,
        }
    }

    fn run_episodes(
        &self,
        scenario: &dyn Scenario,
        episodes: &mut Vec<EpisodeReport>,
    ) -> Result<(), HarnessError> {
        self.config.validate()?;

        let mut ctx = SimContext::new(self.config.seed);
        let mut motion = motion::build(
            self.config.motion,
            ctx.derive_rng(MOTION_STREAM),
            self.config.motion_noise_std,
            self.config.dt,
        )?;
        debug!("Motion model: {}", motion.name());

        let mut world = scenario.make_world(&mut ctx)?;
        let mut shape: Vec<usize> = Vec::new();

        for episode in 0..self.config.episodes {
            if episode > 0 {
                scenario.reset_world(&mut world, &mut ctx)?;
            }
            let report =
                self.run_episode(scenario, &mut world, motion.as_mut(), episode, &mut shape)?;
            debug!(
                "  episode {}: reward={:.3} collisions={} step_unknown={}",
                report.episode, report.mean_reward, report.total_collisions, report.step_unknown
            );
            episodes.push(report);
        }

        Ok(())
    }

    fn run_episode(
        &self,
        scenario: &dyn Scenario,
        world: &mut World,
        motion: &mut dyn MotionModel,
        episode: usize,
        shape: &mut Vec<usize>,
    ) -> Result<EpisodeReport, HarnessError> {
        let mut report = EpisodeReport {
            episode,
            steps: self.config.steps,
            step_unknown: world.curriculum.step_unknown,
            select_goal: world.select_goal,
            num_reset: world.num_reset,
            mean_reward: 0.0,
            total_collisions: 0,
            mean_min_dists: 0.0,
            mean_occupied_landmarks: 0.0,
            observation_dim: scenario.observation_dim(world)?,
        };

        for _ in 0..self.config.steps {
            for (i, agent) in world.agents.iter().enumerate() {
                let width = scenario.observation(agent, world)?.len();
                match shape.get(i) {
                    Some(&expected) if expected != width => {
                        return Err(HarnessError::ObservationShape {
                            agent: i,
                            expected,
                            got: width,
                        });
                    }
                    Some(_) => {}
                    None => shape.push(width),
                }
            }

            let rewards = scenario.step_rewards(world)?;
            if !rewards.is_empty() {
                report.mean_reward += rewards.iter().sum::<f64>() / rewards.len() as f64;
            }

            let num_agents = world.num_agents().max(1) as f64;
            let mut min_dists = 0.0;
            let mut occupied = 0.0;
            for agent in &world.agents {
                let data = scenario.benchmark_data(agent, world)?;
                report.total_collisions += u64::from(data.collisions);
                min_dists += data.min_dists;
                occupied += f64::from(data.occupied_landmarks);
            }
            report.mean_min_dists += min_dists / num_agents;
            report.mean_occupied_landmarks += occupied / num_agents;

            motion.step(world);
            world.advance_step();
        }

        if self.config.steps > 0 {
            let steps = self.config.steps as f64;
            report.mean_reward /= steps;
            report.mean_min_dists /= steps;
            report.mean_occupied_landmarks /= steps;
        }

        Ok(report)
    }
}
