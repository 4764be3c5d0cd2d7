//! Cooperative push: pushers and a dummy move a large body onto a landmark.
//!
//! The roster holds three roles:
//! - **Dummy**: passive teammate, small and collidable
//! - **Adversary**: the pushed body, large and non-colliding
//! - **Pusher**: active teammate, small and collidable
//!
//! Teammates spawn on the adversary's rim at a random angle, touching but
//! not overlapping it. The team is scored on how close the adversary is
//! to every landmark, and each teammate pays for bumping into another
//! teammate.

use crate::geometry::{distance, overlaps, RimDirection};
use crate::scenario::{BenchmarkData, Observation, RewardSharing, Scenario};
use mpe_env::{Agent, Entity, Landmark, Role, ScenarioContext, ScenarioError, Vec2, World};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Radius of the pushed body.
pub const ADVERSARY_SIZE: f64 = 0.3;

/// Radius of dummies and pushers.
pub const TEAMMATE_SIZE: f64 = 0.1;

/// A landmark counts as occupied when an adversary is closer than this.
pub const OCCUPIED_RADIUS: f64 = 0.1;

/// Half-width of the adversary spawn square.
const ADVERSARY_SPAWN: f64 = 1.0;

/// Landmarks spawn in `[-0.8, 0.8]²`.
const LANDMARK_SPAWN: f64 = 0.8;

/// Role counts for the cooperative push scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CooperativePushConfig {
    /// Passive teammates
    pub num_dummies: usize,

    /// Pushed bodies (exactly one supported)
    pub num_adversaries: usize,

    /// Active pushers
    pub num_push_agents: usize,

    /// Target landmarks
    pub num_landmarks: usize,
}

impl Default for CooperativePushConfig {
    fn default() -> Self {
        Self {
            num_dummies: 1,
            num_adversaries: 1,
            num_push_agents: 1,
            num_landmarks: 1,
        }
    }
}

impl CooperativePushConfig {
    /// Total roster size.
    pub fn num_agents(&self) -> usize {
        self.num_dummies + self.num_adversaries + self.num_push_agents
    }

    /// Rejects role counts the scenario cannot place or observe.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.num_adversaries != 1 {
            return Err(ScenarioError::config(format!(
                "cooperative push needs exactly one adversary, got {}",
                self.num_adversaries
            )));
        }
        if self.num_landmarks == 0 {
            return Err(ScenarioError::config("cooperative push needs at least one landmark"));
        }
        Ok(())
    }

    /// Roles in roster order: dummies, then adversaries, then pushers.
    fn roster(&self) -> impl Iterator<Item = Role> {
        std::iter::repeat(Role::Dummy)
            .take(self.num_dummies)
            .chain(std::iter::repeat(Role::Adversary).take(self.num_adversaries))
            .chain(std::iter::repeat(Role::Pusher).take(self.num_push_agents))
    }
}

/// The cooperative push scenario.
#[derive(Debug, Clone, Default)]
pub struct CooperativePush {
    config: CooperativePushConfig,
}

impl CooperativePush {
    /// Creates the scenario from a configuration.
    pub fn new(config: CooperativePushConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &CooperativePushConfig {
        &self.config
    }

    /// The single pushed body.
    fn adversary<'w>(&self, world: &'w World) -> Result<&'w Agent, ScenarioError> {
        world
            .agents_with_role(Role::Adversary)
            .next()
            .ok_or(ScenarioError::MissingRole(Role::Adversary))
    }

    /// Team term: summed distance from every adversary to every landmark.
    fn team_distance(&self, world: &World) -> f64 {
        world
            .landmarks
            .iter()
            .map(|landmark| {
                world
                    .agents_with_role(Role::Adversary)
                    .map(|adv| distance(&adv.state.position, &landmark.state.position))
                    .sum::<f64>()
            })
            .sum()
    }

    /// Teammates other than `agent` that `agent` is colliding with.
    ///
    /// Adversaries neither pay nor cause this penalty.
    fn teammate_collisions(&self, agent: &Agent, world: &World) -> u32 {
        if !agent.collide || agent.is_adversary() {
            return 0;
        }
        world
            .non_adversaries()
            .filter(|other| other.index != agent.index && self.is_collision(*other, agent))
            .count() as u32
    }

    /// (landmark, adversary) pairs closer than `OCCUPIED_RADIUS`.
    fn occupied_landmarks(&self, world: &World) -> u32 {
        let occupied = |landmark: &Landmark| {
            world
                .agents_with_role(Role::Adversary)
                .filter(|adv| {
                    distance(&adv.state.position, &landmark.state.position) < OCCUPIED_RADIUS
                })
                .count()
        };
        world.landmarks.iter().map(occupied).sum::<usize>() as u32
    }
}

impl Scenario for CooperativePush {
    fn name(&self) -> &'static str {
        "cooperative_push"
    }

    fn reward_sharing(&self) -> RewardSharing {
        RewardSharing::Shared
    }

    fn make_world(&self, ctx: &mut dyn ScenarioContext) -> Result<World, ScenarioError> {
        self.config.validate()?;

        let mut world = World::new();
        world.collaborative = true;
        let dim_c = world.dim_c;

        world.agents = self
            .config
            .roster()
            .enumerate()
            .map(|(i, role)| {
                let (size, collide) = match role {
                    Role::Adversary => (ADVERSARY_SIZE, false),
                    _ => (TEAMMATE_SIZE, true),
                };
                Agent::new(i, role, size, dim_c).with_collide(collide)
            })
            .collect();

        world.landmarks = (0..self.config.num_landmarks).map(Landmark::new).collect();

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

        // Adversaries first: teammates are placed relative to the last one
        let mut anchor: Option<(Vec2, f64)> = None;
        for agent in world.agents.iter_mut().filter(|a| a.is_adversary()) {
            agent.place(ctx.uniform_vec2(-ADVERSARY_SPAWN, ADVERSARY_SPAWN));
            anchor = Some((agent.state.position, agent.size));
        }
        let (adv_pos, adv_size) = anchor.ok_or(ScenarioError::MissingRole(Role::Adversary))?;

        for agent in world.agents.iter_mut().filter(|a| !a.is_adversary()) {
            let direction = RimDirection::sample(ctx);
            agent.place(direction.point_from(&adv_pos, agent.size + adv_size));
        }

        for landmark in &mut world.landmarks {
            landmark.place(LANDMARK_SPAWN * ctx.uniform_vec2(-1.0, 1.0));
        }

        debug!(
            "cooperative_push reset: adversary at ({:.3}, {:.3}), {} landmarks",
            adv_pos.x,
            adv_pos.y,
            world.landmarks.len()
        );
        Ok(())
    }

    fn reward(&self, agent: &Agent, world: &World) -> Result<f64, ScenarioError> {
        let collisions = self.teammate_collisions(agent, world);
        Ok(-self.team_distance(world) - collisions as f64)
    }

    fn observation(&self, agent: &Agent, world: &World) -> Result<Observation, ScenarioError> {
        let adv_pos = self.adversary(world)?.state.position;

        let mut obs = Vec::with_capacity(6 + 2 * (world.num_landmarks() + world.num_agents()));
        obs.extend(agent.state.velocity.iter());
        obs.extend(agent.state.position.iter());
        obs.extend(adv_pos.iter());

        for landmark in &world.landmarks {
            obs.extend((landmark.state.position - adv_pos).iter());
        }

        // Includes the agent itself (a zero block), so the layout does not
        // depend on who is observing.
        for other in world.non_adversaries() {
            obs.extend((agent.state.position - other.state.position).iter());
        }

        Ok(Observation::Single(obs))
    }

    fn benchmark_data(&self, agent: &Agent, world: &World) -> Result<BenchmarkData, ScenarioError> {
        let collisions = self.teammate_collisions(agent, world);
        Ok(BenchmarkData {
            reward: -self.team_distance(world) - collisions as f64,
            collisions,
            // Not tracked for this scenario
            min_dists: 0.0,
            occupied_landmarks: self.occupied_landmarks(world),
        })
    }

    fn is_collision(&self, a: &dyn Entity, b: &dyn Entity) -> bool {
        a.collides() && b.collides() && overlaps(a, b)
    }
}
