//! Stand-in motion between steps.
//!
//! The harness has no physics engine. These models only move agents so
//! that observations and rewards change over an episode; there is no
//! force resolution and no collision response.

use crate::config::MotionKind;
use crate::error::HarnessError;
use mpe_env::{Vec2, World};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Advances agent state by one step.
pub trait MotionModel {
    /// Returns the model name.
    fn name(&self) -> &'static str;

    /// Moves agents in place. Landmarks never move.
    fn step(&mut self, world: &mut World);
}

/// Leaves every entity where reset put it.
pub struct Frozen;

impl MotionModel for Frozen {
    fn name(&self) -> &'static str {
        "frozen"
    }

    fn step(&mut self, _world: &mut World) {}
}

/// Gaussian velocity draw per agent, integrated with a fixed `dt` and
/// clamped to the spawn square.
pub struct RandomWalk {
    rng: ChaCha8Rng,
    noise: Normal<f64>,
    dt: f64,
    bound: f64,
}

impl RandomWalk {
    /// Creates a random walk with its own RNG stream.
    pub fn new(rng: ChaCha8Rng, noise_std: f64, dt: f64) -> Result<Self, HarnessError> {
        let noise = Normal::new(0.0, noise_std)
            .map_err(|e| HarnessError::config(format!("invalid motion noise: {}", e)))?;
        Ok(Self {
            rng,
            noise,
            dt,
            bound: 1.0,
        })
    }
}

impl MotionModel for RandomWalk {
    fn name(&self) -> &'static str {
        "random_walk"
    }

    fn step(&mut self, world: &mut World) {
        for agent in &mut world.agents {
            let velocity = Vec2::new(
                self.noise.sample(&mut self.rng),
                self.noise.sample(&mut self.rng),
            );
            let position = agent.state.position + velocity * self.dt;
            agent.state.velocity = velocity;
            agent.state.position = position.map(|c| c.clamp(-self.bound, self.bound));
        }
    }
}

/// Builds the motion model selected in the config.
pub fn build(
    kind: MotionKind,
    rng: ChaCha8Rng,
    noise_std: f64,
    dt: f64,
) -> Result<Box<dyn MotionModel>, HarnessError> {
    match kind {
        MotionKind::Frozen => Ok(Box::new(Frozen)),
        MotionKind::RandomWalk => Ok(Box::new(RandomWalk::new(rng, noise_std, dt)?)),
    }
}
