//! Multi-agent Particle Environment - Entity Model & World Context
//!
//! This crate holds everything a scenario controller reads or writes
//! without owning the physics:
//! - **Entities**: `Agent` and `Landmark` records (position, velocity, role)
//! - **World**: the roster plus episode counters and the curriculum schedule
//! - **Randomness**: the `ScenarioContext` seam every draw flows through
//!
//! # Determinism
//!
//! Scenario code never touches a global RNG. The driver owns a context
//! (`EntropyContext` in production, a seeded context in simulation) and
//! lends it to `reset`, so a run is reproducible from its seed alone.
//!
//! # Example
//!
//! ```ignore
//! use mpe_env::{EntropyContext, ScenarioContext, World};
//!
//! let mut ctx = EntropyContext::new();
//! let mut world = World::new();
//! for agent in &mut world.agents {
//!     agent.state.position = ctx.uniform_vec2(-1.0, 1.0);
//! }
//! ```

mod context;
mod entity;
mod entropy;
mod error;
mod types;
mod world;

pub use context::ScenarioContext;
pub use entity::{Agent, Entity, EntityState, Landmark};
pub use entropy::EntropyContext;
pub use error::ScenarioError;
pub use types::{EntityId, Rgb, Role, Vec2};
pub use world::{Curriculum, World, DIM_C, DIM_P};
