//! MPE Core - Scenario Controllers for Multi-Agent Particle Worlds
//!
//! A scenario decides, for a world of movable agents and static landmarks:
//! 1. **Reset**: where every entity starts, under geometric constraints
//! 2. **Reward**: the scalar training signal per agent
//! 3. **Observation**: the fixed-layout feature vector per agent
//! 4. **Benchmark**: evaluation-only metrics (collisions, occupancy)
//!
//! Two variants ship here:
//! - `CooperativePush`: pushers and a dummy steer a large body to a landmark
//! - `GoalNavigation`: one agent pursues a goal that fades from view

pub mod cooperative_push;
pub mod geometry;
pub mod goal_navigation;
pub mod scenario;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types for convenience
pub use cooperative_push::{CooperativePush, CooperativePushConfig};
pub use goal_navigation::{GoalNavigation, GoalNavigationConfig};
pub use scenario::{BenchmarkData, Observation, RewardSharing, Scenario};
