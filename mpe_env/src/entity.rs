//! Agents and landmarks.
//!
//! The physics engine owns position/velocity updates during a step;
//! scenario code only writes the initial state at reset and reads the
//! current state afterwards.

use crate::types::{EntityId, Rgb, Role, Vec2};
use serde::{Deserialize, Serialize};

/// Default landmark radius.
const LANDMARK_SIZE: f64 = 0.05;

/// Physical state shared by every entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    /// Position [x, y]
    pub position: Vec2,

    /// Velocity [vx, vy]
    pub velocity: Vec2,
}

impl Default for EntityState {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            velocity: Vec2::zeros(),
        }
    }
}

/// Read-only view used by collision and distance predicates.
pub trait Entity {
    /// Identity within the world.
    fn id(&self) -> EntityId;

    /// Current position.
    fn position(&self) -> Vec2;

    /// Collision radius.
    fn size(&self) -> f64;

    /// Whether the entity takes part in collisions at all.
    fn collides(&self) -> bool;
}

/// A movable, controllable entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Roster index
    pub index: usize,

    /// Display name (`"agent 0"`, ...)
    pub name: String,

    /// Position and velocity
    pub state: EntityState,

    /// Communication utterance, `dim_c` wide; stays zero for silent agents
    pub communication: Vec<f64>,

    /// Collision radius
    pub size: f64,

    /// Participates in collisions
    pub collide: bool,

    /// Never writes to its communication channel
    pub silent: bool,

    /// Scenario role, immutable after construction
    role: Role,

    /// Index of the landmark this agent pursues, if any
    pub goal: Option<usize>,

    /// Render colour, assigned by the world
    pub color: Rgb,
}

impl Agent {
    /// Creates an agent with zeroed state and a `dim_c`-wide silent channel.
    pub fn new(index: usize, role: Role, size: f64, dim_c: usize) -> Self {
        Self {
            index,
            name: format!("agent {}", index),
            state: EntityState::default(),
            communication: vec![0.0; dim_c],
            size,
            collide: true,
            silent: true,
            role,
            goal: None,
            color: [0.0; 3],
        }
    }

    /// Sets the collide flag (builder style).
    pub fn with_collide(mut self, collide: bool) -> Self {
        self.collide = collide;
        self
    }

    /// Returns the scenario role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// True for the pushed body of the cooperative scenario.
    pub fn is_adversary(&self) -> bool {
        self.role == Role::Adversary
    }

    /// True for passive teammates.
    pub fn is_dummy(&self) -> bool {
        self.role == Role::Dummy
    }

    /// Places the agent at `position` with zero velocity and a silent channel.
    pub fn place(&mut self, position: Vec2) {
        self.state.position = position;
        self.state.velocity = Vec2::zeros();
        self.communication.iter_mut().for_each(|c| *c = 0.0);
    }
}

impl Entity for Agent {
    fn id(&self) -> EntityId {
        EntityId::Agent(self.index)
    }

    fn position(&self) -> Vec2 {
        self.state.position
    }

    fn size(&self) -> f64 {
        self.size
    }

    fn collides(&self) -> bool {
        self.collide
    }
}

/// A static reference point. Never moves, never collides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Landmark {
    /// Roster index
    pub index: usize,

    /// Display name (`"landmark 0"`, ...)
    pub name: String,

    /// Position; velocity is kept at zero
    pub state: EntityState,

    /// Radius (only used for rendering)
    pub size: f64,

    /// Render colour, assigned by the world
    pub color: Rgb,
}

impl Landmark {
    /// Creates a landmark at the origin.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            name: format!("landmark {}", index),
            state: EntityState::default(),
            size: LANDMARK_SIZE,
            color: [0.0; 3],
        }
    }

    /// Landmarks are immovable.
    pub fn movable(&self) -> bool {
        false
    }

    /// Places the landmark at `position` with zero velocity.
    pub fn place(&mut self, position: Vec2) {
        self.state.position = position;
        self.state.velocity = Vec2::zeros();
    }
}

impl Entity for Landmark {
    fn id(&self) -> EntityId {
        EntityId::Landmark(self.index)
    }

    fn position(&self) -> Vec2 {
        self.state.position
    }

    fn size(&self) -> f64 {
        self.size
    }

    fn collides(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_agent_defaults() {
        let agent = Agent::new(2, Role::Pusher, 0.1, 2);
        assert_eq!(agent.name, "agent 2");
        assert_eq!(agent.communication, vec![0.0, 0.0]);
        assert!(agent.collide);
        assert!(agent.silent);
        assert!(agent.goal.is_none());
        assert_eq!(agent.id(), EntityId::Agent(2));
        assert_relative_eq!(agent.size(), 0.1);
    }

    #[test]
    fn test_agent_role_predicates() {
        let adv = Agent::new(0, Role::Adversary, 0.3, 2).with_collide(false);
        assert!(adv.is_adversary());
        assert!(!adv.is_dummy());
        assert!(!adv.collides());

        let dummy = Agent::new(1, Role::Dummy, 0.1, 2);
        assert!(dummy.is_dummy());
        assert!(!dummy.is_adversary());
    }

    #[test]
    fn test_place_zeroes_motion() {
        let mut agent = Agent::new(0, Role::Navigator, 0.15, 2);
        agent.state.velocity = Vec2::new(1.0, -1.0);
        agent.communication = vec![0.5, 0.5];

        agent.place(Vec2::new(0.2, 0.3));

        assert_relative_eq!(agent.position(), Vec2::new(0.2, 0.3));
        assert_eq!(agent.state.velocity, Vec2::zeros());
        assert_eq!(agent.communication, vec![0.0, 0.0]);
    }

    #[test]
    fn test_landmark_never_collides() {
        let landmark = Landmark::new(1);
        assert_eq!(landmark.name, "landmark 1");
        assert!(!landmark.collides());
        assert!(!landmark.movable());
        assert_eq!(landmark.id(), EntityId::Landmark(1));
        assert_relative_eq!(landmark.size(), 0.05);
        assert_relative_eq!(landmark.state.velocity.norm(), 0.0);
    }
}
