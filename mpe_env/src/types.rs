//! Common types for the particle entity model.

use serde::{Deserialize, Serialize};

/// Position / velocity vector in the 2-D physical plane.
pub type Vec2 = nalgebra::Vector2<f64>;

/// RGB colour in `[0, 1]` per channel.
pub type Rgb = [f64; 3];

/// Identifier of an entity within one world.
///
/// Agents and landmarks live in separate rosters, so the index alone is
/// not unique. Identity checks (e.g. "an entity never collides with
/// itself") compare these instead of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityId {
    /// Index into `World::agents`
    Agent(usize),

    /// Index into `World::landmarks`
    Landmark(usize),
}

impl EntityId {
    /// Returns the roster index.
    pub fn index(&self) -> usize {
        match self {
            EntityId::Agent(i) | EntityId::Landmark(i) => *i,
        }
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityId::Agent(i) => write!(f, "agent {}", i),
            EntityId::Landmark(i) => write!(f, "landmark {}", i),
        }
    }
}

/// Behavioural tag assigned to an agent by its scenario.
///
/// Set once at construction. Nothing downstream infers a role from the
/// agent's position in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Passive teammate that shares the team reward
    Dummy,

    /// The body being pushed (cooperative push) - large, non-colliding
    Adversary,

    /// Active pushing agent
    Pusher,

    /// Goal-seeking agent (goal navigation)
    Navigator,
}

impl Role {
    /// Returns the role name.
    pub fn name(&self) -> &'static str {
        match self {
            Role::Dummy => "dummy",
            Role::Adversary => "adversary",
            Role::Pusher => "pusher",
            Role::Navigator => "navigator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId::Agent(3).to_string(), "agent 3");
        assert_eq!(EntityId::Landmark(0).to_string(), "landmark 0");
    }

    #[test]
    fn test_entity_id_distinguishes_rosters() {
        assert_ne!(EntityId::Agent(1), EntityId::Landmark(1));
        assert_eq!(EntityId::Agent(1).index(), EntityId::Landmark(1).index());
    }
}
