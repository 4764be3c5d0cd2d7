//! World - the roster plus episode counters.

use crate::entity::{Agent, Landmark};
use crate::error::ScenarioError;
use crate::types::{Rgb, Role};
use serde::{Deserialize, Serialize};

/// Physical dimensionality.
pub const DIM_P: usize = 2;

/// Communication channel width.
pub const DIM_C: usize = 2;

const ADVERSARY_COLOR: Rgb = [0.85, 0.35, 0.35];
const DUMMY_COLOR: Rgb = [0.35, 0.85, 0.35];
const AGENT_COLOR: Rgb = [0.35, 0.35, 0.85];
const LANDMARK_COLOR: Rgb = [0.25, 0.25, 0.25];

/// Goal-visibility curriculum.
///
/// `step_unknown` is the number of steps into an episode during which the
/// actor still sees which landmark is the goal. With `unknown_decay` on,
/// reset shrinks it by one every `decay_episode` resets, down to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    /// Current visibility horizon in steps
    pub step_unknown: u64,

    /// Enables the decay schedule
    pub unknown_decay: bool,

    /// Resets between decrements
    pub decay_episode: u64,
}

impl Default for Curriculum {
    fn default() -> Self {
        Self {
            step_unknown: 1,
            unknown_decay: false,
            decay_episode: 1,
        }
    }
}

impl Curriculum {
    /// Applies one reset boundary; returns true if the horizon shrank.
    ///
    /// `num_reset` is the reset count *after* the current reset.
    pub fn advance(&mut self, num_reset: u64) -> bool {
        if self.unknown_decay
            && self.step_unknown > 1
            && self.decay_episode > 0
            && num_reset % self.decay_episode == 0
        {
            self.step_unknown -= 1;
            true
        } else {
            false
        }
    }

    /// True while the goal indicator is still shown to the actor.
    pub fn goal_visible(&self, world_step: u64) -> bool {
        world_step <= self.step_unknown
    }
}

/// The world context handed to scenario controllers.
///
/// Owned by the driver for its whole lifetime. Controllers mutate the
/// roster, `select_goal`, the counters and the curriculum only from
/// `reset`; everything else reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Agents, in roster order
    pub agents: Vec<Agent>,

    /// Landmarks, in roster order
    pub landmarks: Vec<Landmark>,

    /// Physical dimensionality
    pub dim_p: usize,

    /// Communication channel width
    pub dim_c: usize,

    /// All agents receive the same reward
    pub collaborative: bool,

    /// Index of the goal landmark for this episode
    pub select_goal: usize,

    /// Steps since the last reset
    pub world_step: u64,

    /// Resets since construction; never zeroed
    pub num_reset: u64,

    /// Goal-visibility schedule
    pub curriculum: Curriculum,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self {
            agents: Vec::new(),
            landmarks: Vec::new(),
            dim_p: DIM_P,
            dim_c: DIM_C,
            collaborative: false,
            select_goal: 0,
            world_step: 0,
            num_reset: 0,
            curriculum: Curriculum::default(),
        }
    }

    /// Number of agents in the roster.
    pub fn num_agents(&self) -> usize {
        self.agents.len()
    }

    /// Number of landmarks in the roster.
    pub fn num_landmarks(&self) -> usize {
        self.landmarks.len()
    }

    /// Agents with the given role, in roster order.
    pub fn agents_with_role(&self, role: Role) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(move |a| a.role() == role)
    }

    /// Agents that are not adversaries, in roster order.
    pub fn non_adversaries(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(|a| !a.is_adversary())
    }

    /// Looks up a landmark by index.
    pub fn landmark(&self, index: usize) -> Result<&Landmark, ScenarioError> {
        self.landmarks.get(index).ok_or(ScenarioError::UnknownLandmark {
            index,
            count: self.landmarks.len(),
        })
    }

    /// Returns the landmark `agent` is pursuing.
    pub fn goal_of(&self, agent: &Agent) -> Result<&Landmark, ScenarioError> {
        let index = agent
            .goal
            .ok_or(ScenarioError::GoalUnbound { agent: agent.index })?;
        self.landmark(index)
    }

    /// Advances the in-episode step counter. Called by the driver once per step.
    pub fn advance_step(&mut self) {
        self.world_step += 1;
    }

    /// Colours agents by role.
    pub fn assign_agent_colors(&mut self) {
        for agent in &mut self.agents {
            agent.color = match agent.role() {
                Role::Adversary => ADVERSARY_COLOR,
                Role::Dummy => DUMMY_COLOR,
                Role::Pusher | Role::Navigator => AGENT_COLOR,
            };
        }
    }

    /// Colours all landmarks grey.
    pub fn assign_landmark_colors(&mut self) {
        for landmark in &mut self.landmarks {
            landmark.color = LANDMARK_COLOR;
        }
    }
}
