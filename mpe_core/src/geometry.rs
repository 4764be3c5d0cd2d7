//! Geometry and collision helpers shared by the scenarios.

use mpe_env::{Entity, ScenarioContext, Vec2};

/// Euclidean distance between two points.
pub fn distance(a: &Vec2, b: &Vec2) -> f64 {
    (a - b).norm()
}

/// True if the discs of `a` and `b` overlap (strictly closer than the sum of radii).
///
/// Ignores the `collide` flags; callers decide which entities take part.
pub fn overlaps(a: &dyn Entity, b: &dyn Entity) -> bool {
    distance(&a.position(), &b.position()) < a.size() + b.size()
}

/// A unit direction on the rim of a disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RimDirection {
    pub cos: f64,
    pub sin: f64,
}

impl RimDirection {
    /// Builds a direction from its cosine and the sign of its sine.
    pub fn new(cos: f64, negative_sin: bool) -> Self {
        let magnitude = (1.0 - cos * cos).max(0.0).sqrt();
        let sin = if negative_sin { -magnitude } else { magnitude };
        Self { cos, sin }
    }

    /// Draws a direction: cosine uniform in `[-1, 1)`, then a sign.
    ///
    /// The sign comes from an integer draw over `[-1, 1)`, i.e. `{-1, 0}`;
    /// `-1` selects the lower half plane and `0` the upper one.
    pub fn sample(ctx: &mut dyn ScenarioContext) -> Self {
        let cos = ctx.uniform(-1.0, 1.0);
        let operation = ctx.randint(-1, 1);
        Self::new(cos, operation == -1)
    }

    /// Point at `distance` from `center`, opposite this direction.
    pub fn point_from(&self, center: &Vec2, distance: f64) -> Vec2 {
        center - distance * Vec2::new(self.cos, self.sin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedContext;
    use approx::assert_relative_eq;
    use mpe_env::{Agent, Role};

    fn agent_at(index: usize, x: f64, y: f64, size: f64) -> Agent {
        let mut agent = Agent::new(index, Role::Navigator, size, 2);
        agent.place(Vec2::new(x, y));
        agent
    }

    #[test]
    fn test_distance() {
        assert_relative_eq!(distance(&Vec2::new(0.0, 0.0), &Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(&Vec2::new(1.0, 1.0), &Vec2::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = agent_at(0, 0.0, 0.0, 0.15);
        let b = agent_at(1, 0.0, 0.25, 0.15);
        assert!(overlaps(&a, &b));

        // Exactly touching is not an overlap
        let c = agent_at(2, 0.0, 0.5, 0.25);
        let d = agent_at(3, 0.0, 0.0, 0.25);
        assert!(!overlaps(&c, &d));
    }

    #[test]
    fn test_rim_direction_sign() {
        let up = RimDirection::new(0.6, false);
        assert_relative_eq!(up.sin, 0.8, epsilon = 1e-12);

        let down = RimDirection::new(0.6, true);
        assert_relative_eq!(down.sin, -0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_rim_sample_maps_zero_to_upper_half() {
        let mut ctx = ScriptedContext::new(vec![0.0, 0.0], vec![0, -1]);

        let first = RimDirection::sample(&mut ctx);
        assert_relative_eq!(first.sin, 1.0);

        let second = RimDirection::sample(&mut ctx);
        assert_relative_eq!(second.sin, -1.0);
    }

    #[test]
    fn test_point_from_lies_on_rim() {
        let center = Vec2::new(0.3, -0.2);
        let dir = RimDirection::new(-0.25, true);
        let point = dir.point_from(&center, 0.4);
        assert_relative_eq!(distance(&point, &center), 0.4, epsilon = 1e-12);
    }
}
