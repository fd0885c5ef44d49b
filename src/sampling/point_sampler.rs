//! `PointSampler` (§4.4.2): deterministically yields a fixed point, used to
//! inject the goal into the tree at the goal-attempt cadence.
//!
//! Mirrors the teacher's goal-biased sampling idea
//! (`examples/Priyanshu4-rrt/src/sampling.rs`'s `GoalBiasedUniformDistribution`)
//! stripped down to always returning the goal, matching
//! `examples/original_source/routing/pathfinding/sampling/node_sampler.py`.

use crate::coordinate::{Coordinate, MultiCoordinate};
use crate::sampling::Sampler;

/// Wraps a single fixed point and always returns it.
pub struct PointSampler {
    point: Coordinate,
}

impl PointSampler {
    pub fn new(point: Coordinate) -> Self {
        Self { point }
    }
}

impl Sampler for PointSampler {
    fn sample(&mut self, k: usize) -> MultiCoordinate {
        MultiCoordinate::repeated(self.point, k)
    }

    fn register(&mut self, _x_new: Coordinate) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_returns_the_fixed_point() {
        let goal = Coordinate::new(1.0, 2.0);
        let mut s = PointSampler::new(goal);
        let out = s.sample(3);
        assert_eq!(out.len(), 3);
        for p in out.iter() {
            assert_eq!(*p, goal);
        }
    }
}
