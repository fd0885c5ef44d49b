//! `Planner` (§4.6): the driver loop tying tree, cost map, and the two
//! extenders together into a single `plan()` entry point.
//!
//! Grounded on the teacher's top-level `RRT::run` driver
//! (`examples/Priyanshu4-rrt/src/rrt.rs`) and `examples/rossng-oxmpl`'s
//! `RRTStar::run` goal-biasing cadence, but following
//! `examples/original_source/routing/pathfinding/planner.py` for the exact
//! interleaving of explore/goal extension and the resync-before-goal-attempt
//! schedule.

use crate::coordinate::Coordinate;
use crate::cost_map::CostMap;
use crate::environment::Environment;
use crate::error::{PlannerError, PlannerResult};
use crate::extending::{ExploreExtender, GoalExtender};
use crate::graph::PlanningTree;
use crate::sampling::{GridSampler, PointSampler};

/// Default cadence (in iterations) at which a goal-attach attempt is made
/// (§4.6, §9 "Goal-insertion cadence").
pub const DEFAULT_GOAL_ATTEMPT_INTERVAL: usize = 30;

/// Tunable parameters for a single `plan()` call (§6, "Tunable parameters").
#[derive(Debug, Clone, Copy)]
pub struct PlannerConfig {
    /// Steering coefficient η.
    pub eta: f64,
    /// Radius constant γ.
    pub gamma: f64,
    /// Cadence, in iterations, of goal-attach attempts.
    pub goal_attempt_interval: usize,
    /// GridSampler grid side length.
    pub grid_size: usize,
    /// GridSampler bounding-box boundary buffer, in degrees.
    pub boundary_buffer: f64,
    /// RNG seed for the GridSampler; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl PlannerConfig {
    pub fn new(eta: f64, gamma: f64) -> Self {
        Self {
            eta,
            gamma,
            goal_attempt_interval: DEFAULT_GOAL_ATTEMPT_INTERVAL,
            grid_size: crate::sampling::grid_sampler::DEFAULT_GRID_SIZE,
            boundary_buffer: crate::sampling::grid_sampler::DEFAULT_BOUNDARY_BUFFER,
            seed: None,
        }
    }

    pub fn with_goal_attempt_interval(mut self, interval: usize) -> Self {
        self.goal_attempt_interval = interval;
        self
    }

    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_boundary_buffer(mut self, boundary_buffer: f64) -> Self {
        self.boundary_buffer = boundary_buffer;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Runs a single-query RRT*-style plan against `environment`/`vehicle`.
pub struct Planner<'env, E: Environment> {
    environment: &'env E,
    vehicle: &'env E::Vehicle,
    config: PlannerConfig,
}

impl<'env, E: Environment> Planner<'env, E> {
    pub fn new(environment: &'env E, vehicle: &'env E::Vehicle, config: PlannerConfig) -> Self {
        Self {
            environment,
            vehicle,
            config,
        }
    }

    /// Plans a path from `x_init` to `x_goal` over `iterations` extension
    /// attempts (§4.6). Returns the shortest attached path, or `None` if the
    /// goal was never connected.
    pub fn plan(
        &self,
        x_init: Coordinate,
        x_goal: Coordinate,
        iterations: usize,
    ) -> PlannerResult<Option<Vec<Coordinate>>> {
        if x_init == x_goal {
            return Err(PlannerError::InvalidInput(
                "x_init must not equal x_goal".to_string(),
            ));
        }
        if !x_init.is_finite() || !x_goal.is_finite() {
            return Err(PlannerError::InvalidInput(
                "x_init and x_goal must be finite".to_string(),
            ));
        }
        if iterations == 0 {
            return Err(PlannerError::InvalidInput(
                "iterations must be positive".to_string(),
            ));
        }

        let mut tree = PlanningTree::new(self.config.eta, self.config.gamma);
        let mut cost_map = CostMap::new();
        tree.insert_root(x_init);
        cost_map.set(x_init, 0.0);

        let grid_sampler = GridSampler::with_params(
            x_init,
            x_goal,
            self.config.grid_size,
            self.config.boundary_buffer,
            self.config.seed,
        );
        let mut explore_extender: ExploreExtender<'_, E> =
            ExploreExtender::new(self.environment, self.vehicle, grid_sampler);
        let point_sampler = PointSampler::new(x_goal);
        let mut goal_extender: GoalExtender<'_, E> =
            GoalExtender::new(self.environment, self.vehicle, point_sampler);

        let interval = self.config.goal_attempt_interval.max(1);
        for i in 0..iterations {
            if i % interval != 0 {
                explore_extender.extend(&mut tree, &mut cost_map)?;
            } else {
                let resynced = tree.shortest_path_lengths_from_root()?;
                cost_map.replace(resynced);
                if !tree.contains(x_goal) {
                    goal_extender.extend(&mut tree, &mut cost_map)?;
                }
            }
        }

        if tree.contains(x_init) && tree.contains(x_goal) {
            Ok(tree.path_from_root(x_goal).map(|p| p.as_slice().to_vec()))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFree;

    impl Environment for AlwaysFree {
        type Vehicle = ();

        fn is_obstacle_free(
            &self,
            x_from: &crate::coordinate::MultiCoordinate,
            _x_to: &crate::coordinate::MultiCoordinate,
            _vehicle: &(),
        ) -> PlannerResult<Vec<bool>> {
            Ok(vec![true; x_from.len()])
        }
    }

    struct BlocksGoal;

    impl Environment for BlocksGoal {
        type Vehicle = ();

        fn is_obstacle_free(
            &self,
            x_from: &crate::coordinate::MultiCoordinate,
            x_to: &crate::coordinate::MultiCoordinate,
            _vehicle: &(),
        ) -> PlannerResult<Vec<bool>> {
            let goal = Coordinate::new(0.0, 1.0);
            Ok(x_from
                .iter()
                .zip(x_to.iter())
                .map(|(a, b)| *a != goal && *b != goal)
                .collect())
        }
    }

    #[test]
    fn rejects_equal_start_and_goal() {
        let env = AlwaysFree;
        let planner = Planner::new(&env, &(), PlannerConfig::new(1.0, 1.0));
        let result = planner.plan(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.0), 10);
        assert!(matches!(result, Err(PlannerError::InvalidInput(_))));
    }

    #[test]
    fn rejects_zero_iterations() {
        let env = AlwaysFree;
        let planner = Planner::new(&env, &(), PlannerConfig::new(1.0, 1.0));
        let result = planner.plan(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0), 0);
        assert!(matches!(result, Err(PlannerError::InvalidInput(_))));
    }

    #[test]
    fn single_iteration_attaches_goal_directly_s1() {
        let env = AlwaysFree;
        let config = PlannerConfig::new(10.0, 10.0)
            .with_goal_attempt_interval(1)
            .with_seed(1);
        let planner = Planner::new(&env, &(), config);
        let start = Coordinate::new(0.0, 0.0);
        let goal = Coordinate::new(0.0, 1.0);
        let path = planner.plan(start, goal, 1).unwrap().expect("goal attached");
        assert_eq!(path, vec![start, goal]);
    }

    #[test]
    fn unreachable_goal_returns_none_s2() {
        let env = BlocksGoal;
        let config = PlannerConfig::new(10.0, 10.0)
            .with_goal_attempt_interval(1)
            .with_seed(2);
        let planner = Planner::new(&env, &(), config);
        let start = Coordinate::new(0.0, 0.0);
        let goal = Coordinate::new(0.0, 1.0);
        let path = planner.plan(start, goal, 50).unwrap();
        assert!(path.is_none());
    }
}
