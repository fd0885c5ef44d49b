//! The `Environment` collaborator (§6): answers whether straight segments are
//! collision-free for a given vehicle. This is the only capability the core
//! consumes from outside; everything about obstacles, maps, and the vehicle
//! itself is opaque to the planner.
//!
//! Shaped after the teacher's `ValidityChecker` trait
//! (`examples/Priyanshu4-rrt/src/collision.rs`), generalized from a single
//! point/edge check to the spec's vectorized, fallible query.

use crate::coordinate::MultiCoordinate;
use crate::error::PlannerResult;

/// A pure, re-entrant collaborator answering collision-free queries.
///
/// The core performs no caching of results and calls this many times per
/// iteration; implementations should be cheap or internally cached by the
/// caller, not by the planner.
pub trait Environment {
    /// The vehicle descriptor this environment's queries are parameterized
    /// on. The core never inspects it; it is passed through verbatim.
    type Vehicle;

    /// For each aligned pair `(x_from[i], x_to[i])`, whether the straight
    /// segment between them is collision-free for `vehicle`.
    ///
    /// `x_from` and `x_to` must have equal length. Any failure (e.g. a query
    /// outside the environment's coverage) should be reported as
    /// `PlannerError::EnvironmentFailure`, which aborts the in-progress
    /// planning iteration (spec.md §7).
    fn is_obstacle_free(
        &self,
        x_from: &MultiCoordinate,
        x_to: &MultiCoordinate,
        vehicle: &Self::Vehicle,
    ) -> PlannerResult<Vec<bool>>;
}
