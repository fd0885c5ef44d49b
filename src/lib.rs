//! An incremental, sampling-based, asymptotically-optimal motion planner
//! (RRT*) over two-dimensional geographic coordinates.
//!
//! The crate builds a tree of reachable configurations rooted at a start
//! point, rewires it to improve path cost as new samples arrive, and
//! periodically attempts to attach a goal point so the current best
//! start-to-goal path can be extracted once the planning budget is spent.
//! Collision checking, vehicle kinematics, and everything outside the
//! sampling/tree/rewiring core are left to an external [`environment::Environment`]
//! implementation.

pub mod coordinate;
pub mod cost_map;
pub mod environment;
pub mod error;
pub mod extending;
pub mod graph;
pub mod planner;
pub mod rng;
pub mod sampling;

pub use coordinate::{Coordinate, MultiCoordinate, Pairing};
pub use cost_map::CostMap;
pub use environment::Environment;
pub use error::{PlannerError, PlannerResult};
pub use extending::{ExploreExtender, GoalExtender, TreeExtender};
pub use graph::{PlanningGraph, PlanningTree};
pub use planner::{Planner, PlannerConfig};
pub use rng::PlannerRng;
pub use sampling::{GridSampler, PointSampler, Sampler};
