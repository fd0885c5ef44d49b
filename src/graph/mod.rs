//! The graph layer (§4.2, §4.3): `PlanningGraph` and its tree specialization.

pub mod planning_graph;
pub mod planning_tree;

pub use planning_graph::PlanningGraph;
pub use planning_tree::PlanningTree;
