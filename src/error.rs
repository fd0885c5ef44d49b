//! Crate-wide error taxonomy.
//!
//! Kept deliberately small and closed (four variants), matching the failure
//! modes named in the planning core's contract: bad caller input, querying
//! an empty graph, a failing environment collaborator, and a tree-invariant
//! bug that should never be reachable through the public API.

use thiserror::Error;

use crate::coordinate::Coordinate;

/// Errors surfaced by the planning core.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// The start equals the goal, a coordinate is non-finite, the iteration
    /// count is non-positive, or two multi-coordinates that must be aligned
    /// have different lengths.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// `nearest`/`near` was invoked on a graph with no nodes.
    #[error("operation requires at least one node in the graph")]
    EmptyGraph,

    /// The environment's obstacle-free query failed.
    #[error("environment query failed: {0}")]
    EnvironmentFailure(String),

    /// An attempt was made to give a non-root node a second parent without
    /// first removing its existing parent edge.
    #[error("node {0:?} already has a parent; remove the existing edge before rewiring")]
    TreeInvariantViolation(Coordinate),
}

/// Shorthand result type used throughout the crate.
pub type PlannerResult<T> = Result<T, PlannerError>;
