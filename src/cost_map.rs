//! The cost map (§3): root-distance bookkeeping kept alongside the tree.
//!
//! Authoritative for rewiring decisions during extension, but allowed to
//! drift slightly under floating-point rounding and rewire cascades; it is
//! periodically resynchronized from the tree itself via
//! [`crate::graph::PlanningTree::shortest_path_lengths_from_root`] (§4.6).

use std::collections::HashMap;

use crate::coordinate::Coordinate;

/// `Coordinate -> cumulative root distance`, keyed by bit-exact value
/// identity (same key discipline as [`crate::graph::PlanningGraph`]).
#[derive(Debug, Clone, Default)]
pub struct CostMap {
    costs: HashMap<Coordinate, f64>,
}

impl CostMap {
    pub fn new() -> Self {
        Self {
            costs: HashMap::new(),
        }
    }

    pub fn get(&self, x: Coordinate) -> Option<f64> {
        self.costs.get(&x).copied()
    }

    pub fn set(&mut self, x: Coordinate, cost: f64) {
        self.costs.insert(x, cost);
    }

    pub fn contains(&self, x: Coordinate) -> bool {
        self.costs.contains_key(&x)
    }

    /// Replace the entire map, as the §4.6 Dijkstra resync does.
    pub fn replace(&mut self, costs: HashMap<Coordinate, f64>) {
        self.costs = costs;
    }
}
