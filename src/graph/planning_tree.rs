//! `PlanningTree` (§4.3): a `PlanningGraph` specialized to maintain the tree
//! invariant — every non-root node has exactly one parent — plus the
//! root-distance resync used before goal-attach attempts (§4.6).
//!
//! The teacher's `RRT` (`examples/Priyanshu4-rrt/src/rrt.rs`) already
//! represents its tree as a flat `Vec<Node>` with a `parent: Option<usize>`
//! field and reconstructs paths by walking that chain (`get_path`); this
//! keeps that shape and generalizes it to support rewiring (removing and
//! replacing a parent edge), which the teacher's plain RRT never needed.
//! Per spec.md §9 ("Parent removal in rewire"), representing parentage as a
//! flat array indexed by node id enforces the single-parent invariant
//! structurally — there is no way to attach a second parent without first
//! clearing the slot.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::coordinate::{Coordinate, MultiCoordinate};
use crate::error::{PlannerError, PlannerResult};
use crate::graph::planning_graph::PlanningGraph;

/// Specialization of [`PlanningGraph`] enforcing the single-parent tree
/// invariant.
#[derive(Debug, Clone)]
pub struct PlanningTree {
    graph: PlanningGraph,
    parent: Vec<Option<usize>>,
    edge_dist: Vec<Option<f64>>,
    root: Option<usize>,
}

impl PlanningTree {
    pub fn new(eta: f64, gamma: f64) -> Self {
        Self {
            graph: PlanningGraph::new(eta, gamma),
            parent: Vec::new(),
            edge_dist: Vec::new(),
            root: None,
        }
    }

    pub fn eta(&self) -> f64 {
        self.graph.eta()
    }

    pub fn gamma(&self) -> f64 {
        self.graph.gamma()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn node_at(&self, i: usize) -> Coordinate {
        self.graph.node_at(i)
    }

    pub fn contains(&self, x: Coordinate) -> bool {
        self.graph.contains(x)
    }

    pub fn nearest(&self, x: &MultiCoordinate) -> PlannerResult<MultiCoordinate> {
        self.graph.nearest(x)
    }

    pub fn steer(
        &self,
        x_from: &MultiCoordinate,
        x_towards: &MultiCoordinate,
    ) -> PlannerResult<MultiCoordinate> {
        self.graph.steer(x_from, x_towards)
    }

    pub fn near(&self, x: &MultiCoordinate, n: usize) -> PlannerResult<(MultiCoordinate, Vec<usize>)> {
        self.graph.near(x, n)
    }

    /// Inserts the root of the tree. Must be called exactly once, before any
    /// other mutation (§4.6 step 1).
    pub fn insert_root(&mut self, x: Coordinate) {
        let i = self.graph.insert_node(x);
        self.ensure_slot(i);
        self.root = Some(i);
    }

    fn ensure_slot(&mut self, i: usize) {
        if self.parent.len() <= i {
            self.parent.resize(i + 1, None);
            self.edge_dist.resize(i + 1, None);
        }
    }

    /// Adds the directed edge `parent -> child` with weight `dist`, inserting
    /// `child` into the graph if it is new.
    ///
    /// Errors with `TreeInvariantViolation` if `child` already has a parent
    /// — rewiring must call [`Self::remove_edge`] first (spec.md §4.3, §9).
    pub fn add_edge(&mut self, parent: Coordinate, child: Coordinate, dist: f64) -> PlannerResult<()> {
        let parent_idx = self
            .graph
            .index_of(parent)
            .ok_or_else(|| PlannerError::InvalidInput(format!("unknown parent node {parent:?}")))?;
        let child_idx = self.graph.insert_node(child);
        self.ensure_slot(child_idx);
        self.ensure_slot(parent_idx);

        if Some(child_idx) != self.root && self.parent[child_idx].is_some() {
            return Err(PlannerError::TreeInvariantViolation(child));
        }

        self.parent[child_idx] = Some(parent_idx);
        self.edge_dist[child_idx] = Some(dist);
        Ok(())
    }

    /// Removes the edge `parent -> child`, clearing `child`'s parent slot so
    /// it can be rewired to a new parent.
    pub fn remove_edge(&mut self, parent: Coordinate, child: Coordinate) -> PlannerResult<()> {
        let parent_idx = self
            .graph
            .index_of(parent)
            .ok_or_else(|| PlannerError::InvalidInput(format!("unknown parent node {parent:?}")))?;
        let child_idx = self
            .graph
            .index_of(child)
            .ok_or_else(|| PlannerError::InvalidInput(format!("unknown child node {child:?}")))?;
        if self.parent[child_idx] != Some(parent_idx) {
            return Err(PlannerError::InvalidInput(format!(
                "{parent:?} is not the current parent of {child:?}"
            )));
        }
        self.parent[child_idx] = None;
        self.edge_dist[child_idx] = None;
        Ok(())
    }

    /// The unique predecessor of `x`, or `None` for the root or for an
    /// unknown `x` (§4.3).
    pub fn parent(&self, x: Coordinate) -> Option<Coordinate> {
        let idx = self.graph.index_of(x)?;
        let parent_idx = *self.parent.get(idx)?;
        parent_idx.map(|p| self.graph.node_at(p))
    }

    /// Single-source shortest-path lengths from the root, over the tree's
    /// current edges, treating `dist` as non-negative edge weights (§4.6).
    ///
    /// Implemented as a real Dijkstra (not a plain parent-chain walk) so the
    /// resync is honest about recomputing from the graph's edges rather than
    /// assuming the incrementally-maintained cost map was already correct —
    /// which is the entire point of the resync (spec.md §4.6 rationale).
    pub fn shortest_path_lengths_from_root(&self) -> PlannerResult<HashMap<Coordinate, f64>> {
        let root = self.root.ok_or(PlannerError::EmptyGraph)?;
        let n = self.graph.node_count();

        let mut children: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
        for (v, p) in self.parent.iter().enumerate() {
            if let Some(p) = p {
                children[*p].push((v, self.edge_dist[v].expect("edge_dist set alongside parent")));
            }
        }

        let mut dist = vec![f64::INFINITY; n];
        dist[root] = 0.0;
        let mut heap = BinaryHeap::new();
        heap.push(MinCost(0.0, root));

        while let Some(MinCost(cost, node)) = heap.pop() {
            if cost > dist[node] {
                continue;
            }
            for &(next, weight) in &children[node] {
                let candidate = cost + weight;
                if candidate < dist[next] {
                    dist[next] = candidate;
                    heap.push(MinCost(candidate, next));
                }
            }
        }

        let mut out = HashMap::with_capacity(n);
        for (i, d) in dist.into_iter().enumerate() {
            if d.is_finite() {
                out.insert(self.graph.node_at(i), d);
            }
        }
        Ok(out)
    }

    /// The sequence of Coordinates along the unique root -> `to` path,
    /// following parent pointers, or `None` if `to` is not in the tree.
    pub fn path_from_root(&self, to: Coordinate) -> Option<MultiCoordinate> {
        let mut idx = self.graph.index_of(to)?;
        let mut chain = vec![self.graph.node_at(idx)];
        while let Some(p) = self.parent[idx] {
            chain.push(self.graph.node_at(p));
            idx = p;
        }
        chain.reverse();
        Some(MultiCoordinate::new(chain))
    }
}

/// Min-heap ordering for Dijkstra: smallest cost first, tie-broken by node
/// index for determinism (P8).
#[derive(Debug, Clone, Copy, PartialEq)]
struct MinCost(f64, usize);

impl Eq for MinCost {}

impl Ord for MinCost {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .partial_cmp(&self.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.1.cmp(&self.1))
    }
}

impl PartialOrd for MinCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon)
    }

    #[test]
    fn rejects_second_parent_without_removal() {
        let mut t = PlanningTree::new(10.0, 10.0);
        t.insert_root(c(0.0, 0.0));
        t.add_edge(c(0.0, 0.0), c(0.0, 1.0), 1.0).unwrap();
        let err = t.add_edge(c(0.0, 2.0), c(0.0, 1.0), 2.0);
        assert!(matches!(err, Err(PlannerError::TreeInvariantViolation(_))));
    }

    #[test]
    fn remove_then_readd_rewires_successfully() {
        let mut t = PlanningTree::new(10.0, 10.0);
        t.insert_root(c(0.0, 0.0));
        t.add_edge(c(0.0, 0.0), c(0.0, 1.0), 1.0).unwrap();
        t.add_edge(c(0.0, 0.0), c(0.0, 2.0), 2.0).unwrap();
        t.remove_edge(c(0.0, 0.0), c(0.0, 1.0)).unwrap();
        t.add_edge(c(0.0, 2.0), c(0.0, 1.0), 1.0).unwrap();
        assert_eq!(t.parent(c(0.0, 1.0)), Some(c(0.0, 2.0)));
    }

    #[test]
    fn shortest_path_lengths_match_path_sums() {
        let mut t = PlanningTree::new(10.0, 10.0);
        t.insert_root(c(0.0, 0.0));
        t.add_edge(c(0.0, 0.0), c(0.0, 1.0), 1.0).unwrap();
        t.add_edge(c(0.0, 1.0), c(0.0, 2.0), 1.0).unwrap();
        let costs = t.shortest_path_lengths_from_root().unwrap();
        assert_eq!(costs.get(&c(0.0, 0.0)), Some(&0.0));
        assert_eq!(costs.get(&c(0.0, 1.0)), Some(&1.0));
        assert_eq!(costs.get(&c(0.0, 2.0)), Some(&2.0));
    }

    #[test]
    fn path_from_root_walks_parent_chain_in_order() {
        let mut t = PlanningTree::new(10.0, 10.0);
        t.insert_root(c(0.0, 0.0));
        t.add_edge(c(0.0, 0.0), c(0.0, 1.0), 1.0).unwrap();
        t.add_edge(c(0.0, 1.0), c(0.0, 2.0), 1.0).unwrap();
        let path = t.path_from_root(c(0.0, 2.0)).unwrap();
        assert_eq!(path.as_slice(), &[c(0.0, 0.0), c(0.0, 1.0), c(0.0, 2.0)]);
    }

    #[test]
    fn parent_of_root_and_unknown_is_none() {
        let mut t = PlanningTree::new(10.0, 10.0);
        t.insert_root(c(0.0, 0.0));
        assert_eq!(t.parent(c(0.0, 0.0)), None);
        assert_eq!(t.parent(c(5.0, 5.0)), None);
    }
}
