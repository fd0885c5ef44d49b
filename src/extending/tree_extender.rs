//! `TreeExtender` (§4.5): one sample-steer-rewire iteration, generic over the
//! sampler strategy.
//!
//! Grounded on the teacher's main extension loop
//! (`examples/Priyanshu4-rrt/src/rrt.rs`, the body of `RRT::run`/`extend`),
//! generalized from the teacher's single fixed-strategy RRT into the spec's
//! two named instantiations ([`crate::extending::ExploreExtender`],
//! [`crate::extending::GoalExtender`]) sharing one generic implementation,
//! and following `examples/original_source/routing/pathfinding/extending/tree_extender.py`
//! step-for-step for the candidate-set and rewire semantics.

use crate::coordinate::{geo_dist_one, Coordinate, MultiCoordinate};
use crate::cost_map::CostMap;
use crate::environment::Environment;
use crate::error::PlannerResult;
use crate::graph::PlanningTree;
use crate::sampling::Sampler;

/// One sample → steer → rewire iteration against a shared [`PlanningTree`]
/// and [`CostMap`], parameterized by the sampler strategy `S`.
///
/// Holds the environment and vehicle by reference: per spec.md §5 the
/// environment is pure and re-entrant, and outlives any single planning run.
pub struct TreeExtender<'env, E: Environment, S: Sampler> {
    environment: &'env E,
    vehicle: &'env E::Vehicle,
    sampler: S,
}

impl<'env, E: Environment, S: Sampler> TreeExtender<'env, E, S> {
    pub fn new(environment: &'env E, vehicle: &'env E::Vehicle, sampler: S) -> Self {
        Self {
            environment,
            vehicle,
            sampler,
        }
    }

    /// Runs one extension step against `tree`/`cost_map`.
    ///
    /// Returns `Ok(true)` if the tree was modified (a node was added or at
    /// least one rewire occurred), `Ok(false)` if the step was a no-op — a
    /// useless sample, no safe candidate, or the steered point coinciding
    /// with an existing node (spec.md §9, "`nearest` on duplicate inserts":
    /// treated as a no-op rather than rewriting `cost[x_new]`). Only
    /// `EnvironmentFailure`/geometric errors propagate; a normal inability to
    /// extend is reported via the `bool`, not an `Err`.
    pub fn extend(&mut self, tree: &mut PlanningTree, cost_map: &mut CostMap) -> PlannerResult<bool> {
        // 1. Sample.
        let x = self.sampler.sample(1);

        // 2. Steer and find candidates.
        let x_nearest = tree.nearest(&x)?;
        let x_new_multi = tree.steer(&x_nearest, &x)?;
        let x_new = x_new_multi.get(0);

        if tree.contains(x_new) {
            // Steered exactly onto an existing node: no-op, cost untouched.
            return Ok(false);
        }

        let n = tree.node_count().saturating_sub(1);
        let (near_neighbors, source_indices) = tree.near(&x_new_multi, n)?;

        // Fallback: x_nearest[i] for every source index i with an empty
        // near-set, concatenated after the near-set itself (§4.5 step 2, §9
        // "near output layout").
        let fallback_indices: Vec<usize> = (0..x_new_multi.len())
            .filter(|i| !source_indices.contains(i))
            .collect();
        let fallback = x_nearest.select(&fallback_indices);
        let candidates = MultiCoordinate::concat(&[near_neighbors, fallback]);
        if candidates.is_empty() {
            return Ok(false);
        }

        // 3. Test safety to x_new.
        let x_new_repeated = MultiCoordinate::repeated(x_new, candidates.len());
        let forward_mask = self
            .environment
            .is_obstacle_free(&candidates, &x_new_repeated, self.vehicle)?;
        let safe_candidates = candidates.select_mask(&forward_mask);

        // 4. Choose best parent among the safe candidates, first wins on ties.
        let mut best: Option<(Coordinate, f64)> = None;
        for c in safe_candidates.iter() {
            let Some(cost_to_parent) = cost_map.get(*c) else {
                continue;
            };
            let total = cost_to_parent + geo_dist_one(*c, x_new);
            match best {
                Some((_, best_total)) if total >= best_total => {}
                _ => best = Some((*c, total)),
            }
        }

        let Some((parent, best_total)) = best else {
            return Ok(false);
        };
        let edge_cost = geo_dist_one(parent, x_new);
        tree.add_edge(parent, x_new, edge_cost)?;
        cost_map.set(x_new, best_total);

        // 5. Register the pre-steer sample, not the steered/inserted point —
        // matches the source's `self._sampler.register(x)` (the sampler
        // learns where it drew *from*, which may differ from x_new whenever
        // `steer` actually clips).
        self.sampler.register(x.get(0));

        // 6. Rewire. Recomputed independently of step 3's mask (§9, "Two
        // safety masks per iteration").
        let reverse_mask = self
            .environment
            .is_obstacle_free(&x_new_repeated, &candidates, self.vehicle)?;
        let rewire_candidates = candidates.select_mask(&reverse_mask);
        for r in rewire_candidates.iter() {
            let Some(current_cost) = cost_map.get(*r) else {
                continue;
            };
            let candidate_cost = best_total + geo_dist_one(x_new, *r);
            if candidate_cost < current_cost {
                if let Some(old_parent) = tree.parent(*r) {
                    tree.remove_edge(old_parent, *r)?;
                }
                tree.add_edge(x_new, *r, geo_dist_one(x_new, *r))?;
                cost_map.set(*r, candidate_cost);
            }
        }

        Ok(true)
    }
}
