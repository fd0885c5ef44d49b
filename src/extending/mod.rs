//! The two named `TreeExtender` instantiations (§2, §4.5).

pub mod tree_extender;

pub use tree_extender::TreeExtender;

use crate::environment::Environment;
use crate::sampling::{GridSampler, PointSampler};

/// Extends the tree with biased exploratory samples.
pub type ExploreExtender<'env, E> = TreeExtender<'env, E, GridSampler>;

/// Extends the tree by repeatedly attempting to attach a fixed goal point.
pub type GoalExtender<'env, E> = TreeExtender<'env, E, PointSampler>;
