//! `GridSampler` (§4.4.1): biases sampling away from already-explored grid
//! cells, spanning a bounding box around the source and target points.
//!
//! Grounded directly on
//! `examples/original_source/routing/pathfinding/sampling/grid_sampler.py`,
//! translated from numpy's weighted-choice-over-a-flattened-grid into Rust's
//! `rand::distributions::WeightedIndex`/`Uniform` (the same distribution
//! types the teacher already uses in `examples/Priyanshu4-rrt/src/sampling.rs`
//! for its `UniformDistribution`/`GoalBiasedUniformDistribution`), and onto
//! the crate's own deterministic [`crate::rng::PlannerRng`] in place of the
//! teacher's ambient `rand::thread_rng()`.

use rand::distributions::{Distribution, Uniform, WeightedIndex};

use crate::coordinate::{Coordinate, MultiCoordinate};
use crate::rng::PlannerRng;
use crate::sampling::Sampler;

/// Default grid side length `G` (§3).
pub const DEFAULT_GRID_SIZE: usize = 50;
/// Default bounding-box boundary buffer `B`, in degrees (§3).
pub const DEFAULT_BOUNDARY_BUFFER: f64 = 0.01;

/// Biased sampler over a weighted grid spanning `source` and `target`.
pub struct GridSampler {
    grid_size: usize,
    south: f64,
    north: f64,
    west: f64,
    east: f64,
    /// Row-major `grid_size x grid_size` weights, initialized to 1.0.
    weights: Vec<f64>,
    rng: PlannerRng,
}

impl GridSampler {
    pub fn new(source: Coordinate, target: Coordinate, seed: Option<u64>) -> Self {
        Self::with_params(
            source,
            target,
            DEFAULT_GRID_SIZE,
            DEFAULT_BOUNDARY_BUFFER,
            seed,
        )
    }

    pub fn with_params(
        source: Coordinate,
        target: Coordinate,
        grid_size: usize,
        boundary_buffer: f64,
        seed: Option<u64>,
    ) -> Self {
        let south = source.lat.min(target.lat) - boundary_buffer;
        let north = source.lat.max(target.lat) + boundary_buffer;
        let west = source.lon.min(target.lon) - boundary_buffer;
        let east = source.lon.max(target.lon) + boundary_buffer;
        Self {
            grid_size,
            south,
            north,
            west,
            east,
            weights: vec![1.0; grid_size * grid_size],
            rng: PlannerRng::new(seed),
        }
    }

    fn cell_weight_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        &mut self.weights[row * self.grid_size + col]
    }

    fn lat_width(&self) -> f64 {
        (self.north - self.south) / self.grid_size as f64
    }

    fn lon_width(&self) -> f64 {
        (self.east - self.west) / self.grid_size as f64
    }
}

impl Sampler for GridSampler {
    fn sample(&mut self, k: usize) -> MultiCoordinate {
        if k == 0 {
            return MultiCoordinate::new(Vec::new());
        }

        // p ∝ 1 / weight, computed once for the whole batch (the weights
        // updated by this batch's own draws do not affect the other draws
        // in the same call — matches the source computing `p` up front).
        let inverse: Vec<f64> = self.weights.iter().map(|w| 1.0 / w).collect();
        let dist = WeightedIndex::new(&inverse).expect("weights are always positive");

        let lat_width = self.lat_width();
        let lon_width = self.lon_width();
        let lat_jitter = Uniform::new(0.0, lat_width.max(f64::MIN_POSITIVE));
        let lon_jitter = Uniform::new(0.0, lon_width.max(f64::MIN_POSITIVE));

        let mut out = Vec::with_capacity(k);
        let mut drawn = Vec::with_capacity(k);
        for _ in 0..k {
            let flat = dist.sample(self.rng.inner());
            let row = flat / self.grid_size;
            let col = flat % self.grid_size;
            drawn.push((row, col));

            let cell_lat = self.south + lat_width * row as f64;
            let cell_lon = self.west + lon_width * col as f64;
            let lat = cell_lat + lat_jitter.sample(self.rng.inner());
            let lon = cell_lon + lon_jitter.sample(self.rng.inner());
            out.push(Coordinate::new(lat, lon));
        }

        for (row, col) in drawn {
            *self.cell_weight_mut(row, col) += 1.0;
        }

        MultiCoordinate::new(out)
    }

    /// Increments the weight of the cell containing `x_new`.
    ///
    /// Preserves an inconsistency present in the source
    /// (`examples/original_source/routing/pathfinding/sampling/grid_sampler.py`,
    /// `register`): it divides by `grid_size` directly rather than by the
    /// cell width `(north - south) / grid_size` that `sample` uses, so the
    /// computed cell is not generally the one `x_new` actually falls in. The
    /// spec (§9, "Open question — register() units") directs against
    /// silently fixing this, so the observable behavior — including the
    /// bias it introduces — is reproduced exactly. The index is clamped into
    /// bounds, which the source's unchecked numpy indexing doesn't need but
    /// Rust's array indexing does.
    fn register(&mut self, x_new: Coordinate) {
        let row = ((x_new.lat - self.south) / self.grid_size as f64) as isize;
        let col = ((x_new.lon - self.west) / self.grid_size as f64) as isize;
        let row = row.clamp(0, self.grid_size as isize - 1) as usize;
        let col = col.clamp(0, self.grid_size as isize - 1) as usize;
        *self.cell_weight_mut(row, col) += 1.0;
    }
}
