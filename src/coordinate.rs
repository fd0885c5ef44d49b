//! `Coordinate` and `MultiCoordinate`: the planning core's node identity and
//! geometric payload.
//!
//! This replaces the teacher's generic `Point<F, N>` (`examples/Priyanshu4-rrt/src/point.rs`)
//! with the spec's fixed 2D geographic point. Genericity over the float type
//! and dimension count buys nothing here — every operation the core performs
//! (steering, radius rules, dictionary-keyed costs) is defined in terms of a
//! (lat, lon) pair in degrees — so `num-traits`' `Float` abstraction, which
//! the teacher pulled in for exactly that genericity, is dropped (see
//! DESIGN.md).

use std::hash::{Hash, Hasher};

use crate::error::{PlannerError, PlannerResult};

/// Mean Earth radius in kilometers, used by [`geo_dist`]'s haversine formula.
const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A point on the globe, (lat, lon) in degrees.
///
/// Equality is bit-exact (`to_bits` comparison), not approximate: a node's
/// identity in [`crate::graph::PlanningGraph`] is the exact value produced at
/// insertion, and must never be recomputed or rounded before a lookup (see
/// spec.md §9, "Coordinate as mutable map key").
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True iff both components are finite (not NaN or infinite).
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    fn key(&self) -> (u64, u64) {
        (self.lat.to_bits(), self.lon.to_bits())
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Squared-Euclidean distance pairing mode for [`euclid_dist_squared`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    /// All-pairs: result is a `len(a) x len(b)` matrix.
    Pairwise,
    /// Element-aligned: `len(a)` must equal `len(b)`; result is a vector.
    Aligned,
}

/// A dense, row-major `rows x cols` matrix of squared distances, produced by
/// [`euclid_dist_squared`] under [`Pairing::Pairwise`].
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    /// Index of the minimum value in row `i`. Ties are broken by the first
    /// (smallest-`j`) occurrence, matching "first inserted wins" when `j`
    /// ranges over nodes in graph insertion order.
    pub fn row_argmin(&self, i: usize) -> usize {
        let start = i * self.cols;
        let row = &self.data[start..start + self.cols];
        let mut best = 0;
        for j in 1..row.len() {
            if row[j] < row[best] {
                best = j;
            }
        }
        best
    }

    /// All `(i, j)` pairs with `get(i, j) <= radius_squared`, in row-major
    /// order. Boundary equality is included (spec.md §4.2, `near`).
    pub fn within_radius_squared(&self, radius_squared: f64) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for i in 0..self.rows {
            for j in 0..self.cols {
                if self.get(i, j) <= radius_squared {
                    out.push((i, j));
                }
            }
        }
        out
    }
}

/// An ordered sequence of [`Coordinate`]s supporting the vectorized
/// operations the core needs (§3, "multi-coordinate").
#[derive(Debug, Clone, Default)]
pub struct MultiCoordinate {
    points: Vec<Coordinate>,
}

impl MultiCoordinate {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    pub fn single(point: Coordinate) -> Self {
        Self {
            points: vec![point],
        }
    }

    /// `point` repeated `k` times, used by [`crate::sampling::PointSampler`]
    /// to present a single fixed point as a length-`k` multi-coordinate for
    /// downstream vectorization (spec.md §4.4.2).
    pub fn repeated(point: Coordinate, k: usize) -> Self {
        Self {
            points: vec![point; k],
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, i: usize) -> Coordinate {
        self.points[i]
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.points.iter()
    }

    pub fn push(&mut self, point: Coordinate) {
        self.points.push(point);
    }

    /// Selects elements by explicit index, preserving the order of `indices`.
    pub fn select(&self, indices: &[usize]) -> MultiCoordinate {
        MultiCoordinate::new(indices.iter().map(|&i| self.points[i]).collect())
    }

    /// Selects elements where `mask[i]` is true, preserving input order.
    pub fn select_mask(&self, mask: &[bool]) -> MultiCoordinate {
        MultiCoordinate::new(
            self.points
                .iter()
                .zip(mask.iter())
                .filter(|(_, &m)| m)
                .map(|(&p, _)| p)
                .collect(),
        )
    }

    /// Stacks a sequence of multi-coordinates in order.
    pub fn concat(parts: &[MultiCoordinate]) -> MultiCoordinate {
        let mut points = Vec::with_capacity(parts.iter().map(|p| p.len()).sum());
        for part in parts {
            points.extend_from_slice(&part.points);
        }
        MultiCoordinate::new(points)
    }
}

/// Squared-Euclidean distance between two multi-coordinates (§4.1).
///
/// Used as a cheap ordering proxy for comparisons (nearest-node selection,
/// the shrinking-radius rule); it is never used where the true great-circle
/// length matters, e.g. for stored edge weights — that is [`geo_dist`].
pub fn euclid_dist_squared(
    a: &MultiCoordinate,
    b: &MultiCoordinate,
    pairing: Pairing,
) -> PlannerResult<DistanceMatrix> {
    match pairing {
        Pairing::Pairwise => {
            let mut data = Vec::with_capacity(a.len() * b.len());
            for x in a.iter() {
                for y in b.iter() {
                    data.push(squared(*x, *y));
                }
            }
            Ok(DistanceMatrix {
                rows: a.len(),
                cols: b.len(),
                data,
            })
        }
        Pairing::Aligned => {
            if a.len() != b.len() {
                return Err(PlannerError::InvalidInput(format!(
                    "aligned pairing requires equal lengths, got {} and {}",
                    a.len(),
                    b.len()
                )));
            }
            let data: Vec<f64> = a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| squared(*x, *y))
                .collect();
            Ok(DistanceMatrix {
                rows: 1,
                cols: data.len(),
                data,
            })
        }
    }
}

#[inline]
fn squared(a: Coordinate, b: Coordinate) -> f64 {
    let dlat = a.lat - b.lat;
    let dlon = a.lon - b.lon;
    dlat * dlat + dlon * dlon
}

/// Great-circle (haversine) distance in kilometers, element-aligned.
///
/// This is the "true" metric used for stored edge weights and cost-map
/// bookkeeping; it is deliberately a different scale than the squared-
/// Euclidean proxy above (spec.md §4.1's rationale).
pub fn geo_dist(a: &MultiCoordinate, b: &MultiCoordinate) -> PlannerResult<Vec<f64>> {
    if a.len() != b.len() {
        return Err(PlannerError::InvalidInput(format!(
            "geo_dist requires aligned lengths, got {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| geo_dist_one(*x, *y))
        .collect())
}

/// Great-circle distance between a single pair of coordinates, in kilometers.
pub fn geo_dist_one(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon * 0.5).sin().powi(2);
    let c = 2.0 * h.sqrt().clamp(-1.0, 1.0).asin();
    EARTH_RADIUS_KM * c
}

/// Element-wise unit vector of a (dlat, dlon) displacement in the tangent
/// plane. Undefined (panics) for a zero-length input; callers must not
/// request it for a zero vector (spec.md §4.1).
pub fn normalized(dlat: f64, dlon: f64) -> (f64, f64) {
    let norm = (dlat * dlat + dlon * dlon).sqrt();
    assert!(
        norm > 0.0,
        "normalized() is undefined for a zero-length vector"
    );
    (dlat / norm, dlon / norm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_bit_exact() {
        let a = Coordinate::new(1.0, 2.0);
        let b = Coordinate::new(1.0, 2.0);
        let c = Coordinate::new(1.0, 2.0 + 1e-12);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn pairwise_shape_and_values() {
        let a = MultiCoordinate::new(vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0)]);
        let b = MultiCoordinate::new(vec![Coordinate::new(0.0, 0.0)]);
        let m = euclid_dist_squared(&a, &b, Pairing::Pairwise).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 1);
        assert_eq!(m.get(0, 0), 0.0);
        assert_eq!(m.get(1, 0), 1.0);
    }

    #[test]
    fn aligned_requires_equal_length() {
        let a = MultiCoordinate::new(vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0)]);
        let b = MultiCoordinate::single(Coordinate::new(0.0, 0.0));
        assert!(euclid_dist_squared(&a, &b, Pairing::Aligned).is_err());
    }

    #[test]
    fn geo_dist_zero_for_identical_points() {
        let p = MultiCoordinate::single(Coordinate::new(51.5, -0.12));
        let d = geo_dist(&p, &p).unwrap();
        assert!(d[0].abs() < 1e-9);
    }

    #[test]
    fn select_picks_by_index_in_requested_order() {
        let m = MultiCoordinate::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(2.0, 0.0),
        ]);
        let picked = m.select(&[2, 0]);
        assert_eq!(
            picked.as_slice(),
            &[Coordinate::new(2.0, 0.0), Coordinate::new(0.0, 0.0)]
        );
    }

    #[test]
    fn select_mask_keeps_only_true_entries_in_order() {
        let m = MultiCoordinate::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(2.0, 0.0),
        ]);
        let picked = m.select_mask(&[false, true, true]);
        assert_eq!(
            picked.as_slice(),
            &[Coordinate::new(1.0, 0.0), Coordinate::new(2.0, 0.0)]
        );
    }

    #[test]
    fn concat_stacks_parts_in_order() {
        let a = MultiCoordinate::new(vec![Coordinate::new(0.0, 0.0)]);
        let b = MultiCoordinate::new(vec![Coordinate::new(1.0, 0.0), Coordinate::new(2.0, 0.0)]);
        let c = MultiCoordinate::new(Vec::new());
        let stacked = MultiCoordinate::concat(&[a, b, c]);
        assert_eq!(
            stacked.as_slice(),
            &[
                Coordinate::new(0.0, 0.0),
                Coordinate::new(1.0, 0.0),
                Coordinate::new(2.0, 0.0),
            ]
        );
    }

    #[test]
    fn row_argmin_breaks_ties_by_first_index() {
        let m = DistanceMatrix {
            rows: 1,
            cols: 3,
            data: vec![1.0, 1.0, 0.5],
        };
        assert_eq!(m.row_argmin(0), 2);
        let m2 = DistanceMatrix {
            rows: 1,
            cols: 3,
            data: vec![0.5, 0.5, 0.9],
        };
        assert_eq!(m2.row_argmin(0), 0);
    }
}
