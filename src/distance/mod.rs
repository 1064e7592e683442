//! Distance computation module.
//!
//! Provides the built-in metric factory ([`DistanceMetric`]), the [`Metric`]
//! trait that lets callers plug in their own dissimilarity, a parallel
//! [`distance_matrix`] builder, and the per-run [`DistanceProvider`] the
//! optimizer reads distances through.

pub mod provider;
pub mod scalar;

pub use provider::DistanceProvider;
pub use scalar::{
    chebyshev_distance, euclidean_distance, euclidean_distance_squared, manhattan_distance,
    minkowski_distance,
};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A dissimilarity between two points.
///
/// Implementations must be non-negative and should be symmetric and zero
/// for identical points. The triangle inequality is not required.
///
/// Implemented for every [`DistanceMetric`] and for any closure
/// `Fn(&[f64], &[f64]) -> f64 + Send + Sync`, which is how user-defined
/// metrics are supplied.
pub trait Metric: Send + Sync {
    /// Compute the distance between `a` and `b`.
    fn distance(&self, a: &[f64], b: &[f64]) -> f64;
}

/// Supported built-in distance metrics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Euclidean (L2) distance: sqrt(sum((a[i] - b[i])^2))
    Euclidean,
    /// Squared Euclidean distance: sum((a[i] - b[i])^2)
    #[default]
    EuclideanSquared,
    /// Manhattan (L1) distance: sum(|a[i] - b[i]|)
    Manhattan,
    /// Chebyshev (L-infinity) distance: max(|a[i] - b[i]|)
    Chebyshev,
    /// Minkowski distance of the given order.
    Minkowski(f64),
}

impl DistanceMetric {
    /// Compute the distance between two points using this metric.
    ///
    /// # Panics
    /// Panics if the points have different dimensions.
    #[inline]
    pub fn compute(&self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            DistanceMetric::Euclidean => euclidean_distance(a, b),
            DistanceMetric::EuclideanSquared => euclidean_distance_squared(a, b),
            DistanceMetric::Manhattan => manhattan_distance(a, b),
            DistanceMetric::Chebyshev => chebyshev_distance(a, b),
            DistanceMetric::Minkowski(p) => minkowski_distance(a, b, *p),
        }
    }
}

impl Metric for DistanceMetric {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        self.compute(a, b)
    }
}

impl<F> Metric for F
where
    F: Fn(&[f64], &[f64]) -> f64 + Send + Sync,
{
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        self(a, b)
    }
}

/// Compute the full pairwise distance matrix for `points` under `metric`.
///
/// Only the upper triangle is evaluated (in parallel, one task per row);
/// it is then mirrored, so the result is exactly symmetric with a zero
/// diagonal.
pub fn distance_matrix<P, M>(points: &[P], metric: &M) -> Vec<Vec<f64>>
where
    P: AsRef<[f64]> + Sync,
    M: Metric + ?Sized,
{
    let n = points.len();

    let upper: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let a = points[i].as_ref();
            (i + 1..n)
                .map(|j| metric.distance(a, points[j].as_ref()))
                .collect()
        })
        .collect();

    let mut matrix = vec![vec![0.0; n]; n];
    for (i, row) in upper.iter().enumerate() {
        for (offset, &d) in row.iter().enumerate() {
            let j = i + 1 + offset;
            matrix[i][j] = d;
            matrix[j][i] = d;
        }
    }

    matrix
}
