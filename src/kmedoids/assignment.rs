//! Nearest/second-nearest medoid assignment.
//!
//! One pass over all points, parallel over points. Besides the partition it
//! records, per point, the distance to the nearest and second-nearest medoid;
//! the swap evaluator reads those instead of recomputing them.

use crate::constants::parallel::MIN_POINTS_PER_TASK;
use crate::distance::{DistanceProvider, Metric};
use rayon::prelude::*;

/// Result of one assignment pass over the whole dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Medoid slot each point belongs to.
    pub labels: Vec<usize>,
    /// Distance from each point to its nearest medoid.
    pub first: Vec<f64>,
    /// Distance from each point to its second-nearest medoid
    /// (`f64::INFINITY` when there is only one medoid).
    pub second: Vec<f64>,
    /// Point indices grouped by medoid slot, in ascending order.
    pub clusters: Vec<Vec<usize>>,
    /// Sum of `first` over all points.
    pub total_deviation: f64,
}

impl Assignment {
    /// Number of points covered by this assignment.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if no points were assigned.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of points in each cluster.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(Vec::len).collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct Nearest {
    slot: usize,
    first: f64,
    second: f64,
}

/// Scan every medoid slot once, keeping the running top two.
/// Ties go to the earliest slot.
#[inline]
fn nearest_medoids<P, M>(provider: &DistanceProvider<'_, P, M>, point: usize, medoids: &[usize]) -> Nearest
where
    P: AsRef<[f64]> + Sync,
    M: Metric + ?Sized,
{
    let mut nearest = Nearest {
        slot: 0,
        first: f64::INFINITY,
        second: f64::INFINITY,
    };

    for (slot, &medoid) in medoids.iter().enumerate() {
        let distance = provider.distance(point, medoid);
        if distance < nearest.first {
            nearest.second = nearest.first;
            nearest.first = distance;
            nearest.slot = slot;
        } else if distance < nearest.second {
            nearest.second = distance;
        }
    }

    nearest
}

/// Assign every point to its nearest medoid.
///
/// Points are processed in parallel; the per-point results are collected in
/// index order and reduced sequentially, so the output does not depend on
/// the number of worker threads.
///
/// # Panics
///
/// Panics if `medoids` is empty or holds an index outside the provider.
pub fn assign<P, M>(provider: &DistanceProvider<'_, P, M>, medoids: &[usize]) -> Assignment
where
    P: AsRef<[f64]> + Sync,
    M: Metric + ?Sized,
{
    assert!(!medoids.is_empty(), "assignment requires at least one medoid");

    let n = provider.len();
    let markers: Vec<Nearest> = (0..n)
        .into_par_iter()
        .with_min_len(MIN_POINTS_PER_TASK)
        .map(|point| nearest_medoids(provider, point, medoids))
        .collect();

    let mut labels = Vec::with_capacity(n);
    let mut first = Vec::with_capacity(n);
    let mut second = Vec::with_capacity(n);
    let mut clusters = vec![Vec::new(); medoids.len()];
    let mut total_deviation = 0.0;

    for (point, marker) in markers.into_iter().enumerate() {
        total_deviation += marker.first;
        labels.push(marker.slot);
        first.push(marker.first);
        second.push(marker.second);
        clusters[marker.slot].push(point);
    }

    Assignment {
        labels,
        first,
        second,
        clusters,
        total_deviation,
    }
}
