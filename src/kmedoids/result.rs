//! Immutable outcome of a k-medoids run.

use serde::{Deserialize, Serialize};

/// Final medoids and partition produced by [`KMedoids`](crate::KMedoids).
///
/// `medoids()[i]` is the medoid of `clusters()[i]`. Clusters that ended up
/// empty have already been removed, so there may be fewer clusters than
/// initial medoids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clustering {
    medoids: Vec<usize>,
    clusters: Vec<Vec<usize>>,
    labels: Vec<usize>,
    total_deviation: f64,
    iterations: usize,
    deviation_history: Vec<f64>,
}

impl Clustering {
    pub(crate) fn new(
        medoids: Vec<usize>,
        clusters: Vec<Vec<usize>>,
        labels: Vec<usize>,
        total_deviation: f64,
        iterations: usize,
        deviation_history: Vec<f64>,
    ) -> Self {
        Self {
            medoids,
            clusters,
            labels,
            total_deviation,
            iterations,
            deviation_history,
        }
    }

    /// Result of a run with a zero iteration budget: the initial medoids,
    /// no clusters, zero deviation.
    pub(crate) fn unclustered(medoids: Vec<usize>) -> Self {
        Self::new(medoids, Vec::new(), Vec::new(), 0.0, 0, Vec::new())
    }

    /// Point index of each medoid.
    pub fn medoids(&self) -> &[usize] {
        &self.medoids
    }

    /// Member point indices of each cluster, in ascending order.
    pub fn clusters(&self) -> &[Vec<usize>] {
        &self.clusters
    }

    /// Cluster index of every point. Empty for an unclustered result.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Sum of distances from every point to its medoid.
    pub fn total_deviation(&self) -> f64 {
        self.total_deviation
    }

    /// Number of swap iterations performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Total deviation after the baseline assignment and after each accepted
    /// swap. Non-increasing.
    pub fn deviation_history(&self) -> &[f64] {
        &self.deviation_history
    }

    /// Cluster the given point belongs to.
    pub fn cluster_of(&self, point: usize) -> Option<usize> {
        self.labels.get(point).copied()
    }

    /// Number of (non-empty) clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// True if no clustering was performed.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Decompose into `(medoids, clusters)`.
    pub fn into_parts(self) -> (Vec<usize>, Vec<Vec<usize>>) {
        (self.medoids, self.clusters)
    }
}
