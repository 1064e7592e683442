//! Partitioning Around Medoids (PAM) local search.
//!
//! Starting from caller-supplied medoids, the optimizer alternates two
//! parallel passes:
//!
//! 1. [`assign`]: every point to its nearest medoid, O(n·k).
//! 2. [`best_swap`]: the (cluster, candidate) replacement with the lowest
//!    estimated cost, O(n²) per cluster.
//!
//! The best swap is applied and confirmed with a fresh assignment. The loop
//! stops when the improvement drops to the tolerance, when no candidate is
//! left, or when the iteration budget runs out. Clusters left empty are
//! then dropped together with their medoids.
//!
//! # Example
//!
//! ```
//! use forge_medoids::{DataKind, DistanceMetric, KMedoids};
//!
//! let points = vec![
//!     vec![1.0, 1.0],
//!     vec![1.2, 0.9],
//!     vec![0.9, 1.1],
//!     vec![8.0, 8.0],
//!     vec![8.1, 7.9],
//!     vec![7.9, 8.2],
//! ];
//!
//! let solver = KMedoids::new(vec![0, 3], DistanceMetric::Euclidean);
//! let result = solver.process(&points, DataKind::Points).unwrap();
//!
//! assert_eq!(result.clusters().len(), 2);
//! assert_eq!(result.clusters()[0], vec![0, 1, 2]);
//! ```

pub mod assignment;
pub mod result;
pub mod swap;

pub use assignment::{assign, Assignment};
pub use result::Clustering;
pub use swap::{best_swap, swap_cost, Swap};

use crate::config::KMedoidsConfig;
use crate::distance::{DistanceMetric, DistanceProvider, Metric};
use crate::error::{KMedoidsError, Result};
use crate::types::DataKind;
use log::{debug, trace};

/// K-Medoids clustering with PAM-style swap refinement.
///
/// Holds the initial medoids, the stopping rules and the metric. A solver
/// can be reused: every call to [`process`](Self::process) starts from the
/// same initial medoids and returns an independent [`Clustering`].
#[derive(Debug, Clone)]
pub struct KMedoids<M = DistanceMetric> {
    initial_medoids: Vec<usize>,
    config: KMedoidsConfig,
    metric: M,
}

impl<M: Metric> KMedoids<M> {
    /// Create a solver with the default configuration.
    ///
    /// # Arguments
    /// * `initial_medoids` - Distinct point indices, one per cluster
    /// * `metric` - Dissimilarity used for [`DataKind::Points`] input
    pub fn new(initial_medoids: Vec<usize>, metric: M) -> Self {
        Self::with_config(initial_medoids, KMedoidsConfig::default(), metric)
    }

    /// Create a solver with explicit stopping rules.
    pub fn with_config(initial_medoids: Vec<usize>, config: KMedoidsConfig, metric: M) -> Self {
        Self {
            initial_medoids,
            config,
            metric,
        }
    }

    /// The medoids every run starts from.
    pub fn initial_medoids(&self) -> &[usize] {
        &self.initial_medoids
    }

    /// The stopping rules.
    pub fn config(&self) -> &KMedoidsConfig {
        &self.config
    }

    /// The metric applied to point input.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Cluster point input.
    pub fn process_points<P>(&self, points: &[P]) -> Result<Clustering>
    where
        P: AsRef<[f64]> + Sync,
    {
        self.process(points, DataKind::Points)
    }

    /// Cluster `data`, read as points or as a distance matrix according to `kind`.
    ///
    /// For [`DataKind::DistanceMatrix`] the metric is not consulted.
    ///
    /// # Errors
    ///
    /// - [`KMedoidsError::InvalidParameter`] for an unusable configuration.
    /// - [`KMedoidsError::EmptyDataset`], [`KMedoidsError::DimensionMismatch`]
    ///   or [`KMedoidsError::InvalidDistanceMatrix`] for malformed data.
    /// - [`KMedoidsError::InvalidMedoidSet`] if the initial medoids are
    ///   empty, out of range or not distinct.
    pub fn process<P>(&self, data: &[P], kind: DataKind) -> Result<Clustering>
    where
        P: AsRef<[f64]> + Sync,
    {
        self.config.validate()?;
        let provider = DistanceProvider::new(data, kind, &self.metric)?;
        validate_medoids(&self.initial_medoids, provider.len())?;

        if self.config.max_iterations == 0 {
            debug!("k-medoids: iteration budget is zero, returning initial medoids unclustered");
            return Ok(Clustering::unclustered(self.initial_medoids.clone()));
        }

        Ok(optimize(&provider, self.initial_medoids.clone(), &self.config))
    }

    /// Like [`process`](Self::process), but runs both parallel passes on
    /// `pool` instead of the global rayon pool.
    pub fn process_in_pool<P>(
        &self,
        pool: &rayon::ThreadPool,
        data: &[P],
        kind: DataKind,
    ) -> Result<Clustering>
    where
        P: AsRef<[f64]> + Sync,
    {
        pool.install(|| self.process(data, kind))
    }
}

/// Reject empty, out-of-range or repeated medoid indices.
fn validate_medoids(medoids: &[usize], n: usize) -> Result<()> {
    if medoids.is_empty() {
        return Err(KMedoidsError::invalid_medoid_set(
            "at least one initial medoid is required",
        ));
    }

    let mut seen = vec![false; n];
    for &medoid in medoids {
        if medoid >= n {
            return Err(KMedoidsError::invalid_medoid_set(format!(
                "medoid index {} is out of range for {} points",
                medoid, n
            )));
        }
        if seen[medoid] {
            return Err(KMedoidsError::invalid_medoid_set(format!(
                "medoid index {} appears more than once",
                medoid
            )));
        }
        seen[medoid] = true;
    }

    Ok(())
}

/// Run the swap loop to completion and snapshot the outcome.
fn optimize<P, M>(
    provider: &DistanceProvider<'_, P, M>,
    mut medoids: Vec<usize>,
    config: &KMedoidsConfig,
) -> Clustering
where
    P: AsRef<[f64]> + Sync,
    M: Metric + ?Sized,
{
    let mut assignment = assign(provider, &medoids);
    let mut history = vec![assignment.total_deviation];
    let mut iterations = 0;

    debug!(
        "k-medoids: {} {} with {} medoids, baseline deviation {:.6}",
        provider.len(),
        provider.kind(),
        medoids.len(),
        assignment.total_deviation
    );

    while iterations < config.max_iterations {
        iterations += 1;

        let Some(swap) = best_swap(provider, &medoids, &assignment) else {
            debug!("k-medoids: no swap candidates left at iteration {}", iterations);
            break;
        };

        let replaced = medoids[swap.cluster];
        medoids[swap.cluster] = swap.candidate;
        let next = assign(provider, &medoids);
        let improvement = assignment.total_deviation - next.total_deviation;

        trace!(
            "k-medoids: iteration {} swapped medoid {} -> {} in cluster {} (estimated {:.6}, actual {:.6})",
            iterations,
            replaced,
            swap.candidate,
            swap.cluster,
            swap.cost,
            -improvement
        );

        if improvement.is_nan() || improvement < 0.0 {
            debug!(
                "k-medoids: swap {} -> {} raised deviation by {:.6}, rolled back",
                replaced, swap.candidate, -improvement
            );
            medoids[swap.cluster] = replaced;
            break;
        }

        assignment = next;
        history.push(assignment.total_deviation);

        if improvement <= config.tolerance {
            break;
        }
    }

    let n = assignment.len();
    let (medoids, clusters, labels) = drop_empty_clusters(medoids, assignment.clusters, n);

    debug!(
        "k-medoids: finished after {} iterations with {} clusters, deviation {:.6}",
        iterations,
        clusters.len(),
        assignment.total_deviation
    );

    Clustering::new(
        medoids,
        clusters,
        labels,
        assignment.total_deviation,
        iterations,
        history,
    )
}

/// Keep only (medoid, cluster) pairs that have members, in their original
/// order, and relabel points against the surviving slots.
fn drop_empty_clusters(
    medoids: Vec<usize>,
    clusters: Vec<Vec<usize>>,
    n: usize,
) -> (Vec<usize>, Vec<Vec<usize>>, Vec<usize>) {
    let before = medoids.len();
    let (medoids, clusters): (Vec<usize>, Vec<Vec<usize>>) = medoids
        .into_iter()
        .zip(clusters)
        .filter(|(_, members)| !members.is_empty())
        .unzip();

    if medoids.len() < before {
        debug!(
            "k-medoids: dropped {} empty clusters",
            before - medoids.len()
        );
    }

    let mut labels = vec![0; n];
    for (slot, members) in clusters.iter().enumerate() {
        for &point in members {
            labels[point] = slot;
        }
    }

    (medoids, clusters, labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_groups() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.5, 0.5],
            vec![10.0, 10.0],
            vec![10.0, 11.0],
            vec![11.0, 10.0],
            vec![11.0, 11.0],
            vec![10.5, 10.5],
        ]
    }

    #[test]
    fn test_converges_to_group_centres() {
        let points = two_groups();
        let solver = KMedoids::new(vec![0, 5], DistanceMetric::Euclidean);
        let result = solver.process(&points, DataKind::Points).unwrap();

        assert_eq!(result.medoids(), &[4, 9]);
        assert_eq!(result.clusters(), &[vec![0, 1, 2, 3, 4], vec![5, 6, 7, 8, 9]]);
        assert_relative_eq!(
            result.total_deviation(),
            8.0 * 0.5f64.sqrt(),
            epsilon = 1e-9
        );
        assert!(result.iterations() > 0);
    }

    #[test]
    fn test_zero_iterations_short_circuit() {
        let points = two_groups();
        let config = KMedoidsConfig::new().with_max_iterations(0);
        let solver = KMedoids::with_config(vec![1, 5], config, DistanceMetric::Euclidean);
        let result = solver.process(&points, DataKind::Points).unwrap();

        assert_eq!(result.medoids(), &[1, 5]);
        assert!(result.clusters().is_empty());
        assert_eq!(result.total_deviation(), 0.0);
        assert_eq!(result.iterations(), 0);
    }

    #[test]
    fn test_invalid_medoids() {
        let points = two_groups();

        let empty = KMedoids::new(vec![], DistanceMetric::Euclidean);
        assert!(matches!(
            empty.process_points(&points),
            Err(KMedoidsError::InvalidMedoidSet(_))
        ));

        let out_of_range = KMedoids::new(vec![0, 10], DistanceMetric::Euclidean);
        assert!(matches!(
            out_of_range.process_points(&points),
            Err(KMedoidsError::InvalidMedoidSet(_))
        ));

        let duplicate = KMedoids::new(vec![3, 3], DistanceMetric::Euclidean);
        assert!(matches!(
            duplicate.process_points(&points),
            Err(KMedoidsError::InvalidMedoidSet(_))
        ));
    }

    #[test]
    fn test_invalid_tolerance_rejected_before_work() {
        let points = two_groups();
        let config = KMedoidsConfig::new().with_tolerance(-1.0);
        let solver = KMedoids::with_config(vec![0], config, DistanceMetric::Euclidean);
        assert!(matches!(
            solver.process_points(&points),
            Err(KMedoidsError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_identical_points_stop_without_swapping() {
        let points = vec![vec![2.0, 2.0]; 6];
        let solver = KMedoids::new(vec![0, 2, 4], DistanceMetric::Euclidean);
        let result = solver.process_points(&points).unwrap();

        // Everything lands on the first medoid; the other two are dropped.
        assert_eq!(result.medoids(), &[0]);
        assert_eq!(result.clusters(), &[vec![0, 1, 2, 3, 4, 5]]);
        assert_eq!(result.labels(), &[0; 6]);
        assert_eq!(result.total_deviation(), 0.0);
        assert_eq!(result.iterations(), 1);
    }

    #[test]
    fn test_drop_empty_clusters_relabels() {
        let (medoids, clusters, labels) =
            drop_empty_clusters(vec![7, 2, 5], vec![vec![0, 2], vec![], vec![1]], 3);
        assert_eq!(medoids, vec![7, 5]);
        assert_eq!(clusters, vec![vec![0, 2], vec![1]]);
        assert_eq!(labels, vec![0, 1, 0]);
    }

    #[test]
    fn test_history_is_non_increasing() {
        let points = two_groups();
        let config = KMedoidsConfig::new().with_tolerance(0.0);
        let solver = KMedoids::with_config(vec![0, 1], config, DistanceMetric::EuclideanSquared);
        let result = solver.process_points(&points).unwrap();

        let history = result.deviation_history();
        assert!(!history.is_empty());
        for pair in history.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        assert_eq!(*history.last().unwrap(), result.total_deviation());
    }
}
