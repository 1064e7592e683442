//! Swap evaluation: which (cluster, candidate) replacement lowers total
//! deviation the most.
//!
//! The cost of a swap is estimated from the first/second-best distances of
//! the current [`Assignment`] rather than by reassigning every point, which
//! makes each candidate O(n) instead of O(n·k). Only pre-swap state is read;
//! the optimizer confirms every applied swap with a real assignment pass.

use super::assignment::Assignment;
use crate::constants::parallel::MIN_CANDIDATES_PER_TASK;
use crate::distance::{DistanceProvider, Metric};
use rayon::prelude::*;

/// A proposed medoid replacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swap {
    /// Medoid slot whose medoid would be replaced.
    pub cluster: usize,
    /// Point that would become the new medoid of `cluster`.
    pub candidate: usize,
    /// Estimated change in total deviation (negative is an improvement).
    pub cost: f64,
}

/// Estimate the change in total deviation if `candidate` replaced the medoid
/// of `cluster`.
pub fn swap_cost<P, M>(
    provider: &DistanceProvider<'_, P, M>,
    assignment: &Assignment,
    candidate: usize,
    cluster: usize,
) -> f64
where
    P: AsRef<[f64]> + Sync,
    M: Metric + ?Sized,
{
    let mut cost = 0.0;

    for point in 0..assignment.len() {
        if point == candidate {
            continue;
        }

        let candidate_distance = provider.distance(point, candidate);
        let first = assignment.first[point];

        if assignment.labels[point] == cluster {
            // Loses its medoid: falls back to the candidate or its previous runner-up.
            cost += candidate_distance.min(assignment.second[point]) - first;
        } else if candidate_distance < first {
            cost += candidate_distance - first;
        }
    }

    cost - assignment.first[candidate]
}

/// Find the lowest-cost swap over all clusters and candidates.
///
/// Candidates are points that are not medoids and that lie at a strictly
/// positive distance from their medoid. Clusters are evaluated in parallel,
/// and so are the candidates of each cluster; selection then runs in index
/// order with a strict `<`, so the earliest cluster and candidate win ties
/// regardless of thread count.
///
/// The cheapest swap is returned even when its estimated cost is not
/// negative. `None` means no candidate exists at all.
pub fn best_swap<P, M>(
    provider: &DistanceProvider<'_, P, M>,
    medoids: &[usize],
    assignment: &Assignment,
) -> Option<Swap>
where
    P: AsRef<[f64]> + Sync,
    M: Metric + ?Sized,
{
    let n = assignment.len();

    let mut is_medoid = vec![false; n];
    for &medoid in medoids {
        is_medoid[medoid] = true;
    }

    let candidates: Vec<usize> = (0..n)
        .filter(|&point| !is_medoid[point] && assignment.first[point] > 0.0)
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let per_cluster: Vec<Option<Swap>> = (0..medoids.len())
        .into_par_iter()
        .map(|cluster| {
            let costs: Vec<f64> = candidates
                .par_iter()
                .with_min_len(MIN_CANDIDATES_PER_TASK)
                .map(|&candidate| swap_cost(provider, assignment, candidate, cluster))
                .collect();

            candidates
                .iter()
                .zip(costs)
                .fold(None, |best, (&candidate, cost)| {
                    pick_cheaper(
                        best,
                        Swap {
                            cluster,
                            candidate,
                            cost,
                        },
                    )
                })
        })
        .collect();

    per_cluster.into_iter().flatten().fold(None, pick_cheaper)
}

/// Keep `best` unless `next` is strictly cheaper. A swap must also be
/// cheaper than infinity to be chosen at all.
#[inline]
fn pick_cheaper(best: Option<Swap>, next: Swap) -> Option<Swap> {
    let bound = best.map_or(f64::INFINITY, |b| b.cost);
    if next.cost < bound {
        Some(next)
    } else {
        best
    }
}
