//! Index-based distance lookup for a single optimization run.
//!
//! The optimizer only ever asks "how far apart are point `i` and point `j`".
//! [`DistanceProvider`] answers that either by running the metric on the two
//! points or by reading a precomputed matrix. The variant is chosen once, at
//! construction, from the run's [`DataKind`].

use super::Metric;
use crate::error::{KMedoidsError, Result};
use crate::types::DataKind;

/// Resolves `distance(i, j)` for the duration of one run.
///
/// Borrows the caller's data; nothing is copied.
#[derive(Debug)]
pub enum DistanceProvider<'a, P, M: ?Sized> {
    /// Apply `metric` to `points[i]` and `points[j]`.
    Points {
        /// The dataset rows, one point per row.
        points: &'a [P],
        /// The dissimilarity applied to each pair.
        metric: &'a M,
    },
    /// Read `rows[i][j]` directly.
    Matrix {
        /// The square matrix of precomputed distances.
        rows: &'a [P],
    },
}

impl<'a, P, M> DistanceProvider<'a, P, M>
where
    P: AsRef<[f64]> + Sync,
    M: Metric + ?Sized,
{
    /// Validate `data` for `kind` and build the matching provider.
    ///
    /// # Errors
    ///
    /// - [`KMedoidsError::EmptyDataset`] if `data` has no rows.
    /// - [`KMedoidsError::DimensionMismatch`] if points differ in length.
    /// - [`KMedoidsError::InvalidDistanceMatrix`] if the matrix is not square.
    pub fn new(data: &'a [P], kind: DataKind, metric: &'a M) -> Result<Self> {
        if data.is_empty() {
            return Err(KMedoidsError::EmptyDataset);
        }

        match kind {
            DataKind::Points => {
                let dim = data[0].as_ref().len();
                if let Some((index, point)) = data
                    .iter()
                    .enumerate()
                    .find(|(_, p)| p.as_ref().len() != dim)
                {
                    return Err(KMedoidsError::dimension_mismatch(
                        index,
                        dim,
                        point.as_ref().len(),
                    ));
                }
                Ok(DistanceProvider::Points {
                    points: data,
                    metric,
                })
            }
            DataKind::DistanceMatrix => {
                let n = data.len();
                if let Some((row, values)) = data
                    .iter()
                    .enumerate()
                    .find(|(_, r)| r.as_ref().len() != n)
                {
                    return Err(KMedoidsError::invalid_distance_matrix(
                        row,
                        n,
                        values.as_ref().len(),
                    ));
                }
                Ok(DistanceProvider::Matrix { rows: data })
            }
        }
    }

    /// Distance between point `i` and point `j`.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        match self {
            DistanceProvider::Points { points, metric } => {
                metric.distance(points[i].as_ref(), points[j].as_ref())
            }
            DistanceProvider::Matrix { rows } => rows[i].as_ref()[j],
        }
    }

    /// Number of points the provider covers.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            DistanceProvider::Points { points, .. } => points.len(),
            DistanceProvider::Matrix { rows } => rows.len(),
        }
    }

    /// Always false for a validated provider.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The data kind this provider was built for.
    pub fn kind(&self) -> DataKind {
        match self {
            DistanceProvider::Points { .. } => DataKind::Points,
            DistanceProvider::Matrix { .. } => DataKind::DistanceMatrix,
        }
    }
}
