//! Dataset utilities for loading, generating and preparing clustering input.

use crate::distance::{distance_matrix, Metric};
use crate::error::{KMedoidsError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A set of equal-length points, indexed `0..len()`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    points: Vec<Vec<f64>>,
}

impl Dataset {
    /// Wrap `points`, checking that they all share one dimension.
    pub fn from_points(points: Vec<Vec<f64>>) -> Result<Self> {
        if let Some(first) = points.first() {
            let dim = first.len();
            if let Some((index, point)) = points.iter().enumerate().find(|(_, p)| p.len() != dim) {
                return Err(KMedoidsError::dimension_mismatch(index, dim, point.len()));
            }
        }
        Ok(Self { points })
    }

    /// Load a sample file: one point per line, coordinates separated by
    /// whitespace. Blank lines are skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse points from any buffered reader in the [`load`](Self::load) format.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut points = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let point = trimmed
                .split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|e| {
                        KMedoidsError::parse(line_no + 1, format!("'{}': {}", token, e))
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            points.push(point);
        }

        Self::from_points(points)
    }

    /// Generate `per_cluster` points around each of `centers`, each
    /// coordinate offset uniformly within `[-spread, spread]`.
    ///
    /// Points are emitted center by center, so blob `c` occupies indices
    /// `c * per_cluster .. (c + 1) * per_cluster`. The same `seed` always
    /// yields the same dataset.
    pub fn generate_blobs(
        centers: &[Vec<f64>],
        per_cluster: usize,
        spread: f64,
        seed: u64,
    ) -> Result<Self> {
        if !spread.is_finite() || spread < 0.0 {
            return Err(KMedoidsError::invalid_parameter(format!(
                "spread must be a finite value >= 0, got {}",
                spread
            )));
        }
        Self::from_points(centers.to_vec())?;

        let mut rng = StdRng::seed_from_u64(seed);
        let points = centers
            .iter()
            .flat_map(|center| std::iter::repeat(center).take(per_cluster))
            .map(|center| {
                center
                    .iter()
                    .map(|&c| c + rng.gen_range(-spread..=spread))
                    .collect()
            })
            .collect();

        Ok(Self { points })
    }

    /// The points, in index order.
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// Consume the dataset, returning its points.
    pub fn into_points(self) -> Vec<Vec<f64>> {
        self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the dataset has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Dimension of every point, or `None` for an empty dataset.
    pub fn dim(&self) -> Option<usize> {
        self.points.first().map(Vec::len)
    }

    /// Precompute the pairwise distance matrix under `metric`.
    pub fn distance_matrix<M: Metric + ?Sized>(&self, metric: &M) -> Vec<Vec<f64>> {
        distance_matrix(&self.points, metric)
    }
}
