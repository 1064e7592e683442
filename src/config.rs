//! Configuration for the k-medoids optimization loop.

use crate::constants::kmedoids::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::error::{KMedoidsError, Result};
use serde::{Deserialize, Serialize};

/// Stopping rules for [`KMedoids`](crate::KMedoids).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KMedoidsConfig {
    /// Minimum improvement in total deviation required to keep iterating.
    /// The loop stops once an iteration improves by this much or less.
    pub tolerance: f64,
    /// Maximum number of swap iterations. Zero skips clustering entirely.
    pub max_iterations: usize,
}

impl Default for KMedoidsConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl KMedoidsConfig {
    /// Create a config with the default tolerance (1e-4) and iteration budget (100).
    pub fn new() -> Self {
        Self::default()
    }

    /// Customize the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Customize the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Check that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`KMedoidsError::InvalidParameter`] if the tolerance is
    /// negative, NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(KMedoidsError::invalid_parameter(format!(
                "tolerance must be a finite value >= 0, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KMedoidsConfig::default();
        assert_eq!(config.tolerance, 0.0001);
        assert_eq!(config.max_iterations, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = KMedoidsConfig::new()
            .with_tolerance(0.0)
            .with_max_iterations(0);
        assert_eq!(config.tolerance, 0.0);
        assert_eq!(config.max_iterations, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_tolerance() {
        for tolerance in [-1e-9, f64::NAN, f64::INFINITY] {
            let err = KMedoidsConfig::new()
                .with_tolerance(tolerance)
                .validate()
                .unwrap_err();
            assert!(matches!(err, KMedoidsError::InvalidParameter(_)));
        }
    }
}
