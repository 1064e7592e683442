//! Error types for forge-medoids operations.
//!
//! Every failure here is a precondition violation detected before the
//! optimization loop starts. Degenerate clustering outcomes (empty clusters,
//! fewer medoids than requested) are results, not errors.

use std::io;
use thiserror::Error;

/// Result type alias using [`KMedoidsError`].
pub type Result<T> = std::result::Result<T, KMedoidsError>;

/// Errors that can occur during forge-medoids operations.
#[derive(Error, Debug)]
pub enum KMedoidsError {
    /// The data-kind selector is neither points nor distance matrix.
    #[error("invalid input kind: {0}")]
    InvalidInputKind(String),

    /// The initial medoid set is empty, out of range, or contains duplicates.
    #[error("invalid medoid set: {0}")]
    InvalidMedoidSet(String),

    /// Operation requires a non-empty dataset but received empty input.
    #[error("empty dataset: operation requires at least one point")]
    EmptyDataset,

    /// Point dimensions do not match the expected dimension.
    #[error("dimension mismatch at point {index}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Index of the offending point.
        index: usize,
        /// Expected point dimension.
        expected: usize,
        /// Actual point dimension provided.
        actual: usize,
    },

    /// A distance matrix row does not have one entry per point.
    #[error("invalid distance matrix: row {row} has {actual} entries, expected {expected}")]
    InvalidDistanceMatrix {
        /// Index of the offending row.
        row: usize,
        /// Expected row length (number of rows).
        expected: usize,
        /// Actual row length.
        actual: usize,
    },

    /// Invalid parameter value provided.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error while reading sample files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A sample file contained a token that is not a number.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },
}

impl KMedoidsError {
    /// Creates a new `InvalidInputKind` error.
    pub fn invalid_input_kind(kind: impl Into<String>) -> Self {
        Self::InvalidInputKind(kind.into())
    }

    /// Creates a new `InvalidMedoidSet` error.
    pub fn invalid_medoid_set(msg: impl Into<String>) -> Self {
        Self::InvalidMedoidSet(msg.into())
    }

    /// Creates a new `DimensionMismatch` error.
    pub fn dimension_mismatch(index: usize, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            index,
            expected,
            actual,
        }
    }

    /// Creates a new `InvalidDistanceMatrix` error.
    pub fn invalid_distance_matrix(row: usize, expected: usize, actual: usize) -> Self {
        Self::InvalidDistanceMatrix {
            row,
            expected,
            actual,
        }
    }

    /// Creates a new `InvalidParameter` error.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Creates a new `Parse` error.
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KMedoidsError::dimension_mismatch(3, 2, 5);
        assert_eq!(
            err.to_string(),
            "dimension mismatch at point 3: expected 2, got 5"
        );

        let err = KMedoidsError::invalid_distance_matrix(1, 4, 3);
        assert_eq!(
            err.to_string(),
            "invalid distance matrix: row 1 has 3 entries, expected 4"
        );

        let err = KMedoidsError::EmptyDataset;
        assert_eq!(
            err.to_string(),
            "empty dataset: operation requires at least one point"
        );

        let err = KMedoidsError::invalid_input_kind("type code 7");
        assert_eq!(err.to_string(), "invalid input kind: type code 7");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: KMedoidsError = io_err.into();
        assert!(matches!(err, KMedoidsError::Io(_)));
    }
}
