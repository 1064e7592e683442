//! Core types shared by the distance layer and the optimizer.

use crate::error::{KMedoidsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the rows handed to the optimizer should be interpreted.
///
/// Selected once per run; the optimizer never switches kinds mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataKind {
    /// Each row is a point; distances come from the configured metric.
    #[default]
    Points,
    /// Row `i`, column `j` holds the precomputed distance between `i` and `j`.
    DistanceMatrix,
}

impl DataKind {
    /// Stable numeric code used when the kind crosses a process boundary.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            DataKind::Points => 0,
            DataKind::DistanceMatrix => 1,
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataKind::Points => write!(f, "points"),
            DataKind::DistanceMatrix => write!(f, "distance_matrix"),
        }
    }
}

impl TryFrom<u8> for DataKind {
    type Error = KMedoidsError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(DataKind::Points),
            1 => Ok(DataKind::DistanceMatrix),
            other => Err(KMedoidsError::invalid_input_kind(format!(
                "type code '{}'",
                other
            ))),
        }
    }
}

impl FromStr for DataKind {
    type Err = KMedoidsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "points" => Ok(DataKind::Points),
            "distance_matrix" | "distance-matrix" | "matrix" => Ok(DataKind::DistanceMatrix),
            other => Err(KMedoidsError::invalid_input_kind(format!("'{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_kind_codes() {
        assert_eq!(DataKind::try_from(0).unwrap(), DataKind::Points);
        assert_eq!(DataKind::try_from(1).unwrap(), DataKind::DistanceMatrix);
        assert_eq!(DataKind::DistanceMatrix.code(), 1);

        let err = DataKind::try_from(2).unwrap_err();
        assert!(matches!(err, KMedoidsError::InvalidInputKind(_)));
    }

    #[test]
    fn test_data_kind_parse() {
        assert_eq!("points".parse::<DataKind>().unwrap(), DataKind::Points);
        assert_eq!(
            " Distance_Matrix ".parse::<DataKind>().unwrap(),
            DataKind::DistanceMatrix
        );
        assert!(matches!(
            "graph".parse::<DataKind>(),
            Err(KMedoidsError::InvalidInputKind(_))
        ));
    }

    #[test]
    fn test_data_kind_display_roundtrips() {
        for kind in [DataKind::Points, DataKind::DistanceMatrix] {
            assert_eq!(kind.to_string().parse::<DataKind>().unwrap(), kind);
        }
    }
}
