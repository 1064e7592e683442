//! forge-medoids: parallel k-medoids clustering in Rust.
//!
//! This crate refines a caller-supplied set of medoids with PAM-style swap
//! search, over either raw points and a metric or a precomputed distance
//! matrix.
//!
//! # Features
//!
//! - **PAM Swap Search**: nearest/second-nearest bookkeeping makes each swap
//!   estimate O(n) instead of a full reassignment
//! - **Two Input Kinds**: points with a metric, or a square distance matrix
//! - **Multiple Distance Metrics**: Euclidean, squared Euclidean, Manhattan,
//!   Chebyshev, Minkowski, or any user-defined closure
//! - **Parallel Passes**: assignment and swap evaluation run on Rayon with
//!   thread-count-independent results
//!
//! # Example
//!
//! ```
//! use forge_medoids::{DataKind, DistanceMetric, KMedoids, KMedoidsConfig};
//!
//! let points = vec![
//!     vec![3.52, 5.49],
//!     vec![3.77, 5.36],
//!     vec![3.42, 5.42],
//!     vec![6.97, 7.76],
//!     vec![6.75, 7.27],
//!     vec![6.59, 7.85],
//! ];
//!
//! let config = KMedoidsConfig::new().with_tolerance(1e-4).with_max_iterations(100);
//! let solver = KMedoids::with_config(vec![0, 3], config, DistanceMetric::Euclidean);
//! let result = solver.process(&points, DataKind::Points).unwrap();
//!
//! println!("medoids: {:?}", result.medoids());
//! println!("total deviation: {}", result.total_deviation());
//! ```

pub mod config;
pub mod constants;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod kmedoids;
pub mod types;

// Re-export commonly used types at crate root
pub use config::KMedoidsConfig;
pub use dataset::Dataset;
pub use distance::{distance_matrix, DistanceMetric, DistanceProvider, Metric};
pub use error::{KMedoidsError, Result};
pub use kmedoids::{Clustering, KMedoids};
pub use types::DataKind;
