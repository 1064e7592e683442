//! Named constants for configuration values.
//!
//! Defaults for the optimization loop live here so they can be found and
//! tuned in one place.

/// Constants for the k-medoids optimization loop.
pub mod kmedoids {
    /// Default convergence tolerance.
    /// The loop stops once an accepted swap improves total deviation by no
    /// more than this amount.
    pub const DEFAULT_TOLERANCE: f64 = 0.0001;

    /// Default iteration budget.
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;
}

/// Constants for parallel passes.
pub mod parallel {
    /// Minimum number of swap candidates per rayon task.
    /// Keeps task overhead small relative to the O(n) cost of each candidate.
    pub const MIN_CANDIDATES_PER_TASK: usize = 16;

    /// Minimum number of points per rayon task in the assignment pass.
    pub const MIN_POINTS_PER_TASK: usize = 256;
}
