//! Scalar distance function implementations.
//! These back every [`DistanceMetric`](super::DistanceMetric) variant.

/// Compute the Euclidean (L2) distance between two points.
///
/// Returns sqrt(sum((a[i] - b[i])^2))
#[inline]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    euclidean_distance_squared(a, b).sqrt()
}

/// Compute the squared Euclidean distance between two points.
///
/// Returns sum((a[i] - b[i])^2)
///
/// Does not satisfy the triangle inequality. The optimizer does not rely on
/// it, so this is a valid clustering dissimilarity.
#[inline]
pub fn euclidean_distance_squared(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Point dimensions must match");

    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}

/// Compute the Manhattan (L1) distance between two points.
///
/// Returns sum(|a[i] - b[i]|)
#[inline]
pub fn manhattan_distance(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Point dimensions must match");

    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
}

/// Compute the Chebyshev (L-infinity) distance between two points.
///
/// Returns max(|a[i] - b[i]|), or 0 for zero-dimensional points.
#[inline]
pub fn chebyshev_distance(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Point dimensions must match");

    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Compute the Minkowski distance of order `p` between two points.
///
/// Returns (sum(|a[i] - b[i]|^p))^(1/p). `p = 1` is Manhattan, `p = 2`
/// is Euclidean.
#[inline]
pub fn minkowski_distance(a: &[f64], b: &[f64], p: f64) -> f64 {
    assert_eq!(a.len(), b.len(), "Point dimensions must match");

    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs().powf(p))
        .sum();

    sum.powf(1.0 / p)
}
