//! Benchmarks for the k-medoids optimizer on points and on distance matrices.
//!
//! Run with: cargo bench --bench kmedoids_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use forge_medoids::kmedoids::{assign, best_swap};
use forge_medoids::{DataKind, Dataset, DistanceMetric, DistanceProvider, KMedoids};

/// `k` blobs on a line, ten units apart.
fn blobs(k: usize, per_cluster: usize) -> Dataset {
    let centers: Vec<Vec<f64>> = (0..k).map(|i| vec![i as f64 * 10.0, 0.0]).collect();
    Dataset::generate_blobs(&centers, per_cluster, 2.0, 42).unwrap()
}

/// First `k` points: all in the first blob, so the optimizer has work to do.
fn crowded_medoids(k: usize) -> Vec<usize> {
    (0..k).collect()
}

fn benchmark_process(c: &mut Criterion) {
    let k = 4;

    for size in [200, 800] {
        let dataset = blobs(k, size / k);
        let matrix = dataset.distance_matrix(&DistanceMetric::Euclidean);
        let solver = KMedoids::new(crowded_medoids(k), DistanceMetric::Euclidean);

        let mut group = c.benchmark_group(format!("kmedoids_{}", size));
        group.sample_size(10);

        group.bench_function("points", |b| {
            b.iter(|| black_box(solver.process(dataset.points(), DataKind::Points).unwrap()))
        });
        group.bench_function("distance_matrix", |b| {
            b.iter(|| black_box(solver.process(&matrix, DataKind::DistanceMatrix).unwrap()))
        });

        group.finish();
    }
}

/// One assignment pass and one swap search, varying the number of medoids.
fn benchmark_single_pass(c: &mut Criterion) {
    let dataset = blobs(8, 125);
    let metric = DistanceMetric::EuclideanSquared;
    let provider = DistanceProvider::new(dataset.points(), DataKind::Points, &metric).unwrap();

    let mut group = c.benchmark_group("single_pass_1000");
    group.sample_size(10);

    for k in [2, 4, 8] {
        let medoids = crowded_medoids(k);
        let assignment = assign(&provider, &medoids);

        group.bench_with_input(BenchmarkId::new("assign", k), &medoids, |b, medoids| {
            b.iter(|| black_box(assign(&provider, medoids)))
        });
        group.bench_with_input(BenchmarkId::new("best_swap", k), &medoids, |b, medoids| {
            b.iter(|| black_box(best_swap(&provider, medoids, &assignment)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_process, benchmark_single_pass);
criterion_main!(benches);
