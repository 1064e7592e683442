//! Basic usage example for the k-medoids optimizer.
//!
//! Run with: RUST_LOG=debug cargo run --example basic_usage

use forge_medoids::{DataKind, Dataset, DistanceMetric, KMedoids, KMedoidsConfig};

fn main() -> forge_medoids::Result<()> {
    env_logger::init();

    println!("=== K-Medoids Demo ===\n");

    let centers = vec![vec![0.0, 0.0], vec![20.0, 0.0], vec![0.0, 20.0]];
    let dataset = Dataset::generate_blobs(&centers, 50, 3.0, 42)?;
    println!(
        "Generated {} points around {} centers\n",
        dataset.len(),
        centers.len()
    );

    // Deliberately poor start: every medoid inside the first blob.
    let initial = vec![0, 1, 2];
    let config = KMedoidsConfig::new()
        .with_tolerance(1e-4)
        .with_max_iterations(100);
    let solver = KMedoids::with_config(initial.clone(), config, DistanceMetric::Euclidean);

    println!("=== Points Input ===\n");
    let start = std::time::Instant::now();
    let result = solver.process(dataset.points(), DataKind::Points)?;
    let elapsed = start.elapsed();

    println!("Initial medoids: {:?}", initial);
    println!("Final medoids:   {:?}", result.medoids());
    println!("Cluster sizes:   {:?}", result.clusters().iter().map(Vec::len).collect::<Vec<_>>());
    println!("Iterations:      {}", result.iterations());
    println!("Total deviation: {:.4}", result.total_deviation());
    println!("Completed in {:.2?}\n", elapsed);

    println!("Deviation per accepted swap:");
    for (step, deviation) in result.deviation_history().iter().enumerate() {
        println!("  {:>2}: {:.4}", step, deviation);
    }

    println!("\n=== Distance Matrix Input ===\n");
    let matrix = dataset.distance_matrix(&DistanceMetric::Euclidean);
    let from_matrix = solver.process(&matrix, DataKind::DistanceMatrix)?;

    println!("Final medoids:   {:?}", from_matrix.medoids());
    println!("Total deviation: {:.4}", from_matrix.total_deviation());
    println!(
        "Matches points input: {}",
        from_matrix.medoids() == result.medoids()
    );

    println!("\n=== Other Metrics ===\n");
    for metric in [
        DistanceMetric::Manhattan,
        DistanceMetric::Chebyshev,
        DistanceMetric::Minkowski(3.0),
    ] {
        let result = KMedoids::with_config(initial.clone(), config, metric)
            .process(dataset.points(), DataKind::Points)?;
        println!(
            "{:?}: medoids {:?}, deviation {:.4}",
            metric,
            result.medoids(),
            result.total_deviation()
        );
    }

    Ok(())
}
