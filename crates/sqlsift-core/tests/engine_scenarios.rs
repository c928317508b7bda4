//! End-to-end scenarios over the clustering pipeline.

use sqlsift_core::characterize::build_clusters;
use sqlsift_core::engine::kmeans::KMeansEngine;
use sqlsift_core::engine::Analyzer;
use sqlsift_core::errors::AnalysisError;
use sqlsift_core::features::build_features;
use sqlsift_core::model::{AnalysisParams, SqlExecutionSample};
use sqlsift_core::normalize::normalize;

fn sample(
    sql_id: &str,
    elapsed: f64,
    cpu: f64,
    buffer: f64,
    executions: u64,
) -> SqlExecutionSample {
    SqlExecutionSample {
        sql_id: sql_id.into(),
        elapsed_time_ms: elapsed,
        cpu_time_ms: cpu,
        buffer_gets: buffer,
        disk_reads: 0.0,
        executions,
        rows_processed: 0,
    }
}

fn params(k: usize, seed: u64) -> AnalysisParams {
    AnalysisParams {
        k,
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn test_identical_samples_collapse_to_one_balanced_cluster() {
    // 10 identical samples and k=3: every dimension is degenerate, all
    // vectors coincide, and exactly one centroid ends up with members.
    let samples: Vec<_> = (0..10)
        .map(|i| sample(&format!("sql{}", i), 100.0, 50.0, 1000.0, 1))
        .collect();

    let analyzer = Analyzer::new(params(3, 7));
    let report = analyzer.run(&samples).unwrap();

    assert_eq!(report.clusters.len(), 1);
    let c = &report.clusters[0];
    assert_eq!(c.members.len(), 10);
    assert_eq!(c.label, "Balanced");
    assert_eq!(c.score, 100);
    assert_eq!(report.metadata.total_sql_count, 10);
}

#[test]
fn test_elapsed_outlier_forms_slow_queries_cluster() {
    // One statement at 5000 ms/exec against a background below 100 ms/exec.
    // Pinned centroids separate the outlier so the resulting labels are
    // exact: the outlier cluster must read "Slow Queries" with the elapsed
    // penalty applied.
    let mut samples: Vec<_> = (0..10)
        .map(|i| sample(&format!("sql{}", i), 50.0, 50.0, 1000.0, 1))
        .collect();
    samples.push(sample("outlier", 5000.0, 50.0, 1000.0, 1));

    let vectors = build_features(&samples).unwrap();
    let normalized = normalize(&vectors);

    let engine = KMeansEngine::new(2);
    let outcome = engine.run_with_centroids(
        &normalized,
        vec![[1.0, 0.0, 0.0, 0.0], [0.0, 0.0, 0.0, 0.0]],
    );
    let clusters = build_clusters(&vectors, &outcome);

    assert_eq!(clusters.len(), 2);
    let slow = clusters
        .iter()
        .find(|c| c.members.iter().any(|m| m.sql_id == "outlier"))
        .unwrap();
    assert_eq!(slow.members.len(), 1);
    assert_eq!(slow.label, "Slow Queries");
    assert!(slow.score <= 80);
    // Background cluster stays unremarkable.
    let rest = clusters.iter().find(|c| c.id != slow.id).unwrap();
    assert_eq!(rest.members.len(), 10);
    assert_eq!(rest.label, "Balanced");
}

#[test]
fn test_insufficient_population_fails_with_zero_clusters() {
    let samples: Vec<_> = (0..9)
        .map(|i| sample(&format!("sql{}", i), 100.0, 50.0, 1000.0, 1))
        .collect();

    let analyzer = Analyzer::new(params(3, 7));
    let err = analyzer.run(&samples).unwrap_err();
    assert_eq!(
        err,
        AnalysisError::InsufficientData {
            found: 9,
            required: 10
        }
    );
}

#[test]
fn test_zero_execution_sample_silently_excluded() {
    let mut samples: Vec<_> = (0..11)
        .map(|i| {
            sample(
                &format!("sql{}", i),
                100.0 + 10.0 * i as f64,
                50.0,
                1000.0,
                1 + i as u64,
            )
        })
        .collect();
    samples.push(sample("never_ran", 900.0, 400.0, 8000.0, 0));

    let analyzer = Analyzer::new(params(3, 21));
    let report = analyzer.run(&samples).unwrap();

    let reported: Vec<&str> = report
        .clusters
        .iter()
        .flat_map(|c| c.members.iter().map(|m| m.sql_id.as_str()))
        .collect();
    assert_eq!(reported.len(), samples.len() - 1);
    assert!(!reported.contains(&"never_ran"));
    assert_eq!(report.metadata.total_sql_count, samples.len() - 1);
}

#[test]
fn test_metadata_block() {
    let samples: Vec<_> = (0..10)
        .map(|i| sample(&format!("sql{}", i), 100.0, 50.0, 1000.0, 1))
        .collect();

    let analyzer = Analyzer::new(params(4, 3));
    let report = analyzer.run(&samples).unwrap();

    assert_eq!(report.metadata.algorithm, "kmeans");
    assert_eq!(report.metadata.k, 4);
    assert_eq!(report.metadata.total_sql_count, 10);
    assert!(!report.metadata.analysis_timestamp.is_empty());
}

#[test]
fn test_unsupported_algorithm_is_rejected_upfront() {
    let samples: Vec<_> = (0..10)
        .map(|i| sample(&format!("sql{}", i), 100.0, 50.0, 1000.0, 1))
        .collect();

    let analyzer = Analyzer::new(AnalysisParams {
        algorithm: "spectral".into(),
        ..Default::default()
    });
    let err = analyzer.run(&samples).unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedAlgorithm(_)));
}
