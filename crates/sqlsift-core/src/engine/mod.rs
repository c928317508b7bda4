pub mod kmeans;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::characterize;
use crate::errors::AnalysisError;
use crate::features;
use crate::model::{AnalysisParams, ClusterReport, RunMetadata, SqlExecutionSample};
use crate::normalize;
use kmeans::KMeansEngine;

pub const KMEANS_ALGORITHM: &str = "kmeans";

/// Rejects parameter combinations before any computation is attempted.
pub fn validate_params(params: &AnalysisParams) -> Result<(), AnalysisError> {
    if params.algorithm != KMEANS_ALGORITHM {
        return Err(AnalysisError::UnsupportedAlgorithm(format!(
            "'{}' (only '{}' is implemented)",
            params.algorithm, KMEANS_ALGORITHM
        )));
    }
    if params.k < 1 {
        return Err(AnalysisError::UnsupportedAlgorithm(
            "k must be at least 1".into(),
        ));
    }
    Ok(())
}

/// One-shot clustering pipeline over a static snapshot: feature extraction,
/// min-max normalization, k-means, characterization, report assembly.
///
/// A run is a pure in-memory computation with no shared state; concurrent
/// runs need no coordination. Any wall-clock budget is the caller's to
/// enforce around the whole run.
pub struct Analyzer {
    params: AnalysisParams,
}

impl Analyzer {
    pub fn new(params: AnalysisParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    pub fn run(&self, samples: &[SqlExecutionSample]) -> Result<ClusterReport, AnalysisError> {
        validate_params(&self.params)?;

        if let Some(minutes) = self.params.minutes {
            // Collector-side hint only; recorded for operators reading logs.
            tracing::debug!(minutes, "time window hint (consumed by the collector)");
        }

        let vectors = features::build_features(samples)?;
        let normalized = normalize::normalize(&vectors);

        let engine = KMeansEngine {
            k: self.params.k,
            max_iterations: self.params.max_iterations,
        };
        let outcome = match self.params.seed {
            Some(seed) => engine.run(&normalized, &mut StdRng::seed_from_u64(seed)),
            None => engine.run(&normalized, &mut StdRng::from_entropy()),
        };

        let clusters = characterize::build_clusters(&vectors, &outcome);

        tracing::info!(
            samples = vectors.len(),
            clusters = clusters.len(),
            k = self.params.k,
            iterations = outcome.iterations,
            converged = outcome.converged,
            "analysis run finished"
        );

        Ok(ClusterReport {
            clusters,
            metadata: RunMetadata {
                algorithm: self.params.algorithm.clone(),
                k: self.params.k,
                total_sql_count: vectors.len(),
                analysis_timestamp: chrono::Utc::now().to_rfc3339(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unknown_algorithm() {
        let params = AnalysisParams {
            algorithm: "dbscan".into(),
            ..Default::default()
        };
        let err = validate_params(&params).unwrap_err();
        assert!(matches!(err, AnalysisError::UnsupportedAlgorithm(_)));
    }

    #[test]
    fn test_rejects_zero_k() {
        let params = AnalysisParams {
            k: 0,
            ..Default::default()
        };
        let err = validate_params(&params).unwrap_err();
        assert!(matches!(err, AnalysisError::UnsupportedAlgorithm(_)));
    }

    #[test]
    fn test_no_computation_on_bad_params() {
        // Bad params must fail before the population gate gets a say.
        let analyzer = Analyzer::new(AnalysisParams {
            algorithm: "hierarchical".into(),
            ..Default::default()
        });
        let err = analyzer.run(&[]).unwrap_err();
        assert!(matches!(err, AnalysisError::UnsupportedAlgorithm(_)));
    }
}
