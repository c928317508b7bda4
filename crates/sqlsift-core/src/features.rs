use crate::errors::AnalysisError;
use crate::model::SqlExecutionSample;

/// Minimum snapshot size for a meaningful clustering run.
pub const MIN_POPULATION: usize = 10;

/// Feature-space dimensionality: elapsed/exec, cpu/exec, buffer gets/exec,
/// raw execution count.
pub const DIMENSIONS: usize = 4;

/// Per-execution cost metrics for one SQL statement. Immutable, rebuilt
/// from the snapshot on every run.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub sql_id: String,
    pub elapsed_per_exec: f64,
    pub cpu_per_exec: f64,
    pub buffer_per_exec: f64,
    pub executions: u64,
}

impl FeatureVector {
    pub fn dims(&self) -> [f64; DIMENSIONS] {
        [
            self.elapsed_per_exec,
            self.cpu_per_exec,
            self.buffer_per_exec,
            self.executions as f64,
        ]
    }
}

/// Converts raw per-SQL totals into per-execution cost metrics.
///
/// The population gate applies to the raw snapshot size. Samples with
/// `executions == 0` are then dropped silently as a divide-by-zero guard;
/// they carry no cost-per-execution signal.
pub fn build_features(
    samples: &[SqlExecutionSample],
) -> Result<Vec<FeatureVector>, AnalysisError> {
    if samples.len() < MIN_POPULATION {
        return Err(AnalysisError::InsufficientData {
            found: samples.len(),
            required: MIN_POPULATION,
        });
    }

    let mut vectors = Vec::with_capacity(samples.len());
    let mut excluded = 0usize;
    for s in samples {
        if s.executions == 0 {
            excluded += 1;
            continue;
        }
        let n = s.executions as f64;
        vectors.push(FeatureVector {
            sql_id: s.sql_id.clone(),
            elapsed_per_exec: s.elapsed_time_ms / n,
            cpu_per_exec: s.cpu_time_ms / n,
            buffer_per_exec: s.buffer_gets / n,
            executions: s.executions,
        });
    }

    if excluded > 0 {
        tracing::debug!(excluded, "dropped zero-execution samples from snapshot");
    }

    Ok(vectors)
}
