use crate::errors::ConfigError;
use crate::model::AnalysisParams;
use std::path::Path;

/// Loads run parameters from a YAML file. Missing keys take their
/// defaults; semantic validation (algorithm name, k) happens in
/// `engine::validate_params` so the error taxonomy stays in one place.
pub fn load_params(path: &Path) -> Result<AnalysisParams, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read config {}: {}", path.display(), e)))?;

    let params: AnalysisParams = serde_yaml::from_str(&raw)
        .map_err(|e| ConfigError(format!("failed to parse YAML: {}", e)))?;

    Ok(params)
}

pub fn write_sample_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(
        path,
        r#"# sqlsift run configuration
# Number of behavioral clusters to request. Empty clusters are dropped,
# so a run may report fewer.
k: 5
algorithm: kmeans
# Time window, in minutes, passed through to the metrics collector.
# minutes: 60
# Pin centroid initialization for reproducible runs.
# seed: 42
max_iterations: 100
"#,
    )
    .map_err(|e| ConfigError(format!("failed to write sample config: {}", e)))?;
    Ok(())
}

pub fn write_sample_snapshot(path: &Path) -> Result<(), ConfigError> {
    let samples: Vec<serde_json::Value> = (0..12)
        .map(|i| {
            serde_json::json!({
                "sql_id": format!("sample_{:02}", i),
                "elapsed_time_ms": 120.0 * (i + 1) as f64,
                "cpu_time_ms": 40.0 * (i + 1) as f64,
                "buffer_gets": 900.0 * (i + 1) as f64,
                "disk_reads": 10.0 * i as f64,
                "executions": i as u64 + 1,
                "rows_processed": 25 * (i as u64 + 1)
            })
        })
        .collect();

    let body = serde_json::to_string_pretty(&samples)
        .map_err(|e| ConfigError(format!("failed to serialize sample snapshot: {}", e)))?;
    std::fs::write(path, body)
        .map_err(|e| ConfigError(format!("failed to write sample snapshot: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_params_partial_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sqlsift.yaml");
        std::fs::write(&path, "k: 3\nseed: 7\n").unwrap();

        let params = load_params(&path).unwrap();
        assert_eq!(params.k, 3);
        assert_eq!(params.seed, Some(7));
        assert_eq!(params.algorithm, "kmeans");
        assert_eq!(params.max_iterations, 100);
    }

    #[test]
    fn test_sample_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sqlsift.yaml");
        write_sample_config(&path).unwrap();

        let params = load_params(&path).unwrap();
        assert_eq!(params.k, 5);
        assert_eq!(params.algorithm, "kmeans");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = load_params(Path::new("/nonexistent/sqlsift.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
