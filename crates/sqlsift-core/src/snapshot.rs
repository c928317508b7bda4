//! Inbound boundary with the metrics collector: a snapshot is a JSON array
//! of execution samples for one connection and time window.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

use crate::model::SqlExecutionSample;

pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Vec<SqlExecutionSample>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open snapshot file: {}", path.display()))?;
    let samples: Vec<SqlExecutionSample> =
        serde_json::from_reader(file).context("failed to parse snapshot JSON")?;

    tracing::debug!(samples = samples.len(), "snapshot loaded");
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snap.json");
        std::fs::write(
            &path,
            r#"[
                {"sql_id": "a", "elapsed_time_ms": 10.0, "cpu_time_ms": 5.0,
                 "buffer_gets": 100.0, "disk_reads": 1.0, "executions": 2,
                 "rows_processed": 7}
            ]"#,
        )
        .unwrap();

        let samples = load_snapshot(&path).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].sql_id, "a");
        assert_eq!(samples[0].executions, 2);
    }

    #[test]
    fn test_malformed_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snap.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(load_snapshot(&path).is_err());
    }
}
