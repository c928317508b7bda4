use crate::model::ClusterReport;
use std::path::Path;

pub fn to_json_string(report: &ClusterReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn write_json(report: &ClusterReport, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, to_json_string(report)?)?;
    Ok(())
}
