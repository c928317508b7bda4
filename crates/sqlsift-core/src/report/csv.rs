use crate::model::ClusterReport;
use std::path::Path;

/// Flattened projection: one row per cluster member, cluster columns
/// repeated. Column names match the JSON field names.
pub fn to_csv_string(report: &ClusterReport) -> String {
    let mut out = String::new();
    out.push_str(
        "cluster_id,label,score,sql_id,elapsed_per_exec,cpu_per_exec,buffer_per_exec,executions,grade\n",
    );

    for c in &report.clusters {
        for m in &c.members {
            out.push_str(&format!(
                "{},{},{},{},{:.3},{:.3},{:.3},{},{}\n",
                c.id,
                escape(&c.label),
                c.score,
                escape(&m.sql_id),
                m.elapsed_per_exec,
                m.cpu_per_exec,
                m.buffer_per_exec,
                m.executions,
                m.grade.as_str(),
            ));
        }
    }
    out
}

pub fn write_csv(report: &ClusterReport, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, to_csv_string(report))?;
    Ok(())
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
