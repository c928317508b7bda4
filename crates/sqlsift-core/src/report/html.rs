use crate::model::ClusterReport;
use std::path::Path;

/// Flattened tabular summary. Styling belongs to the dashboard; this is a
/// plain table a browser or mail client can render as-is.
pub fn to_html_string(report: &ClusterReport) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\">");
    html.push_str("<title>SQL cluster report</title></head>\n<body>\n");
    html.push_str(&format!(
        "<h1>SQL cluster report</h1>\n<p>algorithm={} k={} statements={} at {}</p>\n",
        escape(&report.metadata.algorithm),
        report.metadata.k,
        report.metadata.total_sql_count,
        escape(&report.metadata.analysis_timestamp),
    ));

    html.push_str("<table border=\"1\">\n<tr><th>cluster</th><th>label</th><th>score</th>");
    html.push_str("<th>sql_id</th><th>elapsed/exec (ms)</th><th>cpu/exec (ms)</th>");
    html.push_str("<th>buffer gets/exec</th><th>executions</th><th>grade</th></tr>\n");

    for c in &report.clusters {
        for m in &c.members {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td><td>{:.1}</td><td>{:.1}</td><td>{}</td><td>{}</td></tr>\n",
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

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

pub fn write_html(report: &ClusterReport, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, to_html_string(report))?;
    Ok(())
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
