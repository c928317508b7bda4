use crate::model::ClusterReport;

const MAX_LISTED_MEMBERS: usize = 8;

/// Operator-facing summary on stderr, so stdout stays clean for exports.
pub fn print_summary(report: &ClusterReport) {
    eprintln!(
        "\nClustered {} SQL statements into {} clusters (k={}, algorithm={})",
        report.metadata.total_sql_count,
        report.clusters.len(),
        report.metadata.k,
        report.metadata.algorithm,
    );

    for c in &report.clusters {
        eprintln!(
            "\n[{}] {:<14} score {:>3}  {} members",
            c.id,
            c.label,
            c.score,
            c.members.len()
        );
        eprintln!(
            "    avg elapsed {:.1} ms | avg cpu {:.1} ms | avg buffer gets {:.1} | total execs {}",
            c.stats.avg_elapsed_ms,
            c.stats.avg_cpu_ms,
            c.stats.avg_buffer_gets,
            c.stats.total_executions,
        );

        for m in c.members.iter().take(MAX_LISTED_MEMBERS) {
            eprintln!(
                "    [{}] {:<20} elapsed/exec {:>9.1} ms  cpu/exec {:>8.1} ms  execs {}",
                m.grade.as_str(),
                m.sql_id,
                m.elapsed_per_exec,
                m.cpu_per_exec,
                m.executions,
            );
        }
        if c.members.len() > MAX_LISTED_MEMBERS {
            eprintln!("    ... and {} more", c.members.len() - MAX_LISTED_MEMBERS);
        }
    }

    eprintln!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let worst = report.clusters.iter().min_by_key(|c| c.score);
    if let Some(c) = worst {
        eprintln!(
            "Lowest scoring cluster: [{}] {} (score {})",
            c.id, c.label, c.score
        );
    }
}
