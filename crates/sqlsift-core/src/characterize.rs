//! Maps raw cluster membership back to original units and attaches the
//! heuristic triage layer: aggregate stats, score, label, per-member grades.

use crate::engine::kmeans::KMeansOutcome;
use crate::features::FeatureVector;
use crate::model::{Cluster, ClusterMember, ClusterStats, Grade, OriginalCentroid};

/// Threshold for the -20 elapsed-time penalty, in ms per execution.
pub const SLOW_ELAPSED_MS: f64 = 1000.0;
/// Threshold for the -15 CPU penalty, in ms per execution.
pub const HIGH_CPU_MS: f64 = 500.0;
/// Threshold for the -15 buffer-gets penalty, per execution.
pub const HIGH_BUFFER_GETS: f64 = 10000.0;

/// Label rules, evaluated top to bottom; the first match wins. Clusters
/// matching none of these are "Balanced".
pub const LABEL_RULES: &[(fn(&ClusterStats) -> bool, &str)] = &[
    (|s| s.avg_elapsed_ms > 2000.0, "Slow Queries"),
    (|s| s.avg_cpu_ms > 1000.0, "CPU Intensive"),
    (|s| s.avg_buffer_gets > 50000.0, "I/O Heavy"),
    (|s| s.total_executions > 10000, "High Frequency"),
];

pub const BALANCED_LABEL: &str = "Balanced";

pub fn label_for(stats: &ClusterStats) -> &'static str {
    for &(predicate, label) in LABEL_RULES {
        if predicate(stats) {
            return label;
        }
    }
    BALANCED_LABEL
}

/// Penalty score shared by clusters (against aggregates) and members
/// (against their own metrics). Penalties are independent and additive;
/// the result is floored at 0.
pub fn penalty_score(elapsed_ms: f64, cpu_ms: f64, buffer_gets: f64) -> u32 {
    let mut score = 100i32;
    if elapsed_ms > SLOW_ELAPSED_MS {
        score -= 20;
    }
    if cpu_ms > HIGH_CPU_MS {
        score -= 15;
    }
    if buffer_gets > HIGH_BUFFER_GETS {
        score -= 15;
    }
    score.max(0) as u32
}

/// Builds the final cluster set from a frozen k-means outcome.
///
/// Centroids that finished with zero members are omitted, so the reported
/// cluster count may be below k. Clusters come out sorted by descending
/// member count; the sort is stable over centroid-index order, which makes
/// ties deterministic for identical input order.
pub fn build_clusters(vectors: &[FeatureVector], outcome: &KMeansOutcome) -> Vec<Cluster> {
    let mut clusters = Vec::new();

    for centroid_idx in 0..outcome.centroids.len() {
        let member_indices: Vec<usize> = outcome
            .assignments
            .iter()
            .enumerate()
            .filter(|(_, &a)| a == centroid_idx)
            .map(|(i, _)| i)
            .collect();

        if member_indices.is_empty() {
            continue;
        }

        let n = member_indices.len() as f64;
        let mut sum_elapsed = 0.0;
        let mut sum_cpu = 0.0;
        let mut sum_buffer = 0.0;
        let mut sum_executions_f = 0.0;
        let mut total_executions = 0u64;
        for &i in &member_indices {
            let v = &vectors[i];
            sum_elapsed += v.elapsed_per_exec;
            sum_cpu += v.cpu_per_exec;
            sum_buffer += v.buffer_per_exec;
            sum_executions_f += v.executions as f64;
            total_executions += v.executions;
        }

        let stats = ClusterStats {
            avg_elapsed_ms: sum_elapsed / n,
            avg_cpu_ms: sum_cpu / n,
            avg_buffer_gets: sum_buffer / n,
            total_executions,
        };

        let members = member_indices
            .iter()
            .map(|&i| {
                let v = &vectors[i];
                let grade = Grade::from_score(penalty_score(
                    v.elapsed_per_exec,
                    v.cpu_per_exec,
                    v.buffer_per_exec,
                ));
                ClusterMember {
                    sql_id: v.sql_id.clone(),
                    elapsed_per_exec: v.elapsed_per_exec,
                    cpu_per_exec: v.cpu_per_exec,
                    buffer_per_exec: v.buffer_per_exec,
                    executions: v.executions,
                    grade,
                }
            })
            .collect();

        clusters.push(Cluster {
            id: centroid_idx,
            label: label_for(&stats).to_string(),
            score: penalty_score(stats.avg_elapsed_ms, stats.avg_cpu_ms, stats.avg_buffer_gets),
            members,
            centroid: OriginalCentroid {
                elapsed_per_exec: stats.avg_elapsed_ms,
                cpu_per_exec: stats.avg_cpu_ms,
                buffer_per_exec: stats.avg_buffer_gets,
                executions: sum_executions_f / n,
            },
            stats,
        });
    }

    clusters.sort_by(|a, b| b.members.len().cmp(&a.members.len()));
    clusters
}
