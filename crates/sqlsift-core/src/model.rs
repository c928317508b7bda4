use serde::{Deserialize, Serialize};

/// One captured SQL statement with cumulative execution statistics for a
/// connection and time window, as delivered by the metrics collector.
///
/// All metric fields are totals, not per-execution values. Field names are
/// part of the collector/dashboard wire contract and must not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqlExecutionSample {
    pub sql_id: String,
    pub elapsed_time_ms: f64,
    pub cpu_time_ms: f64,
    pub buffer_gets: f64,
    #[serde(default)]
    pub disk_reads: f64,
    pub executions: u64,
    #[serde(default)]
    pub rows_processed: u64,
}

/// Parameters for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisParams {
    /// Requested cluster count. Empty clusters are dropped from the result,
    /// so the report may contain fewer than `k` clusters.
    #[serde(default = "default_k")]
    pub k: usize,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Time-window hint for the metrics collector. The engine itself does
    /// not interpret it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
    /// Seed for centroid initialization. Unset means non-deterministic runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            k: default_k(),
            algorithm: default_algorithm(),
            minutes: None,
            seed: None,
            max_iterations: default_max_iterations(),
        }
    }
}

fn default_k() -> usize {
    5
}

fn default_algorithm() -> String {
    "kmeans".into()
}

fn default_max_iterations() -> usize {
    100
}

/// Coarse A-F letter derived from penalty-based scoring of one SQL
/// statement's execution cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Grade::A,
            65.. => Grade::B,
            50.. => Grade::C,
            35.. => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

/// One SQL statement inside a cluster, with its per-execution metrics in
/// original units and its individual performance grade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterMember {
    pub sql_id: String,
    pub elapsed_per_exec: f64,
    pub cpu_per_exec: f64,
    pub buffer_per_exec: f64,
    pub executions: u64,
    pub grade: Grade,
}

/// Cluster centroid mapped back to original units (means of the members'
/// per-execution values; `executions` is the mean raw execution count).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OriginalCentroid {
    pub elapsed_per_exec: f64,
    pub cpu_per_exec: f64,
    pub buffer_per_exec: f64,
    pub executions: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterStats {
    pub avg_elapsed_ms: f64,
    pub avg_cpu_ms: f64,
    pub avg_buffer_gets: f64,
    pub total_executions: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cluster {
    /// Index of the originating centroid. Stable for a given (input, seed)
    /// pair, meaningless across runs.
    pub id: usize,
    pub label: String,
    /// Heuristic performance score, 0-100.
    pub score: u32,
    pub members: Vec<ClusterMember>,
    pub centroid: OriginalCentroid,
    pub stats: ClusterStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunMetadata {
    pub algorithm: String,
    pub k: usize,
    /// Number of samples that participated in clustering, i.e. the snapshot
    /// minus zero-execution samples.
    pub total_sql_count: usize,
    pub analysis_timestamp: String,
}

/// Terminal output of one run. Clusters carry no identity across runs; a
/// new run produces an entirely new cluster set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterReport {
    pub clusters: Vec<Cluster>,
    pub metadata: RunMetadata,
}
