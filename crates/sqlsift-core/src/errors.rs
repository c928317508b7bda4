use std::fmt;

/// Failures the engine can produce. Every one is a deterministic function of
/// the input and is surfaced synchronously; there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Snapshot population is below the minimum the clustering math needs.
    /// The caller must re-collect a larger snapshot.
    InsufficientData { found: usize, required: usize },
    /// Unknown algorithm name, or a cluster count below 1.
    UnsupportedAlgorithm(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InsufficientData { found, required } => write!(
                f,
                "insufficient data: {} samples in snapshot, at least {} required",
                found, required
            ),
            AnalysisError::UnsupportedAlgorithm(msg) => {
                write!(f, "unsupported algorithm: {}", msg)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

#[derive(Debug)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}
