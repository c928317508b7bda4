use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sqlsift",
    version,
    about = "Behavioral clustering for captured SQL execution statistics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Cluster one snapshot and export the report
    Analyze(AnalyzeArgs),
    /// Write a sample config and snapshot to get started
    Init(InitArgs),
    /// Check a run configuration without analyzing anything
    Validate(ValidateArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Snapshot of captured SQL execution statistics (JSON array)
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Run configuration (YAML); flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of clusters to request
    #[arg(long)]
    pub k: Option<usize>,

    /// Clustering algorithm
    #[arg(long)]
    pub algorithm: Option<String>,

    /// Seed for centroid initialization (reproducible runs)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export format: json|csv|html
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Export path; the report goes to stdout when omitted
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Suppress the console summary on stderr
    #[arg(long)]
    pub quiet: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct InitArgs {
    #[arg(long, default_value = "sqlsift.yaml")]
    pub config: PathBuf,

    #[arg(long, default_value = "snapshot.sample.json")]
    pub snapshot: PathBuf,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    #[arg(long, default_value = "sqlsift.yaml")]
    pub config: PathBuf,

    /// Output format: text|json
    #[arg(long, default_value = "text")]
    pub format: String,
}
