use sqlsift_core::config::load_params;
use sqlsift_core::engine::Analyzer;
use sqlsift_core::model::AnalysisParams;
use sqlsift_core::report::{self, ExportFormat};
use sqlsift_core::snapshot::load_snapshot;

use super::exit_codes;
use crate::cli::args::AnalyzeArgs;

pub fn run(args: AnalyzeArgs) -> anyhow::Result<i32> {
    let mut params = match &args.config {
        Some(path) => match load_params(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{}", e);
                return Ok(exit_codes::CONFIG_ERROR);
            }
        },
        None => AnalysisParams::default(),
    };

    // Flag overrides beat config-file values.
    if let Some(k) = args.k {
        params.k = k;
    }
    if let Some(algorithm) = &args.algorithm {
        params.algorithm = algorithm.clone();
    }
    if let Some(seed) = args.seed {
        params.seed = Some(seed);
    }

    let format: ExportFormat = match args.format.parse() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    let samples = match load_snapshot(&args.snapshot) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("config error: {:#}", e);
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    let analyzer = Analyzer::new(params);
    let cluster_report = match analyzer.run(&samples) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("analysis failed: {}", e);
            return Ok(exit_codes::RUN_FAILED);
        }
    };

    if !args.quiet {
        report::console::print_summary(&cluster_report);
    }

    match &args.out {
        Some(out) => {
            let written = match format {
                ExportFormat::Json => report::json::write_json(&cluster_report, out),
                ExportFormat::Csv => report::csv::write_csv(&cluster_report, out),
                ExportFormat::Html => report::html::write_html(&cluster_report, out),
            };
            // The analysis succeeded; a failed write is a run failure, not
            // a config error.
            if let Err(e) = written {
                eprintln!("export error: {} ({:#})", out.display(), e);
                return Ok(exit_codes::RUN_FAILED);
            }
            eprintln!("report written to {}", out.display());
        }
        None => {
            let body = match format {
                ExportFormat::Json => report::json::to_json_string(&cluster_report)?,
                ExportFormat::Csv => report::csv::to_csv_string(&cluster_report),
                ExportFormat::Html => report::html::to_html_string(&cluster_report),
            };
            println!("{}", body);
        }
    }

    Ok(exit_codes::OK)
}
