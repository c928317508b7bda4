use sqlsift_core::config::{write_sample_config, write_sample_snapshot};

use super::exit_codes;
use crate::cli::args::InitArgs;

pub fn run(args: InitArgs) -> anyhow::Result<i32> {
    if args.config.exists() {
        eprintln!("config error: {} already exists", args.config.display());
        return Ok(exit_codes::CONFIG_ERROR);
    }
    if args.snapshot.exists() {
        eprintln!("config error: {} already exists", args.snapshot.display());
        return Ok(exit_codes::CONFIG_ERROR);
    }

    write_sample_config(&args.config)?;
    write_sample_snapshot(&args.snapshot)?;

    eprintln!("wrote {}", args.config.display());
    eprintln!("wrote {}", args.snapshot.display());
    eprintln!(
        "try: sqlsift analyze --snapshot {} --config {}",
        args.snapshot.display(),
        args.config.display()
    );
    Ok(exit_codes::OK)
}
