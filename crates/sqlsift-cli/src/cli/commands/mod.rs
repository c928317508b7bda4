pub mod analyze;
pub mod init;
pub mod validate;

use crate::cli::args::{Cli, Command};

pub mod exit_codes {
    /// Clean run with a delivered report.
    pub const OK: i32 = 0;
    /// The run produced no report: analysis error or export write failure.
    pub const RUN_FAILED: i32 = 1;
    /// Bad configuration or usage; also the generic fatal path out of
    /// `dispatch`.
    pub const CONFIG_ERROR: i32 = 2;
}

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Analyze(args) => analyze::run(args),
        Command::Init(args) => init::run(args),
        Command::Validate(args) => validate::run(args),
        Command::Version => {
            println!("sqlsift {}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::OK)
        }
    }
}
