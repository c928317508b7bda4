use serde_json::json;

use sqlsift_core::config::load_params;
use sqlsift_core::engine::validate_params;

use super::exit_codes;
use crate::cli::args::ValidateArgs;

pub fn run(args: ValidateArgs) -> anyhow::Result<i32> {
    let json_output = args.format == "json";

    let params = match load_params(&args.config) {
        Ok(p) => p,
        Err(e) => {
            report(json_output, false, &e.to_string());
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    if let Err(e) = validate_params(&params) {
        report(json_output, false, &e.to_string());
        return Ok(exit_codes::CONFIG_ERROR);
    }

    report(
        json_output,
        true,
        &format!(
            "ok: k={} algorithm={} max_iterations={}",
            params.k, params.algorithm, params.max_iterations
        ),
    );
    Ok(exit_codes::OK)
}

fn report(json_output: bool, ok: bool, message: &str) {
    if json_output {
        println!("{}", json!({ "ok": ok, "message": message }));
    } else {
        println!("{}", message);
    }
}
