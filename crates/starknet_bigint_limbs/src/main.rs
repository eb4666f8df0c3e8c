use std::process::ExitCode;

use clap::Parser;
use starknet_bigint_limbs::cli::{run_cli, CliArgs};
use starknet_bigint_limbs::tracing_utils::configure_tracing;
use tracing::error;

/// Main entry point of the big integer limbs CLI.
fn main() -> ExitCode {
    // The default log level is INFO; the handle applies `--log-level`.
    let log_filter_handle = configure_tracing();

    let args = CliArgs::parse();

    match run_cli(args, &log_filter_handle) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("bigint-limbs-cli failed: {err}");
            // The log level may hide the error; stderr always carries it.
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
