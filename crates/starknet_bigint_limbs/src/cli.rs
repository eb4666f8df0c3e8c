use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use num_bigint::BigInt;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::reload::Handle;
use tracing_subscriber::Registry;

use crate::config::{parse_integer, LimbsConfig};
use crate::errors::LimbsResult;
use crate::tracing_utils::modify_log_level;
use crate::vectors::{format_limbs, TestVectors};

#[cfg(test)]
#[path = "cli_test.rs"]
pub mod cli_test;

const STDOUT: &str = "stdout";

/// Big integer limbs CLI.
#[derive(Debug, Parser)]
#[clap(name = "bigint-limbs-cli", version)]
pub struct CliArgs {
    #[clap(flatten)]
    pub global_options: GlobalOptions,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOptions {
    /// Path to a JSON limbs config. If not given, uses the BN254 prime in three 86-bit limbs.
    #[clap(long, global = true)]
    pub config_path: Option<PathBuf>,

    #[clap(long, global = true, default_value = "info")]
    pub log_level: String,

    /// File path to output.
    #[clap(long, short = 'o', global = true, default_value = STDOUT)]
    pub output_path: String,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct OperandArgs {
    /// Limbs of the first operand, least significant first, comma separated.
    #[clap(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub x: Vec<String>,

    /// Limbs of the second operand, least significant first, comma separated.
    #[clap(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub y: Vec<String>,
}

impl OperandArgs {
    fn parse(&self) -> LimbsResult<(Vec<BigInt>, Vec<BigInt>)> {
        Ok((parse_limbs(&self.x)?, parse_limbs(&self.y)?))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints the modular sums and differences of the fixture operands.
    GenerateVectors {
        #[clap(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Splits a non-negative integer into limbs.
    Split {
        #[clap(allow_hyphen_values = true)]
        value: String,
    },
    /// Evaluates limbs given least significant first.
    Evaluate {
        #[clap(required = true, allow_hyphen_values = true)]
        limbs: Vec<String>,
    },
    /// Limbs of `(x + y) mod p`.
    AddMod(OperandArgs),
    /// Limbs of `(x - y) mod p`.
    SubMod(OperandArgs),
    /// Carry and borrow flags of the limb-wise addition `x + y`.
    AdditionFlags(OperandArgs),
}

fn parse_limbs(limbs: &[String]) -> LimbsResult<Vec<BigInt>> {
    limbs.iter().map(|limb| parse_integer(limb)).collect()
}

/// Runs a single command and returns its output.
pub fn run_command(command: &Command, config: &LimbsConfig) -> LimbsResult<String> {
    let output = match command {
        Command::GenerateVectors { format } => {
            let vectors = TestVectors::generate(&config.prime_field()?)?;
            match format {
                OutputFormat::Text => vectors.to_text(),
                OutputFormat::Json => vectors.to_json()? + "\n",
            }
        }
        Command::Split { value } => {
            format_limbs(&config.basis()?.split(&parse_integer(value)?)?) + "\n"
        }
        Command::Evaluate { limbs } => {
            format!("{}\n", config.basis()?.evaluate(&parse_limbs(limbs)?))
        }
        Command::AddMod(operands) => {
            let (x, y) = operands.parse()?;
            format_limbs(&config.prime_field()?.add(&x, &y)?) + "\n"
        }
        Command::SubMod(operands) => {
            let (x, y) = operands.parse()?;
            format_limbs(&config.prime_field()?.sub(&x, &y)?) + "\n"
        }
        Command::AdditionFlags(operands) => {
            let (x, y) = operands.parse()?;
            serde_json::to_string(&config.prime_field()?.addition_flags(&x, &y)?)? + "\n"
        }
    };
    Ok(output)
}

pub fn write_output(output_path: &str, output: &str) -> LimbsResult<()> {
    if output_path == STDOUT {
        print!("{output}");
    } else {
        fs::write(output_path, output)?;
        info!("Wrote {} bytes to {output_path}.", output.len());
    }
    Ok(())
}

pub fn run_cli(
    args: CliArgs,
    log_filter_handle: &Handle<LevelFilter, Registry>,
) -> LimbsResult<()> {
    modify_log_level(&args.global_options.log_level, log_filter_handle)?;
    info!("Starting bigint-limbs-cli with args: \n{:?}", args);

    let CliArgs { global_options, command } = args;

    let config = LimbsConfig::load(global_options.config_path.as_deref())?;
    info!("Running {command:?} with {config:?}.");
    let output = run_command(&command, &config)?;
    write_output(&global_options.output_path, &output)
}
