use std::str::FromStr;

use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload::Handle;
use tracing_subscriber::{fmt, reload, Registry};

use crate::errors::LimbsResult;

#[cfg(test)]
#[path = "tracing_utils_test.rs"]
pub mod tracing_utils_test;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Initializes the global subscriber and returns a handle for changing the log level. Logs go to
/// stderr; stdout carries the command output.
pub fn configure_tracing() -> Handle<LevelFilter, Registry> {
    let (level_filter_layer, reload_handle) = reload::Layer::new(DEFAULT_LEVEL);
    let fmt_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(level_filter_layer).with(fmt_layer).init();
    reload_handle
}

pub fn modify_log_level(
    log_level: &str,
    log_filter_handle: &Handle<LevelFilter, Registry>,
) -> LimbsResult<()> {
    let level = LevelFilter::from_str(log_level)?;
    log_filter_handle.modify(|filter| *filter = level)?;
    info!("Log level set to {level}.");
    Ok(())
}
