//! keycalc CLI library
//!
//! Command parsing, configuration layering, logging setup and the two
//! front ends (`run` for scripted keys, `tui` for the terminal app).

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod runner;
pub mod tui;

pub use commands::{Cli, ColorArg, Commands, FormatArg, RunArgs, TuiArgs};
pub use config::{CliConfig, ColorChoice, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use runner::{RunReport, ScriptRunner, Step};

/// Resolves the effective configuration: defaults, then the `--config`
/// file, then explicit global flags
pub fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let base = match &cli.config {
        Some(path) => CliConfig::from_yaml_file(path)?,
        None => CliConfig::new(),
    };
    Ok(cli.apply_global_flags(base))
}
