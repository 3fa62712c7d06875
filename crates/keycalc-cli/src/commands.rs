//! CLI command definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use keycalc::core::NumberLocale;

use crate::config::{CliConfig, ColorChoice, OutputFormat, Verbosity};

/// keycalc: a two-operand keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, global = true)]
    pub color: Option<ColorArg>,

    /// YAML config file; explicit flags override its values
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Applies explicitly given global flags on top of `base`
    #[must_use]
    pub fn apply_global_flags(&self, base: CliConfig) -> CliConfig {
        let mut config = base;
        if self.quiet || self.verbose > 0 {
            config = config.with_verbosity(Verbosity::from_flags(self.quiet, self.verbose));
        }
        if let Some(color) = self.color {
            config = config.with_color(color.into());
        }
        config
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive terminal calculator
    Tui(TuiArgs),

    /// Apply a scripted key sequence and print the display
    Run(RunArgs),

    /// Print the key bindings
    Keys,
}

/// Arguments for the tui command
#[derive(Parser, Debug)]
pub struct TuiArgs {
    /// Display locale (en, de, fr, ch, plain)
    #[arg(short, long)]
    pub locale: Option<NumberLocale>,

    /// Write logs to this file (the screen is never used for logs)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Keys to press, e.g. `1 2 + 3 =`, `Backspace`, `Escape`
    #[arg(required = true, value_name = "KEYS")]
    pub keys: Vec<String>,

    /// Display locale (en, de, fr, ch, plain)
    #[arg(short, long)]
    pub locale: Option<NumberLocale>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<FormatArg>,

    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Display lines
    #[default]
    Text,
    /// JSON report
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color choice argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
