//! keycalc: keypad calculator on the command line
//!
//! ## Usage
//!
//! ```bash
//! keycalc tui                         # Interactive terminal calculator
//! keycalc run 1 2 3 4 + 6 =           # Prints 1,240
//! keycalc run --locale de 1 2 3 4 . 5 # Prints 1.234,5
//! keycalc run --trace 5 + 3 + 2 =     # One display line per key
//! keycalc keys                        # Key bindings
//! ```

use std::process::ExitCode;

use clap::Parser;
use keycalc_cli::{
    build_config, logging, runner, tui, Cli, CliConfig, CliResult, Commands, RunArgs,
    ScriptRunner, TuiArgs,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    match cli.command {
        Commands::Tui(args) => run_tui(config, &args),
        Commands::Run(args) => run_script(config, &args),
        Commands::Keys => {
            println!("{}", runner::render_key_bindings(config.color.should_color()));
            Ok(())
        }
    }
}

fn run_tui(config: CliConfig, args: &TuiArgs) -> CliResult<()> {
    if let Some(path) = &args.log_file {
        logging::init_file(config.verbosity, path)?;
    }
    let config = match args.locale {
        Some(locale) => config.with_locale(locale),
        None => config,
    };
    tui::run(config.format_config())
}

fn run_script(config: CliConfig, args: &RunArgs) -> CliResult<()> {
    let color = config.color.should_color();
    logging::init_stderr(config.verbosity, color)?;

    let mut config = config;
    if let Some(locale) = args.locale {
        config = config.with_locale(locale);
    }
    if let Some(format) = args.format {
        config = config.with_output(format.into());
    }

    let report = ScriptRunner::new(config.format_config()).run(&args.keys, args.trace)?;
    println!("{}", runner::render(&report, config.output, color)?);
    Ok(())
}
