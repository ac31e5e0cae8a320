//! # mix-design
//!
//! Command-line front end for `mix_core`: proportions a concrete mix from
//! flags or a JSON input file and prints the quantities and the calculation
//! steps as text, markdown or JSON.

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

use clap::Parser;

use cli::Cli;
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("{}", error_report(&e));
        std::process::exit(1);
    }
}

/// Message printed to stderr for a failed command
fn error_report(e: &CliError) -> String {
    match e {
        CliError::Calc(calc) => format!("Error: {}\nCode:  {}", e, calc.error_code()),
        _ => format!("Error: {}", e),
    }
}
