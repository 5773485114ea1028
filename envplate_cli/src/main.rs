mod commands;
mod config;
mod error;

use crate::commands::envplate::{Command, Envplate};
use crate::commands::template::{handle_check, handle_generate, handle_print, FAILURE};
use crate::config::Config;
use crate::error::CliError;
use clap::Parser;
use colored::Colorize;
use log::debug;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn main() -> ExitCode {
    let envplate = Envplate::parse();
    verbose(envplate.options.verbose);
    ExitCode::from(exit_code(run(envplate)))
}

fn run(envplate: Envplate) -> Result<u8, CliError> {
    let command = envplate.command.unwrap_or_default();
    let config = Config::resolve(envplate.options)?;

    envplate::logger::init(&config.log_level);
    debug!("Running with {config:?}");

    // Keep stdout clean for the rendered template
    if command != Command::Print {
        print(&command.to_string());
    }

    match command {
        Command::Generate | Command::G => handle_generate(&config),
        Command::Check => handle_check(&config),
        Command::Print => handle_print(&config),
    }
}

/// Reports an error on stderr and turns it into the failure code
fn exit_code(result: Result<u8, CliError>) -> u8 {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red());
            FAILURE
        }
    }
}

pub fn print(s: &str) {
    if VERBOSE.load(Ordering::SeqCst) {
        println!("{s}");
    }
}

fn verbose(v: bool) {
    VERBOSE.fetch_or(v, Ordering::SeqCst);
}
