//! Generate, check or print the template of a .env file
use crate::{config::Config, error::CliError, print};
use clap::Args;
use colored::Colorize;
use envplate::Status;
use std::io::Write;

/// Exit code of a successful run, or of `check` with an up to date template
pub const SUCCESS: u8 = 0;

/// Exit code of a failed run, or of `check` with a stale template
pub const FAILURE: u8 = 1;

/// Options shared by every command
#[derive(Debug, Args, Default, Clone)]
pub struct TemplateOptions {
    /// The .env file to read. Defaults to `$ENVPLATE_INPUT` or ./.env
    #[arg(short, long, global = true)]
    pub path: Option<String>,

    /// Where to write the template. Defaults to `$ENVPLATE_OUTPUT` or ./.env.template
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Log level. Defaults to `$ENVPLATE_LOG` or warn
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print what's going on to stdout
    #[arg(short, long, action, global = true)]
    pub verbose: bool,
}

pub fn handle_generate(config: &Config) -> Result<u8, CliError> {
    let stats = envplate::generate(&config.input, &config.output)?;
    print(&format!(
        "{}{} ({stats})",
        "Successfully wrote ".green(),
        config.output.display()
    ));
    Ok(SUCCESS)
}

pub fn handle_check(config: &Config) -> Result<u8, CliError> {
    match envplate::check(&config.input, &config.output)? {
        Status::UpToDate => {
            print(&format!(
                "{}{}",
                "Up to date: ".green(),
                config.output.display()
            ));
            Ok(SUCCESS)
        }
        Status::Stale => {
            eprintln!(
                "{}{} does not match {}",
                "Stale template: ".yellow(),
                config.output.display(),
                config.input.display()
            );
            Ok(FAILURE)
        }
    }
}

pub fn handle_print(config: &Config) -> Result<u8, CliError> {
    let rendered = envplate::preview(&config.input)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.output.as_bytes())?;
    stdout.flush()?;
    Ok(SUCCESS)
}
