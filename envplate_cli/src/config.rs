use crate::{commands::template::TemplateOptions, error::CliError};
use envplate::env::{self, INPUT_VAR, LOG_VAR, OUTPUT_VAR};
use envplate::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use std::path::PathBuf;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings for a single run, resolved from flags, then the env, then defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub log_level: String,
}

impl Config {
    pub fn resolve(options: TemplateOptions) -> Result<Self, CliError> {
        let TemplateOptions {
            path,
            output,
            log_level,
            ..
        } = options;

        Ok(Self {
            input: env::resolve(path, INPUT_VAR, DEFAULT_INPUT)?.into(),
            output: env::resolve(output, OUTPUT_VAR, DEFAULT_OUTPUT)?.into(),
            log_level: env::resolve(log_level, LOG_VAR, DEFAULT_LOG_LEVEL)?,
        })
    }
}
