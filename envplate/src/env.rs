use crate::error::EnvplateError;
use std::env::{self, VarError};

/// Overrides the env file that is read.
pub const INPUT_VAR: &str = "ENVPLATE_INPUT";

/// Overrides the template that is written.
pub const OUTPUT_VAR: &str = "ENVPLATE_OUTPUT";

/// Overrides the log level.
pub const LOG_VAR: &str = "ENVPLATE_LOG";

/// Gets an environment variable for the given key
pub fn get(key: &str) -> Result<String, VarError> {
    env::var(key)
}

/// Tries to load a variable from the shell env and if not found returns the provided default value.
///
/// A variable that is set but is not valid unicode is an error rather than silently defaulted.
pub fn get_or_default(key: &str, default: &str) -> Result<String, EnvplateError> {
    match get(key) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => Ok(String::from(default)),
        Err(e @ VarError::NotUnicode(_)) => Err(EnvplateError::Env(format!("{key}: {e}"))),
    }
}

/// Picks the explicitly given value, then the env variable under `key`, then `default`.
pub fn resolve(
    explicit: Option<String>,
    key: &str,
    default: &str,
) -> Result<String, EnvplateError> {
    match explicit {
        Some(value) => Ok(value),
        None => get_or_default(key, default),
    }
}
