use crate::error::EnvplateError;
use crate::template::{self, Rendered, Stats};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Whether a template on disk matches its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    UpToDate,
    /// The template differs from what the source renders to, or does not exist.
    Stale,
}

/// Renders the template of the env file at `input` and writes it to `output`,
/// overwriting whatever is there.
///
/// The input is read in full before the output is touched, so a missing or unreadable
/// input never truncates an existing template.
pub fn generate(input: &Path, output: &Path) -> Result<Stats, EnvplateError> {
    let Rendered { output: contents, stats } = preview(input)?;

    fs::write(output, contents).map_err(|e| EnvplateError::write(output, e))?;

    info!("Wrote {} to {}: {stats}", input.display(), output.display());

    Ok(stats)
}

/// Renders the template of the env file at `input` without writing anything.
pub fn preview(input: &Path) -> Result<Rendered, EnvplateError> {
    debug!("Reading {}", input.display());
    let source = fs::read_to_string(input).map_err(|e| EnvplateError::read(input, e))?;
    Ok(template::render(&source))
}

/// Checks whether the template at `output` is what `input` currently renders to.
pub fn check(input: &Path, output: &Path) -> Result<Status, EnvplateError> {
    let Rendered { output: expected, .. } = preview(input)?;

    let existing = match fs::read_to_string(output) {
        Ok(existing) => existing,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("{} does not exist", output.display());
            return Ok(Status::Stale);
        }
        Err(e) => return Err(EnvplateError::read(output, e)),
    };

    if existing == expected {
        Ok(Status::UpToDate)
    } else {
        info!("{} is out of date", output.display());
        Ok(Status::Stale)
    }
}
