//! Turns a `.env` file into a template that can be committed alongside the code.
//!
//! Section headers (`# //...`) and comments are copied as they are, every `KEY=value`
//! assignment has its value replaced by the most recently declared `[DEFAULT: ...]`
//! and anything else becomes an empty line.

/// Classification of a single line of an env file.
pub mod line;

/// The rewriting pass over a whole document.
pub mod template;

/// Reading env files and writing templates to disk.
pub mod file;

/// Utilities for getting stuff from the env.
pub mod env;

/// A logger writing colored records to stderr.
pub mod logger;

mod error;

pub use error::EnvplateError;
pub use file::{check, generate, preview, Status};
pub use line::{DefaultValue, Line};
pub use template::{render, Rendered, Stats};

/// The file read when no input path is given.
pub const DEFAULT_INPUT: &str = ".env";

/// The file written when no output path is given.
pub const DEFAULT_OUTPUT: &str = ".env.template";
