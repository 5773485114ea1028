use super::template::TemplateOptions;
use clap::{Parser, Subcommand};
use std::fmt::Display;

/// Generate a shareable template from a .env file.
///
/// Comments and `# //` section headers are kept, every value is replaced by the last
/// `[DEFAULT: ...]` declared in a comment above it, or left empty.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Envplate {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[clap(flatten)]
    pub options: TemplateOptions,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Write the template, the default when no command is given
    #[default]
    Generate,
    /// Shorthand for generate
    G,
    /// Exit with 1 if the template is missing or out of date
    Check,
    /// Print the template to stdout instead of writing it
    Print,
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Generate | Command::G => write!(f, "Generating template"),
            Command::Check => write!(f, "Checking template"),
            Command::Print => write!(f, "Rendering template"),
        }
    }
}
