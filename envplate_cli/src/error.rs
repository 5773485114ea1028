use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Envplate(#[from] envplate::EnvplateError),
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
}
