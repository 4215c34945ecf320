use thiserror::Error;

use super::{HttpError, ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

pub type AppResult<T> = Result<T, AppError>;
