use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid rounds value '{value}' (expected a count or 'infinite'): {source}")]
    InvalidRounds {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid wait duration '{value}' (expected whole seconds): {source}")]
    InvalidWait {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
