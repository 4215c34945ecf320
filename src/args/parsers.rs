use std::time::Duration;

use super::types::Rounds;
use crate::error::{AppError, AppResult, ValidationError};

pub(super) fn parse_rounds(s: &str) -> AppResult<Rounds> {
    s.parse::<Rounds>().map_err(AppError::from)
}

pub(super) fn parse_wait_secs(s: &str) -> AppResult<Duration> {
    let secs = s
        .trim()
        .parse::<u64>()
        .map_err(|err| ValidationError::InvalidWait {
            value: s.to_owned(),
            source: err,
        })?;
    Ok(Duration::from_secs(secs))
}
