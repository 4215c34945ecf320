use crate::error::ValidationError;

/// Bound on the workload loop: a fixed number of rounds, or run until the
/// process is terminated. A tagged variant rather than a sentinel integer so
/// the loop condition dispatches on intent, not on a magic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounds {
    Finite(u64),
    Infinite,
}

impl Rounds {
    /// Whether another request may be issued after `issued` completed rounds.
    pub(crate) fn permits(self, issued: u64) -> bool {
        match self {
            Rounds::Finite(limit) => issued < limit,
            Rounds::Infinite => true,
        }
    }
}

impl std::str::FromStr for Rounds {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        if normalized.eq_ignore_ascii_case("infinite") {
            return Ok(Rounds::Infinite);
        }
        normalized
            .parse::<u64>()
            .map(Rounds::Finite)
            .map_err(|err| ValidationError::InvalidRounds {
                value: s.to_owned(),
                source: err,
            })
    }
}
