//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;


pub use cli::{Command, DroverArgs, ForwardArgs, WorkloadArgs};
pub use types::Rounds;
