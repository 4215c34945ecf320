use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use super::parsers::{parse_rounds, parse_wait_secs};
use super::types::Rounds;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Workload driver and log relay: periodically POSTs ranked form requests to a system under test, or forwards stdin log records to a Kafka REST proxy."
)]
pub struct DroverArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug-level diagnostics
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Periodically send ranked workload requests to the target endpoint
    Workload(WorkloadArgs),
    /// Forward newline-terminated JSON records from stdin to a Kafka REST proxy
    Forward(ForwardArgs),
}

#[derive(Debug, Args, Clone)]
pub struct WorkloadArgs {
    /// Target endpoint URL for workload POSTs
    #[arg(long, short = 'u', env = "DROVER_URL")]
    pub url: String,

    /// Client identifier sent as the 'client_id' form field
    #[arg(long = "client-id", env = "DROVER_CLIENT_ID")]
    pub client_id: u64,

    /// Seconds to wait between requests
    #[arg(long, env = "DROVER_WAIT", value_parser = parse_wait_secs)]
    pub wait: Duration,

    /// Number of requests to issue before stopping ('infinite' to run forever)
    #[arg(long, env = "DROVER_ROUNDS", default_value = "infinite", value_parser = parse_rounds)]
    pub rounds: Rounds,
}

#[derive(Debug, Args, Clone)]
pub struct ForwardArgs {
    /// Kafka REST proxy produce endpoint URL
    #[arg(long, short = 'u', env = "DROVER_URL")]
    pub url: String,

    /// Receiver identifier; when set, each record is wrapped in the
    /// attributed envelope instead of the plain one
    #[arg(long, env = "DROVER_RECEIVER")]
    pub receiver: Option<String>,
}
