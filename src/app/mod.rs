//! The two operating loops: periodic workload issuance and log forwarding.
mod forward;
mod workload;

pub use forward::run_forward;
pub use workload::run_workload;
