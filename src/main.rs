mod app;
mod args;
mod entry;
mod error;
mod http;
mod logger;

use std::process::ExitCode;

fn main() -> ExitCode {
    entry::run()
}
