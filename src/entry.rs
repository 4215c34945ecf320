use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::app::{run_forward, run_workload};
use crate::args::{Command, DroverArgs};
use crate::error::{AppError, AppResult};
use crate::logger;

/// Exit code for fatal errors, after the diagnostic and usage text.
const FAILURE_EXIT_CODE: u8 = 2;

pub(crate) fn run() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => return report_failure(&err),
    };

    logger::init_logging(args.verbose);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => return report_failure(&AppError::from(err)),
    };

    match runtime.block_on(run_async(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err),
    }
}

async fn run_async(args: DroverArgs) -> AppResult<()> {
    match args.command {
        Command::Workload(workload_args) => run_workload(&workload_args).await,
        Command::Forward(forward_args) => run_forward(&forward_args).await,
    }
}

fn parse_args() -> AppResult<Option<DroverArgs>> {
    match DroverArgs::try_parse() {
        Ok(args) => Ok(Some(args)),
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            err.print()?;
            Ok(None)
        }
        Err(err) => Err(AppError::from(err)),
    }
}

/// Single sink for fatal errors: one diagnostic line naming the failure,
/// then the usage text, both on stderr.
fn report_failure(err: &AppError) -> ExitCode {
    eprintln!("Failure: {err}");
    eprintln!();
    eprintln!("{}", DroverArgs::command().render_help());
    ExitCode::from(FAILURE_EXIT_CODE)
}
