use anyhow::Result;

mod args;
mod exit_status;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

/// Run the full pipeline on a single-threaded cooperative runtime.
///
/// Target-locale tasks are concurrent but never parallel; suspension
/// happens only at I/O and provider-call boundaries.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run::run(args))
}
