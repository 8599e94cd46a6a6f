mod harness;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use ctest::Suite;
use thiserror::Error;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory for the rolling trace log.
    #[arg(short, long, default_value = "./logs")]
    log_dir: PathBuf,

    /// Run a single self-check group (counts, diagnostics, lifecycle).
    #[arg(short, long)]
    only: Option<String>,

    /// Treat a run that records nothing as a failure.
    #[arg(short, long)]
    strict: bool,
}

#[derive(Debug, Error)]
enum HarnessError {
    #[error("failed to initialise tracing: {0}")]
    Tracing(#[from] tracing_subscriber::util::TryInitError),

    #[error("{failed} of {total} unit tests failed")]
    Failed { failed: u64, total: u64 },

    #[error("no unit tests were run")]
    Empty,
}

fn main() -> ExitCode {
    let args = parse_command_line_args();

    let result = run(&args);
    if let Err(e) = &result {
        eprintln!("ctest: {}", e);
    }
    ExitCode::from(exit_status(&result))
}

fn run(args: &Args) -> Result<(), HarnessError> {
    let _guard = init_tracing(&args.log_dir)?;

    let mut suite = Suite::new();
    harness::run(&mut suite, args.only.as_deref());

    let (passed, failed, total) = (suite.count_pass(), suite.count_fail(), suite.count_test());
    suite.release();

    println!("{} passed, {} failed", passed, failed);
    let outcome = verdict(failed, total, args.strict);
    if let Err(e) = &outcome {
        error!("{}", e);
    }
    outcome
}

fn parse_command_line_args() -> Args {
    Args::parse()
}

fn init_tracing(log_dir: &Path) -> Result<WorkerGuard, HarnessError> {
    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::daily(log_dir, "trace.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer)
        .try_init()?;

    info!("Tracing initialised, logging to {}", log_dir.display());
    Ok(guard)
}

/// Maps the final tally to the process outcome.
fn verdict(failed: u64, total: u64, strict: bool) -> Result<(), HarnessError> {
    if failed > 0 {
        return Err(HarnessError::Failed { failed, total });
    }
    if strict && total == 0 {
        return Err(HarnessError::Empty);
    }
    Ok(())
}

fn exit_status(result: &Result<(), HarnessError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
