//! tailwatch CLI - follow the end of a file in a full-screen view
//!
//! Usage: tailwatch FILE_PATH [NUMBER]
//!
//! NUMBER defaults to 10; -1 fits the terminal height.

mod cli;

use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::Parser;

use tailwatch::{
    config, follow, logging, read_tail, FollowOptions, LineBudget, NotifySource, Screen,
    TailwatchError, TailwatchResult, Viewport,
};

use cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                return ExitCode::from(1);
            }
        },
    };

    let _log_guard = match cli.log_file.as_deref() {
        Some(path) => match logging::init(path, cli.verbose) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("tailwatch: {:#}", e);
                return ExitCode::from(1);
            }
        },
        None => None,
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "exiting");
            eprintln!("tailwatch: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> TailwatchResult<()> {
    let (settings, warnings) = config::load_or_default(cli.config.as_deref())?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let options = FollowOptions {
        budget: cli.lines.unwrap_or_else(|| settings.budget()),
        path: cli.path,
        retry_interval: settings.retry_interval(),
        poll_interval: settings.poll_interval(),
    };

    // Existence, type and readability, before touching the terminal.
    read_tail(&options.path, LineBudget::Fixed(1), Viewport::default())?;

    let mut source = NotifySource::new()?;

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .map_err(|e| TailwatchError::SignalHandler {
        message: e.to_string(),
    })?;

    let mut screen = Screen::stdout()?;
    tracing::info!(fullscreen = screen.is_fullscreen(), "display ready");

    follow(&options, &mut source, &mut screen, &running)
}
