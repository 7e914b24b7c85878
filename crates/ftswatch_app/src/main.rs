mod cli;
mod error;
mod runner;
mod ui;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use monitor_logging::{monitor_error, monitor_info, LogDestination};

use ftswatch_core::ExitOutcome;
use ftswatch_engine::{MonitorClient, PollSettings};

use crate::cli::Args;
use crate::error::AppError;
use crate::runner::{CrosstermPump, LoopConfig, PollingSource};
use crate::ui::{TerminalSurface, Theme};

/// Cadence of the bar catch-up animation between polls.
const FRAME_INTERVAL: Duration = Duration::from_millis(60);

fn main() -> ExitCode {
    let args = Args::parse();
    match &args.log_file {
        Some(path) => monitor_logging::initialize(LogDestination::File(path.clone())),
        None => monitor_logging::initialize(LogDestination::Terminal),
    }

    match run(&args) {
        Ok(ExitOutcome::Completed) => {
            monitor_info!("transfer process completed");
            ExitCode::SUCCESS
        }
        Ok(ExitOutcome::Cancelled) => {
            monitor_info!("cancelled by user");
            ExitCode::SUCCESS
        }
        Err(err) => {
            monitor_error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitOutcome, AppError> {
    let base = args.base_url()?;
    monitor_info!("monitoring {} for project '{}'", base, args.project);

    let settings = PollSettings {
        max_attempts: args.retries.max(1),
        ..PollSettings::default()
    };
    let client = MonitorClient::new(settings)?;

    let handle = client.start_process(&base, &args.project)?;
    if handle.is_unavailable() {
        // Polling an empty address can only fail; refuse up front.
        return Err(AppError::StatusUnavailable);
    }
    monitor_info!("polling status at {}", handle.as_str());

    let initial_width = crossterm::terminal::size().map(|(width, _)| width).unwrap_or(80);
    let config = LoopConfig {
        tick_interval: Duration::from_secs(args.interval_secs.max(1)),
        frame_interval: FRAME_INTERVAL,
        initial_width,
    };

    let mut surface = TerminalSurface::new(Theme::default())?;
    let mut source = PollingSource::new(client, handle);
    let mut pump = CrosstermPump;

    let result = runner::run(&mut source, &mut pump, &config, |view| surface.draw(view));
    surface.restore()?;
    result
}
