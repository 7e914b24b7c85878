use std::time::{Duration, Instant};

use monitor_logging::monitor_warn;

use ftswatch_core::{
    update, Effect, ExitOutcome, JobHandle, MonitorState, MonitorView, Msg, ProcessStatus,
};
use ftswatch_engine::{MonitorClient, StatusError};

use crate::error::AppError;

/// One blocking status fetch per poll tick.
pub trait StatusSource {
    fn fetch(&mut self) -> Result<ProcessStatus, StatusError>;
}

/// Live source: the HTTP client plus the handle obtained at launch.
pub struct PollingSource {
    client: MonitorClient,
    handle: JobHandle,
}

impl PollingSource {
    pub fn new(client: MonitorClient, handle: JobHandle) -> Self {
        Self { client, handle }
    }
}

impl StatusSource for PollingSource {
    fn fetch(&mut self) -> Result<ProcessStatus, StatusError> {
        self.client.fetch_status(&self.handle)
    }
}

/// Terminal-side input the loop waits on between timer deadlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key,
    Resize { width: u16 },
}

pub trait EventPump {
    /// Waits up to `timeout` for an input event. `None` means nothing
    /// relevant arrived; the caller re-checks its timer deadlines.
    fn wait(&mut self, timeout: Duration) -> std::io::Result<Option<InputEvent>>;
}

/// Reads key and resize events from the terminal.
pub struct CrosstermPump;

impl EventPump for CrosstermPump {
    fn wait(&mut self, timeout: Duration) -> std::io::Result<Option<InputEvent>> {
        use crossterm::event::{Event, KeyEventKind};

        if !crossterm::event::poll(timeout)? {
            return Ok(None);
        }
        match crossterm::event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(InputEvent::Key)),
            Event::Resize(width, _) => Ok(Some(InputEvent::Resize { width })),
            _ => Ok(None),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub tick_interval: Duration,
    pub frame_interval: Duration,
    pub initial_width: u16,
}

/// Upper bound on one wait when no timer is armed. Only reachable in
/// odd states; the loop normally always has a pending deadline.
const IDLE_WAIT: Duration = Duration::from_millis(250);

/// Drives the poll loop to its end: waits for the nearest timer or input
/// event, feeds it through the pure update function, executes the
/// resulting effects, and redraws after every transition.
///
/// Events are strictly sequential. The status fetch blocks inside the
/// tick that requested it, so a keypress arriving mid-fetch is queued
/// and cancels the loop as soon as the fetch resolves.
pub fn run<F>(
    source: &mut dyn StatusSource,
    pump: &mut dyn EventPump,
    config: &LoopConfig,
    mut draw: F,
) -> Result<ExitOutcome, AppError>
where
    F: FnMut(&MonitorView) -> std::io::Result<()>,
{
    let mut state = MonitorState::new(config.initial_width);
    let mut next_tick = Some(Instant::now() + config.tick_interval);
    let mut next_frame: Option<Instant> = None;

    draw(&state.view())?;

    loop {
        let now = Instant::now();
        let msg = if next_tick.is_some_and(|when| when <= now) {
            next_tick = None;
            Msg::Tick
        } else if next_frame.is_some_and(|when| when <= now) {
            next_frame = None;
            Msg::FrameAdvance
        } else {
            let deadline = [next_tick, next_frame].into_iter().flatten().min();
            let wait = deadline.map_or(IDLE_WAIT, |when| when.saturating_duration_since(now));
            match pump.wait(wait)? {
                Some(InputEvent::Key) => Msg::KeyPressed,
                Some(InputEvent::Resize { width }) => Msg::Resized { width },
                None => continue,
            }
        };

        let outcome = apply(&mut state, msg, source, &mut next_tick, &mut next_frame, config)?;
        draw(&state.view())?;
        if let Some(outcome) = outcome {
            return Ok(outcome);
        }
    }
}

/// Applies one event and executes its effects. A fetch feeds its result
/// straight back through `update` before any new timer is armed.
fn apply(
    state: &mut MonitorState,
    msg: Msg,
    source: &mut dyn StatusSource,
    next_tick: &mut Option<Instant>,
    next_frame: &mut Option<Instant>,
    config: &LoopConfig,
) -> Result<Option<ExitOutcome>, AppError> {
    let (next_state, effects) = update(std::mem::take(state), msg);
    *state = next_state;

    for effect in effects {
        match effect {
            Effect::FetchStatus => {
                let status = source.fetch()?;
                warn_on_counter_regression(state.last_status(), &status);
                let outcome = apply(
                    state,
                    Msg::StatusReceived(status),
                    source,
                    next_tick,
                    next_frame,
                    config,
                )?;
                if outcome.is_some() {
                    return Ok(outcome);
                }
            }
            Effect::ScheduleTick => {
                *next_tick = Some(Instant::now() + config.tick_interval);
            }
            Effect::ScheduleFrame => {
                if next_frame.is_none() {
                    *next_frame = Some(Instant::now() + config.frame_interval);
                }
            }
            Effect::Quit(outcome) => return Ok(Some(outcome)),
        }
    }
    Ok(None)
}

/// Counters are expected to be non-decreasing across polls; the bar
/// tolerates a regression, but it is worth a trace in the log.
fn warn_on_counter_regression(previous: Option<&ProcessStatus>, current: &ProcessStatus) {
    if let Some(prev) = previous {
        let went_backwards = current.sent_bundles + current.skipped_bundles
            < prev.sent_bundles + prev.skipped_bundles
            || current.deidentified_bundles < prev.deidentified_bundles;
        if went_backwards {
            monitor_warn!(
                "status counters regressed for process {}",
                current.process_id
            );
        }
    }
}
