use crate::view_model::MonitorView;
use crate::ProcessStatus;

/// Where the poll loop is in its lifecycle.
///
/// `Complete` still accepts animation frames so the bar visibly reaches
/// its target before the quit; `Cancelled` accepts nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopPhase {
    /// Started, but the first poll timer has not fired yet.
    #[default]
    AwaitingFirstTick,
    Polling,
    Complete,
    Cancelled,
}

impl LoopPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, LoopPhase::Complete | LoopPhase::Cancelled)
    }
}

/// How far the displayed fraction moves toward the target per frame.
const FRAME_STEP: f64 = 0.05;

/// Mutable monitor state owned by the poll loop.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonitorState {
    phase: LoopPhase,
    target_fraction: f64,
    shown_fraction: f64,
    last_status: Option<ProcessStatus>,
    terminal_width: u16,
}

impl MonitorState {
    pub fn new(terminal_width: u16) -> Self {
        Self {
            terminal_width,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn last_status(&self) -> Option<&ProcessStatus> {
        self.last_status.as_ref()
    }

    pub fn target_fraction(&self) -> f64 {
        self.target_fraction
    }

    pub fn view(&self) -> MonitorView {
        MonitorView {
            phase: self.phase,
            fraction: self.shown_fraction,
            terminal_width: self.terminal_width,
            process_id: self
                .last_status
                .as_ref()
                .map(|status| status.process_id.clone()),
        }
    }

    pub(crate) fn begin_polling(&mut self) {
        self.phase = LoopPhase::Polling;
    }

    pub(crate) fn record_status(&mut self, status: ProcessStatus, fraction: f64) {
        self.target_fraction = fraction;
        self.last_status = Some(status);
    }

    pub(crate) fn mark_complete(&mut self) {
        self.phase = LoopPhase::Complete;
    }

    pub(crate) fn mark_cancelled(&mut self) {
        self.phase = LoopPhase::Cancelled;
    }

    pub(crate) fn set_terminal_width(&mut self, width: u16) {
        self.terminal_width = width;
    }

    pub(crate) fn needs_frames(&self) -> bool {
        self.shown_fraction != self.target_fraction
    }

    /// Moves the displayed fraction one step toward the target. Returns
    /// true while more frames are needed.
    pub(crate) fn advance_frame(&mut self) -> bool {
        let delta = self.target_fraction - self.shown_fraction;
        if delta.abs() <= FRAME_STEP {
            self.shown_fraction = self.target_fraction;
            false
        } else {
            self.shown_fraction += FRAME_STEP.copysign(delta);
            true
        }
    }
}
