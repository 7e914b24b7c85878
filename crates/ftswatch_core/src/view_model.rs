use crate::LoopPhase;

/// Read-only projection of the monitor state for the renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonitorView {
    pub phase: LoopPhase,
    /// Displayed fraction. May briefly overshoot 1.0 if the service
    /// reports more sent than de-identified bundles; the renderer clamps.
    pub fraction: f64,
    pub terminal_width: u16,
    pub process_id: Option<String>,
}
