#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Perform one blocking status fetch against the job handle and feed
    /// the result back as `Msg::StatusReceived`.
    FetchStatus,
    /// Arm the poll timer for one interval from now.
    ScheduleTick,
    /// Arm the animation timer for the next render frame.
    ScheduleFrame,
    /// Tear down and exit with the given outcome.
    Quit(ExitOutcome),
}

/// Why the loop ended. Both map to a zero exit code; fatal errors take
/// the `Result` error path instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Completed,
    Cancelled,
}
