use crate::{progress, Effect, ExitOutcome, LoopPhase, MonitorState, Msg};

/// Pure update function: applies one event to the monitor state and
/// returns the effects the runner must execute.
pub fn update(mut state: MonitorState, msg: Msg) -> (MonitorState, Vec<Effect>) {
    let effects = match (state.phase(), msg) {
        // Cancelled is final: everything after the quit is ignored.
        (LoopPhase::Cancelled, _) => Vec::new(),
        // Layout-only update, valid in every phase that still renders.
        (_, Msg::Resized { width }) => {
            state.set_terminal_width(width);
            Vec::new()
        }
        // After completion only the bar catch-up animation remains; no
        // further polls are scheduled.
        (LoopPhase::Complete, Msg::FrameAdvance) => {
            if state.advance_frame() {
                vec![Effect::ScheduleFrame]
            } else {
                vec![Effect::Quit(ExitOutcome::Completed)]
            }
        }
        (LoopPhase::Complete, _) => Vec::new(),
        // Any keypress cancels, even one queued while a poll was in flight.
        (_, Msg::KeyPressed) => {
            state.mark_cancelled();
            vec![Effect::Quit(ExitOutcome::Cancelled)]
        }
        (_, Msg::Tick) => {
            state.begin_polling();
            vec![Effect::FetchStatus]
        }
        (_, Msg::StatusReceived(status)) => {
            let fraction = progress::fraction(&status, state.target_fraction());
            let complete = progress::is_complete(&status, fraction);
            state.record_status(status, fraction);
            if complete {
                state.mark_complete();
                vec![Effect::ScheduleFrame]
            } else if state.needs_frames() {
                // Next poll is armed only now that this one has fully
                // resolved; the fetch itself rate-limits the cadence.
                vec![Effect::ScheduleTick, Effect::ScheduleFrame]
            } else {
                vec![Effect::ScheduleTick]
            }
        }
        (_, Msg::FrameAdvance) => {
            if state.advance_frame() {
                vec![Effect::ScheduleFrame]
            } else {
                Vec::new()
            }
        }
    };

    (state, effects)
}
