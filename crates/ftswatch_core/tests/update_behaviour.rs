use std::sync::Once;

use ftswatch_core::{
    update, Effect, ExitOutcome, LoopPhase, MonitorState, Msg, ProcessStatus, COMPLETED_PHASE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(monitor_logging::initialize_for_tests);
}

fn running_status(sent: u64, deidentified: u64) -> ProcessStatus {
    ProcessStatus {
        process_id: "p-1".to_string(),
        phase: "RUNNING".to_string(),
        sent_bundles: sent,
        deidentified_bundles: deidentified,
        ..ProcessStatus::default()
    }
}

fn completed_status(deidentified: u64) -> ProcessStatus {
    ProcessStatus {
        phase: COMPLETED_PHASE.to_string(),
        sent_bundles: deidentified,
        deidentified_bundles: deidentified,
        ..running_status(0, deidentified)
    }
}

/// Drains animation frames until the state stops asking for more.
fn drain_frames(mut state: MonitorState) -> (MonitorState, Vec<Effect>) {
    loop {
        let (next, effects) = update(state, Msg::FrameAdvance);
        state = next;
        if effects != vec![Effect::ScheduleFrame] {
            return (state, effects);
        }
    }
}

#[test]
fn tick_triggers_fetch_and_enters_polling() {
    init_logging();
    let state = MonitorState::new(80);
    assert_eq!(state.phase(), LoopPhase::AwaitingFirstTick);

    let (state, effects) = update(state, Msg::Tick);
    assert_eq!(state.phase(), LoopPhase::Polling);
    assert_eq!(effects, vec![Effect::FetchStatus]);
}

#[test]
fn incomplete_status_schedules_next_tick_only_after_resolution() {
    init_logging();
    let state = MonitorState::new(80);
    let (state, _) = update(state, Msg::Tick);

    let (state, effects) = update(state, Msg::StatusReceived(running_status(5, 10)));
    assert_eq!(state.phase(), LoopPhase::Polling);
    assert_eq!(state.target_fraction(), 0.5);
    assert_eq!(effects, vec![Effect::ScheduleTick, Effect::ScheduleFrame]);
}

#[test]
fn completed_phase_with_lagging_counters_keeps_polling() {
    init_logging();
    let state = MonitorState::new(80);
    let (state, _) = update(state, Msg::Tick);

    let lagging = ProcessStatus {
        phase: COMPLETED_PHASE.to_string(),
        ..running_status(5, 10)
    };
    let (state, effects) = update(state, Msg::StatusReceived(lagging));
    assert_eq!(state.phase(), LoopPhase::Polling);
    assert!(effects.contains(&Effect::ScheduleTick));
}

#[test]
fn completion_stops_ticks_and_quits_after_frames_drain() {
    init_logging();
    let state = MonitorState::new(80);
    let (state, _) = update(state, Msg::Tick);

    let (state, effects) = update(state, Msg::StatusReceived(completed_status(10)));
    assert_eq!(state.phase(), LoopPhase::Complete);
    assert_eq!(effects, vec![Effect::ScheduleFrame]);

    let (state, effects) = drain_frames(state);
    assert_eq!(effects, vec![Effect::Quit(ExitOutcome::Completed)]);
    assert_eq!(state.view().fraction, 1.0);
}

#[test]
fn keypress_cancels_from_every_non_terminal_phase() {
    init_logging();
    // Before the first tick.
    let state = MonitorState::new(80);
    let (state, effects) = update(state, Msg::KeyPressed);
    assert_eq!(state.phase(), LoopPhase::Cancelled);
    assert_eq!(effects, vec![Effect::Quit(ExitOutcome::Cancelled)]);

    // Right after a poll resolved, before the next tick fires.
    let state = MonitorState::new(80);
    let (state, _) = update(state, Msg::Tick);
    let (state, _) = update(state, Msg::StatusReceived(running_status(1, 10)));
    let (state, effects) = update(state, Msg::KeyPressed);
    assert_eq!(state.phase(), LoopPhase::Cancelled);
    assert_eq!(effects, vec![Effect::Quit(ExitOutcome::Cancelled)]);
}

#[test]
fn cancelled_state_ignores_all_further_events() {
    init_logging();
    let state = MonitorState::new(80);
    let (state, _) = update(state, Msg::KeyPressed);

    let (state, effects) = update(state, Msg::Tick);
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::StatusReceived(running_status(1, 10)));
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::FrameAdvance);
    assert!(effects.is_empty());
    assert_eq!(state.phase(), LoopPhase::Cancelled);
}

#[test]
fn complete_state_ignores_ticks_and_keys() {
    init_logging();
    let state = MonitorState::new(80);
    let (state, _) = update(state, Msg::Tick);
    let (state, _) = update(state, Msg::StatusReceived(completed_status(10)));
    assert_eq!(state.phase(), LoopPhase::Complete);

    let (state, effects) = update(state, Msg::Tick);
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::KeyPressed);
    assert!(effects.is_empty());
    assert_eq!(state.phase(), LoopPhase::Complete);
}

#[test]
fn resize_updates_layout_without_transition() {
    init_logging();
    let state = MonitorState::new(80);
    let (state, _) = update(state, Msg::Tick);

    let (state, effects) = update(state, Msg::Resized { width: 120 });
    assert!(effects.is_empty());
    assert_eq!(state.phase(), LoopPhase::Polling);
    assert_eq!(state.view().terminal_width, 120);
}

#[test]
fn frames_ease_the_displayed_fraction_toward_the_target() {
    init_logging();
    let state = MonitorState::new(80);
    let (state, _) = update(state, Msg::Tick);
    let (state, _) = update(state, Msg::StatusReceived(running_status(5, 10)));
    assert_eq!(state.view().fraction, 0.0);

    let (state, effects) = update(state, Msg::FrameAdvance);
    assert!(state.view().fraction > 0.0);
    assert!(state.view().fraction < 0.5);
    assert_eq!(effects, vec![Effect::ScheduleFrame]);

    let (state, effects) = drain_frames(state);
    assert_eq!(state.view().fraction, 0.5);
    assert!(effects.is_empty());
}

#[test]
fn status_replaces_previous_snapshot() {
    init_logging();
    let state = MonitorState::new(80);
    let (state, _) = update(state, Msg::Tick);
    let (state, _) = update(state, Msg::StatusReceived(running_status(2, 10)));
    let (state, _) = update(state, Msg::StatusReceived(running_status(7, 10)));

    let last = state.last_status().expect("a snapshot was recorded");
    assert_eq!(last.sent_bundles, 7);
    assert_eq!(state.target_fraction(), 0.7);
}
