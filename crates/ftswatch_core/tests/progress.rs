use ftswatch_core::{fraction, is_complete, ProcessStatus, COMPLETED_PHASE};

fn status(phase: &str, sent: u64, skipped: u64, deidentified: u64) -> ProcessStatus {
    ProcessStatus {
        process_id: "p-1".to_string(),
        phase: phase.to_string(),
        sent_bundles: sent,
        skipped_bundles: skipped,
        deidentified_bundles: deidentified,
        ..ProcessStatus::default()
    }
}

#[test]
fn fraction_is_sent_plus_skipped_over_deidentified() {
    let s = status("RUNNING", 5, 0, 10);
    assert_eq!(fraction(&s, 0.0), 0.5);

    let s = status("RUNNING", 8, 2, 10);
    assert_eq!(fraction(&s, 0.5), 1.0);
}

#[test]
fn zero_deidentified_keeps_previous_fraction() {
    let s = status("RUNNING", 0, 0, 0);
    assert_eq!(fraction(&s, 0.0), 0.0);
    // A counter regression to zero must not reset the bar either.
    assert_eq!(fraction(&s, 0.7), 0.7);
}

#[test]
fn fraction_is_not_clamped_on_overshoot() {
    let s = status("RUNNING", 12, 0, 10);
    assert_eq!(fraction(&s, 0.0), 1.2);
}

#[test]
fn fraction_is_non_decreasing_for_non_decreasing_counters() {
    let snapshots = [
        status("RUNNING", 0, 0, 0),
        status("RUNNING", 0, 0, 10),
        status("RUNNING", 3, 1, 10),
        status("RUNNING", 5, 2, 10),
        status("RUNNING", 8, 2, 10),
    ];

    let mut previous = 0.0;
    for snapshot in &snapshots {
        let next = fraction(snapshot, previous);
        assert!(
            next >= previous,
            "fraction regressed from {previous} to {next}"
        );
        previous = next;
    }
    assert_eq!(previous, 1.0);
}

#[test]
fn completion_requires_phase_and_full_fraction() {
    // Phase flipped but counters lag: keep polling.
    let s = status(COMPLETED_PHASE, 5, 0, 10);
    let f = fraction(&s, 0.0);
    assert_eq!(f, 0.5);
    assert!(!is_complete(&s, f));

    // Counters done but phase has not flipped: keep polling.
    let s = status("SENDING", 8, 2, 10);
    let f = fraction(&s, 0.5);
    assert_eq!(f, 1.0);
    assert!(!is_complete(&s, f));

    // Both hold: done.
    let s = status(COMPLETED_PHASE, 8, 2, 10);
    let f = fraction(&s, 0.5);
    assert!(is_complete(&s, f));
}
