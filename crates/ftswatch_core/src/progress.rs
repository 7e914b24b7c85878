use crate::ProcessStatus;

/// Phase token the service reports once a process has fully finished.
pub const COMPLETED_PHASE: &str = "COMPLETED";

/// Derives the completion fraction from a status snapshot.
///
/// While no bundle has been de-identified yet the overall workload is
/// unknown, so the previous fraction is kept: no division by zero and no
/// bar regression to zero. The result is deliberately not clamped to
/// [0, 1]; the rendering layer clamps, which keeps counter overshoot
/// observable to callers.
pub fn fraction(status: &ProcessStatus, previous: f64) -> f64 {
    if status.deidentified_bundles == 0 {
        return previous;
    }
    (status.sent_bundles + status.skipped_bundles) as f64 / status.deidentified_bundles as f64
}

/// True only when the phase has flipped to completed *and* the fraction
/// accounts for every bundle.
///
/// Both conditions are required: a phase flip with lagging counters must
/// not terminate the loop early, and full counters without the phase
/// flip must keep polling.
pub fn is_complete(status: &ProcessStatus, fraction: f64) -> bool {
    status.phase == COMPLETED_PHASE && fraction == 1.0
}
