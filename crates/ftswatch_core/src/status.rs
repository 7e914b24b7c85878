use chrono::{DateTime, Utc};

/// One decoded snapshot of a remote transfer process.
///
/// Replaced wholesale on every successful poll, never merged. The bundle
/// counters are assumed non-decreasing across polls of the same process;
/// a regression is tolerated by the progress derivation, not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessStatus {
    pub process_id: String,
    /// Free-form lifecycle token from the service. Only the completion
    /// value is interpreted; everything else means "in progress".
    pub phase: String,
    /// `None` until the process has been created on the remote side.
    pub created_at: Option<DateTime<Utc>>,
    /// `None` until the process has finished.
    pub finished_at: Option<DateTime<Utc>>,
    pub total_patients: u64,
    pub total_bundles: u64,
    pub deidentified_bundles: u64,
    pub sent_bundles: u64,
    pub skipped_bundles: u64,
}

/// Status-polling address reported by the service when a process starts.
///
/// The launch response may lack the address entirely; that produces an
/// *unavailable* handle rather than a launch failure, and callers decide
/// whether they can live with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    location: String,
}

impl JobHandle {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Handle for a started process whose status address is unknown.
    pub fn unavailable() -> Self {
        Self {
            location: String::new(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.location.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.location
    }
}
