//! ftswatch core: pure poll-loop state machine and progress derivation.
mod effect;
mod msg;
mod progress;
mod state;
mod status;
mod update;
mod view_model;

pub use effect::{Effect, ExitOutcome};
pub use msg::Msg;
pub use progress::{fraction, is_complete, COMPLETED_PHASE};
pub use state::{LoopPhase, MonitorState};
pub use status::{JobHandle, ProcessStatus};
pub use update::update;
pub use view_model::MonitorView;
