//! Petvote core: pure state machine and view-model helpers.
mod effect;
mod format;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use format::{format_count, percentage_of};
pub use msg::Msg;
pub use state::{AppState, FetchRequest, ResultsState, SubmissionState, Tally, VoteOption};
pub use update::update;
pub use view_model::{build_view_model, AppViewModel, DisplayMode, ResultRow};
