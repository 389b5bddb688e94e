use crate::{FetchRequest, Tally, VoteOption};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked one of the two vote buttons.
    VoteClicked(VoteOption),
    /// The backend acknowledged the in-flight vote.
    VoteSucceeded(VoteOption),
    /// The in-flight vote was rejected or never reached the backend.
    VoteFailed(String),
    /// User clicked "Vote again" after a confirmation or an error.
    VoteAgainClicked,
    /// User asked for a manual refresh of the results.
    RefreshClicked,
    /// A results fetch resolved.
    ResultsLoaded {
        request: FetchRequest,
        tally: Tally,
    },
    /// A results fetch failed.
    ResultsFailed {
        request: FetchRequest,
        message: String,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
