use crate::{FetchRequest, VoteOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Send the option to the vote-recording endpoint. At most one of
    /// these is in flight at a time; the `Submitting` guard enforces it.
    SubmitVote(VoteOption),
    /// Fetch the current tally. Tagged so stale responses can be told
    /// apart from the latest request.
    FetchResults { request: FetchRequest },
}
