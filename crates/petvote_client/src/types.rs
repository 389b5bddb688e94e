use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vote option on the wire, serialized as `"cats"` / `"dogs"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Cats,
    Dogs,
}

impl VoteChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            VoteChoice::Cats => "cats",
            VoteChoice::Dogs => "dogs",
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST {base}/api/vote`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct VoteRequest {
    pub option: VoteChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AckStatus {
    Success,
    Error,
}

/// 2xx response body of the vote endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VoteAck {
    pub status: AckStatus,
    #[serde(default)]
    pub message: Option<String>,
}

/// 2xx response body of the results endpoint.
///
/// `total` is informational only; callers must use [`total_votes`], which
/// recomputes it from the per-option counts. `last_updated` is the
/// backend's aggregation timestamp when it sends one.
///
/// [`total_votes`]: TallySnapshot::total_votes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TallySnapshot {
    pub cats: u64,
    pub dogs: u64,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl TallySnapshot {
    pub fn total_votes(&self) -> u64 {
        self.cats + self.dogs
    }
}

/// Normalized failure shape for anything that reaches the UI from a
/// backend interaction. `message` is already user-facing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiFailure {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The HTTP status, when a response was received at all.
    pub fn status_code(&self) -> Option<u16> {
        match self.kind {
            FailureKind::Http(code) => Some(code),
            FailureKind::Transport => None,
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::Http(code) => write!(f, "http status {code}: {}", self.message),
            FailureKind::Transport => write!(f, "transport failure: {}", self.message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No usable response was received.
    Transport,
    /// The backend answered with a non-success status.
    Http(u16),
}
