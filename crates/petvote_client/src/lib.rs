//! Petvote client: HTTP+JSON access to the vote backend.
mod api;
mod client;
mod config;
mod types;

pub use api::{ApiSettings, HttpVoteBackend, VoteBackend};
pub use client::{ClientEvent, ClientHandle, RequestId};
pub use config::{ClientConfig, ConfigError};
pub use types::{AckStatus, ApiFailure, FailureKind, TallySnapshot, VoteAck, VoteChoice};
