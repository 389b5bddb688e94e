use std::time::Duration;

use serde::Deserialize;

use crate::config::ClientConfig;
use crate::types::{ApiFailure, FailureKind, TallySnapshot, VoteAck, VoteChoice, VoteRequest};

const NETWORK_ERROR: &str = "Network error. Please check your connection.";
const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Optional deadlines for backend calls. Both default to none: the client
/// imposes no timeout of its own, callers that need one configure it here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiSettings {
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

/// Seam between the state machine wiring and the HTTP transport. Tests
/// substitute a canned implementation here.
#[async_trait::async_trait]
pub trait VoteBackend: Send + Sync {
    /// Records one vote. A single attempt per call, never retried.
    async fn submit_vote(&self, option: VoteChoice) -> Result<VoteAck, ApiFailure>;

    /// Fetches the current tally. Idempotent and safe to call again.
    async fn fetch_results(&self) -> Result<TallySnapshot, ApiFailure>;
}

#[derive(Debug, Clone)]
pub struct HttpVoteBackend {
    config: ClientConfig,
    settings: ApiSettings,
}

impl HttpVoteBackend {
    pub fn new(config: ClientConfig, settings: ApiSettings) -> Self {
        Self { config, settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ApiFailure> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(map_request_error)
    }
}

#[async_trait::async_trait]
impl VoteBackend for HttpVoteBackend {
    async fn submit_vote(&self, option: VoteChoice) -> Result<VoteAck, ApiFailure> {
        let client = self.build_client()?;
        let response = client
            .post(self.config.vote_endpoint().clone())
            .json(&VoteRequest { option })
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(failure_from_response(response).await);
        }

        response.json::<VoteAck>().await.map_err(map_request_error)
    }

    async fn fetch_results(&self) -> Result<TallySnapshot, ApiFailure> {
        let client = self.build_client()?;
        let response = client
            .get(self.config.results_endpoint().clone())
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(failure_from_response(response).await);
        }

        response
            .json::<TallySnapshot>()
            .await
            .map_err(map_request_error)
    }
}

/// Error payload shape used by the backend on non-2xx responses. Both
/// field names occur in the wild; either one counts.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

/// Maps a non-success response to a user-facing failure. Known status
/// codes carry a fixed message; anything else falls back to the body's
/// message, then to a generic one.
async fn failure_from_response(response: reqwest::Response) -> ApiFailure {
    let status = response.status().as_u16();
    let body_message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message.or(body.detail));

    let message = match status {
        400 => "Invalid request. Please check your input.".to_string(),
        404 => "Service not found. Please try again later.".to_string(),
        422 => "Invalid vote option. Please select cats or dogs.".to_string(),
        500 => "Server error. Please try again later.".to_string(),
        503 => "Service temporarily unavailable. Please try again later.".to_string(),
        _ => body_message.unwrap_or_else(|| UNEXPECTED_ERROR.to_string()),
    };

    ApiFailure::new(FailureKind::Http(status), message)
}

fn map_request_error(err: reqwest::Error) -> ApiFailure {
    log::debug!("request failed before a usable response: {err}");
    if err.is_decode() {
        return ApiFailure::new(FailureKind::Transport, UNEXPECTED_ERROR);
    }
    ApiFailure::new(FailureKind::Transport, NETWORK_ERROR)
}
