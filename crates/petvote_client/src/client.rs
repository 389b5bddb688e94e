use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::api::{ApiSettings, HttpVoteBackend, VoteBackend};
use crate::config::ClientConfig;
use crate::types::{ApiFailure, TallySnapshot, VoteAck, VoteChoice};

/// Caller-chosen tag carried through a results fetch, so responses can be
/// matched against the request that asked for them.
pub type RequestId = u64;

enum ClientCommand {
    SubmitVote { option: VoteChoice },
    FetchResults { request: RequestId },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    VoteCompleted {
        option: VoteChoice,
        result: Result<VoteAck, ApiFailure>,
    },
    ResultsCompleted {
        request: RequestId,
        result: Result<TallySnapshot, ApiFailure>,
    },
}

/// Bridge between a synchronous event loop and the async backend: commands
/// go in over a channel, a dedicated thread owns the tokio runtime, and
/// completion events come back out via [`try_recv`](ClientHandle::try_recv).
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ClientEvent>>>,
}

impl ClientHandle {
    pub fn new(config: ClientConfig, settings: ApiSettings) -> Self {
        Self::with_backend(Arc::new(HttpVoteBackend::new(config, settings)))
    }

    /// Runs against any backend implementation; used by tests to avoid
    /// real HTTP.
    pub fn with_backend(backend: Arc<dyn VoteBackend>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn submit_vote(&self, option: VoteChoice) {
        let _ = self.cmd_tx.send(ClientCommand::SubmitVote { option });
    }

    pub fn fetch_results(&self, request: RequestId) {
        let _ = self.cmd_tx.send(ClientCommand::FetchResults { request });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|rx| rx.try_recv().ok())
    }
}

async fn handle_command(
    backend: &dyn VoteBackend,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::SubmitVote { option } => {
            let result = backend.submit_vote(option).await;
            let _ = event_tx.send(ClientEvent::VoteCompleted { option, result });
        }
        ClientCommand::FetchResults { request } => {
            let result = backend.fetch_results().await;
            let _ = event_tx.send(ClientEvent::ResultsCompleted { request, result });
        }
    }
}
