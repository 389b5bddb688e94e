use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use petvote_client::{
    ApiSettings, ClientConfig, ClientEvent, ClientHandle, TallySnapshot, VoteChoice,
};
use petvote_core::{Effect, Msg, Tally, VoteOption};

/// Executes core effects against the backend client and pumps completion
/// events back into the message channel.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(config: ClientConfig, msg_tx: mpsc::Sender<Msg>) -> Self {
        let client = ClientHandle::new(config, ApiSettings::default());
        let runner = Self { client };
        runner.spawn_event_pump(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitVote(option) => {
                    log::info!("submitting vote option={}", map_option(option));
                    self.client.submit_vote(map_option(option));
                }
                Effect::FetchResults { request } => {
                    log::info!("fetching results request={request}");
                    self.client.fetch_results(request);
                }
            }
        }
    }

    fn spawn_event_pump(&self, msg_tx: mpsc::Sender<Msg>) {
        let client = self.client.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                if msg_tx.send(map_event(event)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::VoteCompleted { option, result } => match result {
            Ok(ack) => {
                if let Some(message) = ack.message {
                    log::info!("vote acknowledged: {message}");
                }
                Msg::VoteSucceeded(map_choice(option))
            }
            Err(failure) => {
                log::warn!("vote failed: {failure}");
                Msg::VoteFailed(failure.message)
            }
        },
        ClientEvent::ResultsCompleted { request, result } => match result {
            Ok(snapshot) => {
                if let Some(updated) = snapshot.last_updated {
                    log::debug!("results last updated at {updated}");
                }
                Msg::ResultsLoaded {
                    request,
                    tally: map_snapshot(&snapshot),
                }
            }
            Err(failure) => {
                log::warn!("results fetch failed: {failure}");
                Msg::ResultsFailed {
                    request,
                    message: failure.message,
                }
            }
        },
    }
}

fn map_option(option: VoteOption) -> VoteChoice {
    match option {
        VoteOption::Cats => VoteChoice::Cats,
        VoteOption::Dogs => VoteChoice::Dogs,
    }
}

fn map_choice(choice: VoteChoice) -> VoteOption {
    match choice {
        VoteChoice::Cats => VoteOption::Cats,
        VoteChoice::Dogs => VoteOption::Dogs,
    }
}

fn map_snapshot(snapshot: &TallySnapshot) -> Tally {
    // The wire total is ignored; the core recomputes it.
    Tally {
        cats: snapshot.cats,
        dogs: snapshot.dogs,
    }
}
