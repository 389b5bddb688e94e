use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use petvote_client::ClientConfig;
use petvote_core::{update, AppState, AppViewModel, Msg, VoteOption};

use crate::effects::EffectRunner;
use crate::render;

pub fn run(config: ClientConfig) -> anyhow::Result<()> {
    log::info!("starting petvote against {}", config.base_url());

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let quit = Arc::new(AtomicBool::new(false));
    let runner = EffectRunner::new(config, msg_tx.clone());

    spawn_input_reader(msg_tx, quit.clone());

    let (mut state, effects) = AppState::init();
    runner.enqueue(effects);
    state.consume_dirty();
    print_view(&state.view());

    while !quit.load(Ordering::Relaxed) {
        match msg_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(msg) => {
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.enqueue(effects);
                if state.consume_dirty() {
                    print_view(&state.view());
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    log::info!("exiting");
    Ok(())
}

fn print_view(view: &AppViewModel) {
    println!("{}", render::render(view));
    print!("> ");
    let _ = io::stdout().flush();
}

fn spawn_input_reader(msg_tx: mpsc::Sender<Msg>, quit: Arc<AtomicBool>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let command = line.trim().to_ascii_lowercase();
            if command.is_empty() {
                continue;
            }
            if matches!(command.as_str(), "quit" | "exit" | "q") {
                break;
            }
            match parse_command(&command) {
                Some(msg) => {
                    if msg_tx.send(msg).is_err() {
                        break;
                    }
                }
                None => println!("commands: cats, dogs, again, refresh, quit"),
            }
        }
        quit.store(true, Ordering::Relaxed);
    });
}

fn parse_command(command: &str) -> Option<Msg> {
    match command {
        "cats" => Some(Msg::VoteClicked(VoteOption::Cats)),
        "dogs" => Some(Msg::VoteClicked(VoteOption::Dogs)),
        "again" => Some(Msg::VoteAgainClicked),
        "refresh" => Some(Msg::RefreshClicked),
        _ => None,
    }
}
