mod app;
mod effects;
mod render;

use anyhow::Context;
use petvote_client::ClientConfig;
use vote_logging::LogDestination;

fn main() -> anyhow::Result<()> {
    vote_logging::initialize(LogDestination::File);

    let config = ClientConfig::from_env("PETVOTE_API_URL")
        .context("set PETVOTE_API_URL to the backend base URL, e.g. http://localhost:8000")?;

    app::run(config)
}
