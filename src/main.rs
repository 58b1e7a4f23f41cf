//! renvelope - Generic JSON Envelope Renderer
//!
//! Demo driver: replays a canned endpoint fixture through the fetch pipeline
//! and prints the rendered HTML fragment.

use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    // Parse command-line arguments
    let matches = Command::new("renvelope")
        .version(renvelope::VERSION)
        .about("Render demo API JSON envelopes as HTML fragments")
        .long_about(
            "renvelope replays canned JSON responses for demo geo endpoints and renders \
             them into HTML fragments, the same pipeline the web panels drive.",
        )
        .arg(
            Arg::new("fixtures")
                .help("Directory holding <endpoint>.json fixture files")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("endpoint")
                .help("Endpoint path to replay, e.g. timetravel/geocode")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("payload")
                .long("payload")
                .help("JSON request body (opaque to the pipeline)")
                .default_value("{}"),
        )
        .get_matches();

    let fixtures = PathBuf::from(
        matches
            .get_one::<String>("fixtures")
            .expect("fixtures argument is required"),
    );
    let endpoint = matches
        .get_one::<String>("endpoint")
        .expect("endpoint argument is required")
        .clone();
    let payload: serde_json::Value = serde_json::from_str(
        matches
            .get_one::<String>("payload")
            .expect("payload has a default"),
    )
    .map_err(|err| {
        renvelope::RenvelopeError::invalid_argument(format!("--payload is not valid JSON: {err}"))
    })?;

    if !fixtures.is_dir() {
        anyhow::bail!("Fixture path is not a directory: {}", fixtures.display());
    }

    use renvelope::fetch::{fetch_worker_loop, FetchCommand, PanelRequest};
    use renvelope::{FixtureSource, UiController};

    const PANEL: &str = "demo";

    let source = Arc::new(FixtureSource::new(&fixtures));
    let (cmd_tx, cmd_rx) = mpsc::channel(4);
    let (resp_tx, mut resp_rx) = mpsc::channel(4);
    let worker = tokio::spawn(fetch_worker_loop(cmd_rx, resp_tx, source));

    use renvelope::RenvelopeError;

    let mut ui = UiController::new([PANEL]);
    let command = ui.begin_fetch(PANEL, PanelRequest { endpoint, payload })?;
    cmd_tx
        .send(command)
        .await
        .map_err(|_| RenvelopeError::worker_gone("fetch worker unavailable"))?;

    let response = resp_rx
        .recv()
        .await
        .ok_or_else(|| RenvelopeError::worker_gone("fetch worker exited without responding"))?;
    ui.handle_response(response)?;

    cmd_tx
        .send(FetchCommand::Shutdown)
        .await
        .map_err(|_| RenvelopeError::worker_gone("fetch worker unavailable"))?;
    worker.await?;

    let region = ui.region(PANEL)?;
    if let Some(fragment) = region.fragment() {
        println!("{fragment}");
    }
    if region.is_error() {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_constant() {
        // Ensure version is accessible
        assert!(!renvelope::VERSION.is_empty());
    }
}
