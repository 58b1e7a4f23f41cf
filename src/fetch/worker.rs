//! Background fetch worker.
//!
//! One task owns the `EnvelopeSource` and serves fetch commands from the
//! controller over an mpsc channel. Each command produces exactly one
//! response; source failures travel back as `Err` outcomes rather than
//! tearing the loop down, so a single bad endpoint never kills the pipeline.

use crate::fetch::protocol::{FetchCommand, FetchResponse};
use crate::fetch::source::EnvelopeSource;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Serve fetch commands until `Shutdown` or the command channel closes.
pub async fn fetch_worker_loop(
    mut cmd_rx: mpsc::Receiver<FetchCommand>,
    resp_tx: mpsc::Sender<FetchResponse>,
    source: Arc<dyn EnvelopeSource>,
) {
    while let Some(command) = cmd_rx.recv().await {
        match command {
            FetchCommand::Fetch {
                request_id,
                panel,
                request,
            } => {
                let outcome = source.fetch(&request).await;
                let response = FetchResponse::Completed {
                    request_id,
                    panel,
                    outcome,
                };
                if resp_tx.send(response).await.is_err() {
                    break;
                }
            }
            FetchCommand::Shutdown => break,
        }
    }
}
