//! Envelope sources: where panel requests resolve to JSON.
//!
//! The demo backends synthesize canned data, so the transport itself is out of
//! scope here. `EnvelopeSource` is the seam: the worker only sees
//! `PanelRequest -> Result<Value>`. The shipped implementation replays
//! fixtures from disk; tests use an in-memory map.

use crate::error::{RenvelopeError, Result};
use crate::fetch::protocol::PanelRequest;
use crate::render::envelope::{STATUS_KEY, SUCCESS_KEY};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Envelope field carrying the failure message on backend-flagged errors.
const ERROR_KEY: &str = "error";

/// Route backend-flagged failure envelopes onto the error channel.
///
/// The demo backends mark failures in-band (`"success": false` plus an
/// `error` message, or `"status": "error"`). Those are well-formed JSON but
/// must take the error-render path, not the success formatter, so sources
/// screen them here and return `RenvelopeError::Backend`. Anything not
/// explicitly flagged passes through untouched.
pub fn screen_backend_failure(envelope: Value) -> Result<Value> {
    let flagged = envelope
        .as_object()
        .map(|map| {
            let success_false = map.get(SUCCESS_KEY).and_then(Value::as_bool) == Some(false);
            let status_error = map.get(STATUS_KEY).and_then(Value::as_str) == Some("error");
            success_false || status_error
        })
        .unwrap_or(false);
    if !flagged {
        return Ok(envelope);
    }

    let message = envelope
        .get(ERROR_KEY)
        .and_then(Value::as_str)
        .unwrap_or("backend reported a failure")
        .to_string();
    Err(RenvelopeError::backend(message))
}

/// Resolves a panel request to a response envelope.
#[async_trait]
pub trait EnvelopeSource: Send + Sync {
    /// Fetch the envelope for a request.
    ///
    /// `Err` means the error-render path: transport failure, unparseable
    /// response, or a backend-flagged failure. `Ok` values are handed to the
    /// renderer as-is, whatever their shape.
    async fn fetch(&self, request: &PanelRequest) -> Result<Value>;

    /// Fetch several requests concurrently, one outcome per request.
    ///
    /// Outcomes keep request order; failures stay per-request so one bad
    /// endpoint does not poison the batch.
    async fn fetch_many(&self, requests: &[PanelRequest]) -> Vec<Result<Value>> {
        futures::future::join_all(requests.iter().map(|request| self.fetch(request))).await
    }
}

/// Replays canned JSON responses from a fixture directory.
///
/// An endpoint `timetravel/geocode` maps to `<root>/timetravel_geocode.json`.
/// The request payload is ignored; fixtures are keyed by endpoint alone, which
/// matches the demo backends' synthesized answers.
pub struct FixtureSource {
    root: PathBuf,
}

impl FixtureSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn fixture_path(&self, endpoint: &str) -> PathBuf {
        let file_name = format!("{}.json", endpoint.replace('/', "_"));
        self.root.join(file_name)
    }
}

#[async_trait]
impl EnvelopeSource for FixtureSource {
    async fn fetch(&self, request: &PanelRequest) -> Result<Value> {
        let path = self.fixture_path(&request.endpoint);
        let bytes = tokio::fs::read(&path).await.map_err(|err| {
            RenvelopeError::fixture_io(
                format!("no fixture for endpoint '{}'", request.endpoint),
                err,
            )
        })?;
        let envelope = serde_json::from_slice(&bytes)?;
        screen_backend_failure(envelope)
    }
}

/// In-memory source for tests and the chat panel's scripted exchanges.
#[derive(Default)]
pub struct StaticSource {
    envelopes: HashMap<String, Value>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the envelope returned for an endpoint.
    pub fn insert(&mut self, endpoint: impl Into<String>, envelope: Value) {
        self.envelopes.insert(endpoint.into(), envelope);
    }
}

#[async_trait]
impl EnvelopeSource for StaticSource {
    async fn fetch(&self, request: &PanelRequest) -> Result<Value> {
        let envelope = self
            .envelopes
            .get(&request.endpoint)
            .cloned()
            .ok_or_else(|| {
                RenvelopeError::transport(format!("endpoint not reachable: {}", request.endpoint))
            })?;
        screen_backend_failure(envelope)
    }
}
