//! Protocol definitions shared between the UI controller and the fetch worker.

use crate::error::RenvelopeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier attached to fetch requests so responses can be correlated and
/// stale ones dropped.
pub type RequestId = u64;

/// A single panel-initiated backend call.
///
/// The endpoint path and JSON body are caller-defined per feature; the
/// pipeline treats both as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelRequest {
    /// Endpoint path, e.g. `timetravel/geocode`.
    pub endpoint: String,
    /// JSON request body forwarded to the source.
    pub payload: Value,
}

/// Commands sent from the controller to the fetch worker.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchCommand {
    Fetch {
        request_id: RequestId,
        /// Display region that owns this request's loading/error state.
        panel: String,
        request: PanelRequest,
    },
    Shutdown,
}

impl PanelRequest {
    /// Parse a request as submitted by a panel form.
    pub fn from_json(value: Value) -> crate::error::Result<Self> {
        let request = serde_json::from_value(value)?;
        Ok(request)
    }
}

/// Responses emitted by the fetch worker back to the controller.
///
/// The outcome carries the two-channel error model: `Ok` is a parsed envelope
/// for the success-render path, `Err` is a transport/parse/backend failure for
/// the error-render path. The worker never inspects envelope contents.
#[derive(Debug)]
pub enum FetchResponse {
    Completed {
        request_id: RequestId,
        panel: String,
        outcome: Result<Value, RenvelopeError>,
    },
}
