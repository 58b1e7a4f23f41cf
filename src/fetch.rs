//! Fetch subsystem.
//!
//! Fetch-then-render as an explicit async pipeline: a worker task resolves
//! `PanelRequest`s through an `EnvelopeSource` and reports
//! `Result<Value, RenvelopeError>` outcomes back over a channel, where a
//! single dispatch point in the controller picks the success-render or
//! error-render path.

pub mod protocol;
pub mod source;
pub mod worker;

pub use protocol::{FetchCommand, FetchResponse, PanelRequest, RequestId};
pub use source::{screen_backend_failure, EnvelopeSource, FixtureSource, StaticSource};
pub use worker::fetch_worker_loop;
