//! # renvelope - Generic JSON Envelope Renderer
//!
//! Renders arbitrary success/error JSON envelopes from heterogeneous demo
//! APIs into readable HTML fragments, without per-endpoint templates.
//!
//! ## Features
//!
//! - **Total rendering**: every JSON value renders to a fragment; unknown
//!   shapes degrade to pretty-printed raw JSON instead of failing
//! - **One-level humanization**: mapping keys become title-cased labels at the
//!   top level only; deeper structures are shown verbatim as JSON blocks
//! - **Two-channel errors**: transport/backend failures take a fixed-format
//!   error fragment and never touch the success formatter
//! - **Explicit UI state**: one controller owns the active panel, per-panel
//!   display regions, and the append-only chat transcript
//!
//! ## Architecture
//!
//! The library is organized into focused modules following modern Rust patterns:
//!
//! - [`error`] - Centralized error types and handling
//! - [`render`] - Envelope classification and the HTML formatter
//! - [`fetch`] - Async fetch worker and the envelope source seam
//! - [`app`] - UI controller and response dispatch

// Core modules
pub mod error;
pub mod render;

// Pipeline around the renderer
pub mod app;
pub mod fetch;

// Re-export commonly used types for convenience
pub use error::{RenvelopeError, Result};

// Public API surface for external usage
pub use app::UiController;
pub use fetch::{EnvelopeSource, FixtureSource, PanelRequest, StaticSource};
pub use render::{render, render_error};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
