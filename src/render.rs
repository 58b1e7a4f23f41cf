//! Rendering subsystem.
//!
//! Converts arbitrary success/error JSON envelopes into HTML fragments:
//! envelope classification, the recursive formatter with its one-level depth
//! cutoff, and the HTML helpers they share.

pub mod envelope;
pub mod formatter;
pub mod html;

pub use envelope::{classify, Classification, SuccessBody};
pub use formatter::{format_node, humanize_key, render, render_error, Depth};
