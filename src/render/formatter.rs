//! Generic envelope-to-HTML formatter.
//!
//! The formatter turns an arbitrary JSON response into a readable fragment
//! without per-endpoint templates. It is a pure function of its input and is
//! total over all JSON values: an unanticipated backend shape degrades to a
//! raw pretty-printed JSON block rather than an error.
//!
//! Recursion is bounded by an explicit [`Depth`] parameter. At the top level,
//! sequences become cards and mappings become humanized `Key: value` lines;
//! one level down, any nested container is shown verbatim as pretty-printed
//! JSON. The cutoff is deliberate and downstream callers rely on it.

use crate::render::envelope::{classify, is_reserved_key, Classification, SuccessBody};
use crate::render::html;
use serde_json::Value;

/// Remaining humanization budget for the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Humanize keys and lay out cards/lines.
    Top,
    /// One level in: containers render as pretty-printed JSON, verbatim.
    Nested,
}

/// Render a response envelope into an HTML fragment.
///
/// Success envelopes (`status == "success"`, `success == true`, or a `data` /
/// `result` payload field) render a success banner, the selected body, and —
/// when present — a delimited `Metadata` section. Anything else renders as a
/// raw pretty-printed JSON block, the designed degradation path for endpoints
/// this renderer was never taught.
pub fn render(envelope: &Value) -> String {
    match classify(envelope) {
        Classification::Success { body, metadata } => {
            let mut fragment = String::from("<div class=\"success-banner\">✅ Success</div>");
            match body {
                SuccessBody::Payload(payload) => fragment.push_str(&format_node(payload, Depth::Top)),
                SuccessBody::Residual(map) => {
                    let entries = map.iter().filter(|(key, _)| !is_reserved_key(key));
                    fragment.push_str(&format_entries(entries));
                }
            }
            if let Some(metadata) = metadata {
                fragment.push_str("<hr class=\"metadata-rule\"/>");
                fragment.push_str("<div class=\"metadata-section\">");
                fragment.push_str(&html::labeled_block(
                    "Metadata",
                    &format_node(metadata, Depth::Nested),
                ));
                fragment.push_str("</div>");
            }
            fragment
        }
        Classification::Fallback => html::pre_block(&pretty(envelope)),
    }
}

/// Render the fixed-format error fragment for the caller-driven error path.
///
/// Transport failures and backend-flagged error envelopes both land here and
/// never reach the success formatter.
pub fn render_error(message: &str) -> String {
    format!(
        "<div class=\"error-result\">❌ Error: {}</div>",
        html::escape(message)
    )
}

/// Recursively format a render node, honoring the one-level depth cutoff.
pub fn format_node(value: &Value, depth: Depth) -> String {
    if depth == Depth::Nested {
        return html::pre_block(&pretty(value));
    }
    match value {
        Value::Array(elements) => elements
            .iter()
            .map(|element| html::card(&format_node(element, Depth::Top)))
            .collect(),
        Value::Object(map) => format_entries(map.iter()),
        scalar => html::escape(&scalar_text(scalar)),
    }
}

/// Format mapping entries as humanized lines, in iteration order.
fn format_entries<'a>(entries: impl Iterator<Item = (&'a String, &'a Value)>) -> String {
    let mut out = String::new();
    for (key, value) in entries {
        let label = humanize_key(key);
        if is_container(value) {
            out.push_str(&html::labeled_block(&label, &format_node(value, Depth::Nested)));
        } else {
            out.push_str(&html::field_line(&label, &scalar_text(value)));
        }
    }
    out
}

/// Display-only key transform: underscores to spaces, then the first letter
/// of each word upper-cased (`min_intensity` → `Min Intensity`). Never used
/// for lookups.
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// True for mappings and sequences; `null` is deliberately a scalar here.
fn is_container(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

/// Scalar display text, unquoted for strings.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Pretty-printed JSON for verbatim blocks.
fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
