//! Envelope classification for heterogeneous backend responses.
//!
//! Every backend endpoint returns its own JSON shape; the only structure shared
//! across them is the top-level envelope: a success discriminant (`status` /
//! `success`), an optional payload under `data` or `result`, and an optional
//! `metadata` field. This module decides which of those shapes an arbitrary
//! value matches, without validating anything — unknown shapes degrade to the
//! raw-JSON fallback instead of failing.

use serde_json::{Map, Value};

/// Envelope field carrying the preferred payload.
pub const DATA_KEY: &str = "data";
/// Envelope field carrying the secondary payload, used when `data` is absent.
pub const RESULT_KEY: &str = "result";
/// Envelope field rendered separately from the body, wherever it appears.
pub const METADATA_KEY: &str = "metadata";
/// String-valued success discriminant (`"status": "success"`).
pub const STATUS_KEY: &str = "status";
/// Boolean-valued success discriminant (`"success": true`).
pub const SUCCESS_KEY: &str = "success";

/// Payload selected for the success body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SuccessBody<'a> {
    /// The `data` or `result` field, in that priority order.
    Payload(&'a Value),
    /// No payload field; every envelope field except the discriminants and
    /// `metadata` renders instead, so unknown shapes still show something.
    Residual(&'a Map<String, Value>),
}

/// How an arbitrary response value should be rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification<'a> {
    /// Recognized success envelope: a body plus optional metadata.
    Success {
        body: SuccessBody<'a>,
        metadata: Option<&'a Value>,
    },
    /// No recognized success shape; the whole value renders as raw JSON.
    Fallback,
}

/// True when the envelope carries an explicit truthy success discriminant.
pub fn has_success_discriminant(envelope: &Map<String, Value>) -> bool {
    let status_ok = envelope
        .get(STATUS_KEY)
        .and_then(Value::as_str)
        .map(|status| status == "success")
        .unwrap_or(false);
    let success_ok = envelope
        .get(SUCCESS_KEY)
        .and_then(Value::as_bool)
        .unwrap_or(false);
    status_ok || success_ok
}

/// Classify a response value into a success envelope or the fallback path.
///
/// A `data` or `result` field counts as a success indicator even when the
/// discriminant fields are absent; callers that already know the response is
/// an error never reach this function (the error path is caller-driven).
pub fn classify(value: &Value) -> Classification<'_> {
    let Some(envelope) = value.as_object() else {
        return Classification::Fallback;
    };

    let payload = envelope.get(DATA_KEY).or_else(|| envelope.get(RESULT_KEY));
    let metadata = envelope.get(METADATA_KEY);

    if let Some(payload) = payload {
        return Classification::Success {
            body: SuccessBody::Payload(payload),
            metadata,
        };
    }

    if has_success_discriminant(envelope) {
        return Classification::Success {
            body: SuccessBody::Residual(envelope),
            metadata,
        };
    }

    Classification::Fallback
}

/// True for keys excluded from the residual body (discriminants and metadata).
pub fn is_reserved_key(key: &str) -> bool {
    matches!(key, STATUS_KEY | SUCCESS_KEY | METADATA_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_string_marks_success() {
        let envelope = json!({"status": "success", "data": {"city": "Beirut"}});
        let map = envelope.as_object().unwrap();
        assert!(has_success_discriminant(map));
    }

    #[test]
    fn success_bool_marks_success() {
        let envelope = json!({"success": true});
        assert!(has_success_discriminant(envelope.as_object().unwrap()));

        let envelope = json!({"success": false});
        assert!(!has_success_discriminant(envelope.as_object().unwrap()));
    }

    #[test]
    fn non_success_status_is_not_a_discriminant() {
        let envelope = json!({"status": "error"});
        assert!(!has_success_discriminant(envelope.as_object().unwrap()));
    }

    #[test]
    fn data_takes_precedence_over_result() {
        let envelope = json!({"data": {"a": 1}, "result": {"b": 2}});
        match classify(&envelope) {
            Classification::Success {
                body: SuccessBody::Payload(payload),
                ..
            } => assert_eq!(payload, &json!({"a": 1})),
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn result_is_used_when_data_absent() {
        let envelope = json!({"success": true, "result": [1, 2]});
        match classify(&envelope) {
            Classification::Success {
                body: SuccessBody::Payload(payload),
                ..
            } => assert_eq!(payload, &json!([1, 2])),
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn discriminant_without_payload_selects_residual_body() {
        let envelope = json!({"success": true, "origin": "Hamra", "destination": "AUB"});
        match classify(&envelope) {
            Classification::Success {
                body: SuccessBody::Residual(map),
                metadata: None,
            } => assert!(map.contains_key("origin")),
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn metadata_is_extracted_wherever_it_appears() {
        let envelope = json!({"metadata": {"count": 3}, "success": true, "result": []});
        match classify(&envelope) {
            Classification::Success {
                metadata: Some(meta),
                ..
            } => assert_eq!(meta, &json!({"count": 3})),
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn unknown_shape_falls_back() {
        assert_eq!(
            classify(&json!({"weird_field": "x"})),
            Classification::Fallback
        );
        assert_eq!(classify(&json!([1, 2, 3])), Classification::Fallback);
        assert_eq!(classify(&json!("plain")), Classification::Fallback);
        assert_eq!(classify(&Value::Null), Classification::Fallback);
    }

    #[test]
    fn reserved_keys_cover_discriminants_and_metadata() {
        assert!(is_reserved_key("status"));
        assert!(is_reserved_key("success"));
        assert!(is_reserved_key("metadata"));
        assert!(!is_reserved_key("data"));
        assert!(!is_reserved_key("origin"));
    }
}
