//! Test assertions for result payloads.

use std::collections::HashMap;

/// Asserts that the payload's `"changed"` field equals the expected value.
pub fn assert_payload_changed(
    payload: &HashMap<String, serde_json::Value>,
    expected: bool,
) {
    let actual = payload.get("changed").and_then(serde_json::Value::as_bool);
    assert_eq!(
        actual,
        Some(expected),
        "Expected changed={expected}, got {actual:?}. Payload: {payload:?}"
    );
}

/// Asserts that the payload marks the run as failed.
pub fn assert_payload_failed(payload: &HashMap<String, serde_json::Value>) {
    assert_eq!(
        payload.get("failed").and_then(serde_json::Value::as_bool),
        Some(true),
        "Expected failed=true. Payload: {payload:?}"
    );
}

/// Asserts that the payload contains a specific key.
pub fn assert_payload_contains(payload: &HashMap<String, serde_json::Value>, key: &str) {
    assert!(
        payload.contains_key(key),
        "Expected payload to contain key '{}', but it doesn't. Keys: {:?}",
        key,
        payload.keys().collect::<Vec<_>>()
    );
}

/// Asserts that the payload contains a specific value.
pub fn assert_payload_value(
    payload: &HashMap<String, serde_json::Value>,
    key: &str,
    expected: &serde_json::Value,
) {
    let actual = payload.get(key);
    assert_eq!(
        actual,
        Some(expected),
        "Expected value {expected:?} for key '{key}', got {actual:?}"
    );
}
