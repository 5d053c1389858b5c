//! Module termination outcomes.
//!
//! Runbook modules terminate through one of two paths: a normal exit
//! carrying a result payload, or an explicit failure. In production those
//! paths end the process; under test they are represented as the two
//! variants of `ModuleOutcome` so that control returns to the harness.

use std::collections::HashMap;

/// The tagged result of a module run.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleOutcome {
    /// Normal completion with a result payload.
    Exit(HashMap<String, serde_json::Value>),
    /// Explicit failure with a result payload.
    Fail(HashMap<String, serde_json::Value>),
}

impl ModuleOutcome {
    /// Creates an exit outcome, defaulting `"changed"` to false if absent.
    #[must_use]
    pub fn exit(mut payload: HashMap<String, serde_json::Value>) -> Self {
        payload
            .entry("changed".to_string())
            .or_insert(serde_json::json!(false));
        Self::Exit(payload)
    }

    /// Creates an exit outcome with an empty payload.
    #[must_use]
    pub fn exit_empty() -> Self {
        Self::exit(HashMap::new())
    }

    /// Creates an exit outcome with a single payload value.
    #[must_use]
    pub fn exit_value(key: impl Into<String>, value: serde_json::Value) -> Self {
        let mut payload = HashMap::new();
        payload.insert(key.into(), value);
        Self::exit(payload)
    }

    /// Creates a failure outcome, forcing `"failed"` to true.
    #[must_use]
    pub fn fail(mut payload: HashMap<String, serde_json::Value>) -> Self {
        payload.insert("failed".to_string(), serde_json::json!(true));
        Self::Fail(payload)
    }

    /// Creates a failure outcome with a `"msg"` field.
    #[must_use]
    pub fn fail_msg(msg: impl Into<String>) -> Self {
        let mut payload = HashMap::new();
        payload.insert("msg".to_string(), serde_json::json!(msg.into()));
        Self::fail(payload)
    }

    /// Returns true if this is a normal exit.
    #[must_use]
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }

    /// Returns true if this is an explicit failure.
    #[must_use]
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// Returns the payload regardless of variant.
    #[must_use]
    pub fn payload(&self) -> &HashMap<String, serde_json::Value> {
        match self {
            Self::Exit(payload) | Self::Fail(payload) => payload,
        }
    }

    /// Consumes the outcome and returns the payload.
    #[must_use]
    pub fn into_payload(self) -> HashMap<String, serde_json::Value> {
        match self {
            Self::Exit(payload) | Self::Fail(payload) => payload,
        }
    }
}
