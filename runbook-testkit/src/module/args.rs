//! The process-wide argument buffer.
//!
//! Runbook modules read their invocation arguments from a well-known
//! process-wide location rather than via parameter passing: a JSON envelope
//! encoded into a byte buffer before the entry point runs. This module owns
//! that buffer and the reserved key names carried inside the envelope.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The wrapper key under which the argument mapping travels in the envelope.
pub const ENVELOPE_KEY: &str = "RUNBOOK_MODULE_ARGS";

/// Reserved key: directory for transient files on the managed host.
pub const REMOTE_TMP_KEY: &str = "_runbook_remote_tmp";

/// Reserved key: whether transient files are kept after the run.
pub const KEEP_REMOTE_FILES_KEY: &str = "_runbook_keep_remote_files";

/// Reserved key: dry-run ("check") mode toggle.
pub const CHECK_MODE_KEY: &str = "_runbook_check_mode";

/// The transport-ready argument envelope, `{"RUNBOOK_MODULE_ARGS": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgsEnvelope {
    /// The module argument mapping, reserved keys included.
    #[serde(rename = "RUNBOOK_MODULE_ARGS")]
    pub args: HashMap<String, serde_json::Value>,
}

impl ArgsEnvelope {
    /// Wraps an argument mapping in the envelope.
    #[must_use]
    pub fn new(args: HashMap<String, serde_json::Value>) -> Self {
        Self { args }
    }
}

// Sequential, non-reentrant use only: the buffer is swapped and restored
// within a single injection scope per invocation.
static INJECTED_ARGS: Mutex<Option<Vec<u8>>> = Mutex::new(None);

/// Swaps the raw encoded buffer, returning the prior value.
pub fn replace_raw(raw: Option<Vec<u8>>) -> Option<Vec<u8>> {
    std::mem::replace(&mut INJECTED_ARGS.lock(), raw)
}

/// Returns a copy of the current raw buffer, if one is set.
#[must_use]
pub fn snapshot_raw() -> Option<Vec<u8>> {
    INJECTED_ARGS.lock().clone()
}

/// Returns true if an argument buffer is currently set.
#[must_use]
pub fn is_injected() -> bool {
    INJECTED_ARGS.lock().is_some()
}
