//! Module invocation context.

use std::collections::HashMap;
use std::time::Duration;

use super::args::{self, ArgsEnvelope, CHECK_MODE_KEY, KEEP_REMOTE_FILES_KEY, REMOTE_TMP_KEY};
use super::sleep;
use crate::errors::HarnessError;

/// The decoded view of a module invocation.
///
/// A context is built from the process-wide argument buffer. Reserved keys
/// are split out into typed accessors; everything else is exposed as the
/// module's parameters.
#[derive(Debug, Clone)]
pub struct ModuleContext {
    params: HashMap<String, serde_json::Value>,
    check_mode: bool,
    remote_tmp: String,
    keep_remote_files: bool,
}

impl ModuleContext {
    /// Builds a context from the currently injected argument buffer.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::ArgsNotInjected` if no buffer is set, or
    /// `HarnessError::MalformedArgs` if the envelope does not decode.
    pub fn from_injected() -> Result<Self, HarnessError> {
        let raw = args::snapshot_raw().ok_or(HarnessError::ArgsNotInjected)?;
        let envelope: ArgsEnvelope = serde_json::from_slice(&raw)?;
        Ok(Self::from_args(envelope.args))
    }

    /// Builds a context directly from an argument mapping.
    #[must_use]
    pub fn from_args(mut args: HashMap<String, serde_json::Value>) -> Self {
        let check_mode = args
            .remove(CHECK_MODE_KEY)
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        let remote_tmp = args
            .remove(REMOTE_TMP_KEY)
            .and_then(|v| v.as_str().map(ToOwned::to_owned))
            .unwrap_or_else(|| std::env::temp_dir().to_string_lossy().into_owned());
        let keep_remote_files = args
            .remove(KEEP_REMOTE_FILES_KEY)
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        Self {
            params: args,
            check_mode,
            remote_tmp,
            keep_remote_files,
        }
    }

    /// Returns the module parameters (reserved keys excluded).
    #[must_use]
    pub fn params(&self) -> &HashMap<String, serde_json::Value> {
        &self.params
    }

    /// Gets a single parameter value.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&serde_json::Value> {
        self.params.get(key)
    }

    /// Returns true when the invocation is a dry run.
    #[must_use]
    pub fn check_mode(&self) -> bool {
        self.check_mode
    }

    /// Returns the transient-file directory for this invocation.
    #[must_use]
    pub fn remote_tmp(&self) -> &str {
        &self.remote_tmp
    }

    /// Returns whether transient files are kept after the run.
    #[must_use]
    pub fn keep_remote_files(&self) -> bool {
        self.keep_remote_files
    }

    /// Sleeps through the framework's hookable sleep primitive.
    pub fn sleep(&self, duration: Duration) {
        sleep::sleep(duration);
    }
}
