//! Scoped argument injection.
//!
//! Compatibility shim for the framework's argument-passing convention:
//! modules read an encoded envelope from a process-wide buffer, so the
//! harness fills in the reserved defaults, encodes the envelope, swaps it
//! into place, and restores the prior buffer when the scope ends. The guard
//! restores on every exit path, panics included.

use std::collections::HashMap;

use crate::errors::HarnessError;
use crate::module::args::{
    self, ArgsEnvelope, KEEP_REMOTE_FILES_KEY, REMOTE_TMP_KEY,
};

/// Guard holding an injected argument buffer in place.
///
/// Dropping the guard restores the buffer to its pre-injection value.
#[derive(Debug)]
#[must_use = "dropping the guard restores the prior argument buffer"]
pub struct ArgsGuard {
    prior: Option<Vec<u8>>,
}

impl Drop for ArgsGuard {
    fn drop(&mut self) {
        let _ = args::replace_raw(self.prior.take());
    }
}

/// Injects an argument mapping into the process-wide buffer.
///
/// Reserved keys absent from the mapping are defaulted: the transient-file
/// directory to the platform temp dir, the keep-remote-files flag to false.
///
/// # Errors
///
/// Returns `HarnessError::MalformedArgs` if the envelope cannot be encoded.
pub fn inject_args(
    mut module_args: HashMap<String, serde_json::Value>,
) -> Result<ArgsGuard, HarnessError> {
    module_args
        .entry(REMOTE_TMP_KEY.to_string())
        .or_insert_with(|| serde_json::json!(std::env::temp_dir().to_string_lossy()));
    module_args
        .entry(KEEP_REMOTE_FILES_KEY.to_string())
        .or_insert(serde_json::json!(false));

    let raw = serde_json::to_vec(&ArgsEnvelope::new(module_args))?;
    tracing::debug!(bytes = raw.len(), "injected module arguments");

    let prior = args::replace_raw(Some(raw));
    Ok(ArgsGuard { prior })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn decode_current() -> ArgsEnvelope {
        let raw = args::snapshot_raw().unwrap();
        serde_json::from_slice(&raw).unwrap()
    }

    #[test]
    #[serial]
    fn test_reserved_defaults_filled() {
        let guard = inject_args(HashMap::new()).unwrap();

        let envelope = decode_current();
        assert!(envelope.args.get(REMOTE_TMP_KEY).unwrap().is_string());
        assert_eq!(
            envelope.args.get(KEEP_REMOTE_FILES_KEY),
            Some(&serde_json::json!(false))
        );

        drop(guard);
    }

    #[test]
    #[serial]
    fn test_caller_values_win_over_defaults() {
        let tmpdir = tempfile::tempdir().unwrap();
        let mut module_args = HashMap::new();
        module_args.insert(
            REMOTE_TMP_KEY.to_string(),
            serde_json::json!(tmpdir.path().to_string_lossy()),
        );
        module_args.insert(KEEP_REMOTE_FILES_KEY.to_string(), serde_json::json!(true));

        let guard = inject_args(module_args).unwrap();

        let envelope = decode_current();
        assert_eq!(
            envelope.args.get(REMOTE_TMP_KEY),
            Some(&serde_json::json!(tmpdir.path().to_string_lossy()))
        );
        assert_eq!(
            envelope.args.get(KEEP_REMOTE_FILES_KEY),
            Some(&serde_json::json!(true))
        );

        drop(guard);
    }

    #[test]
    #[serial]
    fn test_guard_restores_cleared_buffer() {
        let baseline = args::replace_raw(None);

        {
            let _guard = inject_args(HashMap::new()).unwrap();
            assert!(args::is_injected());
        }

        assert!(!args::is_injected());
        args::replace_raw(baseline);
    }

    #[test]
    #[serial]
    fn test_guard_restores_prior_buffer() {
        let baseline = args::replace_raw(Some(b"outer".to_vec()));

        {
            let _guard = inject_args(HashMap::new()).unwrap();
            assert_ne!(args::snapshot_raw(), Some(b"outer".to_vec()));
        }

        assert_eq!(args::snapshot_raw(), Some(b"outer".to_vec()));
        args::replace_raw(baseline);
    }

    #[test]
    #[serial]
    fn test_guard_restores_on_panic() {
        let baseline = args::replace_raw(None);

        let result = std::panic::catch_unwind(|| {
            let _guard = inject_args(HashMap::new()).unwrap();
            panic!("module blew up");
        });

        assert!(result.is_err());
        assert!(!args::is_injected());
        args::replace_raw(baseline);
    }
}
