//! Module dispatch with expectation checking.

use std::collections::HashMap;

use uuid::Uuid;

use super::inject::inject_args;
use crate::errors::HarnessError;
use crate::module::args::CHECK_MODE_KEY;
use crate::module::sleep::{self, SleepGuard};
use crate::module::{Module, ModuleContext, ModuleOutcome};

/// The declared inputs and expectations for a single module dispatch.
///
/// Defaults match an unremarkable successful run: empty arguments, no check
/// mode, `changed == false` expected, success expected.
#[derive(Debug, Clone)]
pub struct ModuleRun {
    args: HashMap<String, serde_json::Value>,
    check_mode: bool,
    changed: Option<bool>,
    commands: Option<serde_json::Value>,
    failed: bool,
}

impl Default for ModuleRun {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleRun {
    /// Creates a run with default expectations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            args: HashMap::new(),
            check_mode: false,
            changed: Some(false),
            commands: None,
            failed: false,
        }
    }

    /// Replaces the argument mapping.
    #[must_use]
    pub fn with_args(mut self, args: HashMap<String, serde_json::Value>) -> Self {
        self.args = args;
        self
    }

    /// Adds a single argument.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.args.insert(key.into(), value);
        self
    }

    /// Requests a dry-run invocation.
    #[must_use]
    pub fn in_check_mode(mut self) -> Self {
        self.check_mode = true;
        self
    }

    /// Declares the expected `"changed"` value.
    #[must_use]
    pub fn expect_changed(mut self, changed: bool) -> Self {
        self.changed = Some(changed);
        self
    }

    /// Skips the `"changed"` assertion entirely.
    #[must_use]
    pub fn ignore_changed(mut self) -> Self {
        self.changed = None;
        self
    }

    /// Records the expected commands value.
    ///
    /// Carried through for the caller's own assertions; the harness does not
    /// check it.
    #[must_use]
    pub fn expect_commands(mut self, commands: serde_json::Value) -> Self {
        self.commands = Some(commands);
        self
    }

    /// Declares that the module is expected to fail.
    #[must_use]
    pub fn expect_failure(mut self) -> Self {
        self.failed = true;
        self
    }

    /// Returns the recorded expected commands value, if any.
    #[must_use]
    pub fn expected_commands(&self) -> Option<&serde_json::Value> {
        self.commands.as_ref()
    }
}

/// Reusable dispatch harness for module tests.
///
/// Construction installs a no-op sleep hook; the hook is removed when the
/// harness drops, whatever the test outcome.
#[derive(Debug)]
pub struct ModuleHarness {
    _sleep: SleepGuard,
}

impl ModuleHarness {
    /// Creates a harness with real sleeps suppressed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _sleep: sleep::suppress(),
        }
    }

    /// Injects arguments, dispatches the module, and checks expectations.
    ///
    /// Returns the result payload for further assertions. Expectation
    /// mismatches panic with the observed payload in the message; errors
    /// from the module under test propagate as `HarnessError::Module`.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError` if injection fails or the module returns an
    /// error instead of an outcome.
    pub fn execute_module<M: Module>(
        &self,
        module: &M,
        run: ModuleRun,
    ) -> Result<HashMap<String, serde_json::Value>, HarnessError> {
        let run_id = Uuid::new_v4();
        let mut module_args = run.args;
        if run.check_mode {
            module_args.insert(CHECK_MODE_KEY.to_string(), serde_json::json!(true));
        }

        let _guard = inject_args(module_args)?;
        let ctx = ModuleContext::from_injected()?;

        tracing::debug!(
            %run_id,
            module = module.name(),
            check_mode = ctx.check_mode(),
            "dispatching module"
        );

        match module.run(&ctx).map_err(HarnessError::from)? {
            ModuleOutcome::Exit(payload) => {
                assert!(
                    !run.failed,
                    "module '{}' succeeded but failure was expected: {payload:?}",
                    module.name()
                );
                if let Some(expected) = run.changed {
                    let actual = payload.get("changed").and_then(serde_json::Value::as_bool);
                    assert_eq!(
                        actual,
                        Some(expected),
                        "module '{}' changed mismatch: {payload:?}",
                        module.name()
                    );
                }
                tracing::debug!(%run_id, module = module.name(), "module exited");
                Ok(payload)
            }
            ModuleOutcome::Fail(payload) => {
                assert!(
                    run.failed,
                    "module '{}' failed: {payload:?}",
                    module.name()
                );
                tracing::debug!(%run_id, module = module.name(), "module failed as expected");
                Ok(payload)
            }
        }
    }
}

impl Default for ModuleHarness {
    fn default() -> Self {
        Self::new()
    }
}
