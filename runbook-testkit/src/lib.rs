//! # Runbook Testkit
//!
//! A unit-test harness for Runbook automation modules.
//!
//! The testkit covers the three things every module test needs:
//!
//! - **Argument injection**: a scoped shim that places an encoded argument
//!   envelope into the process-wide buffer modules read on startup, and
//!   restores the prior buffer on every exit path
//! - **Termination outcomes**: `ModuleOutcome::Exit` / `ModuleOutcome::Fail`
//!   variants standing in for the framework's real exit and fail paths, so
//!   control returns to the test instead of terminating the process
//! - **Dispatch and assertions**: a harness that neutralizes real sleeps,
//!   runs a module entry point under injected arguments, and checks the
//!   structured result against declared expectations
//!
//! ## Quick Start
//!
//! ```rust
//! use runbook_testkit::prelude::*;
//!
//! let ping = FnModule::new("ping", |ctx: &ModuleContext| {
//!     let mut payload = std::collections::HashMap::new();
//!     payload.insert("ping".to_string(), ctx.param("data").cloned().unwrap_or_default());
//!     Ok(ModuleOutcome::exit(payload))
//! });
//!
//! let harness = ModuleHarness::new();
//! let run = ModuleRun::new().with_arg("data", serde_json::json!("pong"));
//! let result = harness.execute_module(&ping, run).unwrap();
//! assert_eq!(result.get("ping"), Some(&serde_json::json!("pong")));
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod errors;
pub mod harness;
pub mod logging;
pub mod module;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::HarnessError;
    pub use crate::harness::{
        assert_payload_changed, assert_payload_contains, assert_payload_failed,
        assert_payload_value, inject_args, ArgsGuard, ModuleHarness, ModuleRun,
    };
    pub use crate::module::{
        FnModule, Module, ModuleContext, ModuleOutcome, CHECK_MODE_KEY,
        KEEP_REMOTE_FILES_KEY, REMOTE_TMP_KEY,
    };
}
