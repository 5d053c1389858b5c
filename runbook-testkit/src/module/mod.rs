//! The module-side surface of the Runbook framework.
//!
//! This module provides:
//! - The process-wide argument buffer modules read on startup
//! - `ModuleContext`, the decoded view of an invocation
//! - `ModuleOutcome`, the tagged termination result
//! - The `Module` trait and the hookable sleep primitive

pub mod args;
mod context;
mod entry;
mod outcome;
pub mod sleep;

pub use args::{ArgsEnvelope, CHECK_MODE_KEY, ENVELOPE_KEY, KEEP_REMOTE_FILES_KEY, REMOTE_TMP_KEY};
pub use context::ModuleContext;
pub use entry::{FnModule, Module};
pub use outcome::ModuleOutcome;
