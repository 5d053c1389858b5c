//! The test harness.
//!
//! This module provides:
//! - Scoped argument injection with guaranteed restoration
//! - The dispatch helper that runs a module and checks expectations
//! - Assertion helpers over result payloads

mod assertions;
mod inject;
#[cfg(test)]
mod integration_tests;
mod run;

pub use assertions::{
    assert_payload_changed, assert_payload_contains, assert_payload_failed,
    assert_payload_value,
};
pub use inject::{inject_args, ArgsGuard};
pub use run::{ModuleHarness, ModuleRun};
