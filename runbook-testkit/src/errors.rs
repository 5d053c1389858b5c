//! Error types for the testkit.
//!
//! Expectation mismatches are surfaced as test assertion failures (panics),
//! not as values of this type. `HarnessError` covers everything else: a
//! dispatch attempted without injected arguments, an envelope that does not
//! decode, or an uncategorized error from the module under test.

use thiserror::Error;

/// The error type for harness operations.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The entry point was dispatched with no argument buffer set.
    #[error("no module arguments have been injected")]
    ArgsNotInjected,

    /// The injected argument envelope could not be encoded or decoded.
    #[error("malformed module arguments: {0}")]
    MalformedArgs(#[from] serde_json::Error),

    /// The module under test returned an error instead of an outcome.
    ///
    /// This is the uncategorized failure path: it is never caught or
    /// retried, and propagates straight to the test runner.
    #[error("module execution error: {0}")]
    Module(#[from] anyhow::Error),
}
