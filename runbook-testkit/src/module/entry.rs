//! The module entry-point trait.

use std::fmt::Debug;

use super::context::ModuleContext;
use super::outcome::ModuleOutcome;

/// Trait for Runbook modules.
///
/// A module receives its decoded invocation context and terminates with a
/// tagged outcome. Any error return is an uncategorized failure, distinct
/// from the explicit `ModuleOutcome::Fail` path.
pub trait Module {
    /// Returns the name of the module.
    fn name(&self) -> &str;

    /// Runs the module against an invocation context.
    fn run(&self, ctx: &ModuleContext) -> Result<ModuleOutcome, anyhow::Error>;
}

/// A simple function-based module.
pub struct FnModule<F>
where
    F: Fn(&ModuleContext) -> Result<ModuleOutcome, anyhow::Error>,
{
    name: String,
    func: F,
}

impl<F> FnModule<F>
where
    F: Fn(&ModuleContext) -> Result<ModuleOutcome, anyhow::Error>,
{
    /// Creates a new function-based module.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Debug for FnModule<F>
where
    F: Fn(&ModuleContext) -> Result<ModuleOutcome, anyhow::Error>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnModule")
            .field("name", &self.name)
            .finish()
    }
}

impl<F> Module for FnModule<F>
where
    F: Fn(&ModuleContext) -> Result<ModuleOutcome, anyhow::Error>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, ctx: &ModuleContext) -> Result<ModuleOutcome, anyhow::Error> {
        (self.func)(ctx)
    }
}
