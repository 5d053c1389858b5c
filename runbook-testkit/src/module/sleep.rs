//! The framework's hookable sleep primitive.
//!
//! Modules wait through this function rather than calling
//! `std::thread::sleep` directly, which lets the harness replace real
//! delays with a no-op for the duration of a test.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// The replacement sleep signature.
pub type SleepFn = dyn Fn(Duration) + Send + Sync;

static SLEEP_HOOK: Mutex<Option<Arc<SleepFn>>> = Mutex::new(None);

/// Sleeps for the given duration, honoring an installed hook.
pub fn sleep(duration: Duration) {
    let hook = SLEEP_HOOK.lock().clone();
    match hook {
        Some(hook) => hook(duration),
        None => std::thread::sleep(duration),
    }
}

/// Installs a sleep hook, returning a guard that restores the prior hook.
#[must_use]
pub fn install_hook(hook: Arc<SleepFn>) -> SleepGuard {
    let prior = SLEEP_HOOK.lock().replace(hook);
    SleepGuard { prior }
}

/// Installs a no-op hook so that module sleeps return immediately.
#[must_use]
pub fn suppress() -> SleepGuard {
    install_hook(Arc::new(|_duration| {}))
}

/// Guard that restores the previously installed sleep hook on drop.
#[must_use = "dropping the guard restores the prior sleep hook"]
pub struct SleepGuard {
    prior: Option<Arc<SleepFn>>,
}

impl std::fmt::Debug for SleepGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SleepGuard")
            .field("prior", &self.prior.is_some())
            .finish()
    }
}

impl Drop for SleepGuard {
    fn drop(&mut self) {
        *SLEEP_HOOK.lock() = self.prior.take();
    }
}
