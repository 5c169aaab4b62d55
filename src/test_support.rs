//! Shared helpers for unit tests

use std::sync::{Mutex, MutexGuard, OnceLock};

/// Serializes tests that read or mutate process environment variables.
/// A poisoned lock from a panicked test still hands out the guard.
pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
