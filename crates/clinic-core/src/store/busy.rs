//! Busy flag for the loading overlay.
//!
//! The UI raises the flag while a save or delete is in flight and drops it
//! when done. A second trigger while the flag is up is refused.

use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "operation in progress" flag.
#[derive(Debug, Default)]
pub struct BusyFlag {
    busy: AtomicBool,
}

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an operation is in progress.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Raise the flag. Returns `false` if it was already up.
    pub fn try_mark(&self) -> bool {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Lower the flag.
    pub fn clear(&self) {
        self.busy.store(false, Ordering::Release);
    }

    /// Raise the flag for the lifetime of the returned guard.
    pub fn try_begin(&self) -> Option<BusyGuard<'_>> {
        if self.try_mark() {
            Some(BusyGuard { flag: self })
        } else {
            tracing::debug!("busy: operation already in progress");
            None
        }
    }
}

/// Lowers the busy flag when dropped.
#[derive(Debug)]
pub struct BusyGuard<'a> {
    flag: &'a BusyFlag,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.clear();
    }
}
