//! RAII guard that marks a check as in flight and clears the mark when dropped.

use std::sync::atomic::{AtomicBool, Ordering};

/// Held for the duration of one check. Dropping it (completion or cancellation)
/// lets the next check start.
pub(super) struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    /// Claims `flag`, or returns `None` if another check already holds it.
    pub(super) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
