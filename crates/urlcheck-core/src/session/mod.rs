//! Caller-owned check session: current history, last result, and the
//! delayed, non-reentrant check action.
//!
//! A check waits for the configured delay before producing its result. While
//! one is in flight, further submissions are refused with
//! [`SessionError::Busy`]. Dropping the `submit` future cancels the wait;
//! nothing is recorded and the session becomes idle again.

mod guard;
mod result;


pub use result::CheckResult;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::clock::Clock;
use crate::history::{HistoryLog, HistoryStore};
use crate::storage::KeyValueStore;
use guard::InFlightGuard;

/// Pause between submitting an input and its result becoming available.
pub const DEFAULT_CHECK_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    /// Another check is still in flight.
    #[error("a check is already in progress")]
    Busy,
}

#[derive(Debug, Default)]
struct SessionState {
    history: HistoryLog,
    last_result: Option<CheckResult>,
}

/// Explicit state for one user of the checker.
///
/// History updates happen under a mutex, so concurrent `submit` and
/// `clear_history` calls on a shared session cannot interleave a record with
/// a clear or push the log past its bound.
pub struct ValidationSession<S, C> {
    store: HistoryStore<S>,
    clock: C,
    delay: Duration,
    in_flight: AtomicBool,
    state: Mutex<SessionState>,
}

impl<S: KeyValueStore, C: Clock> ValidationSession<S, C> {
    /// Opens a session, hydrating history from `store`.
    pub fn open(store: HistoryStore<S>, clock: C, delay: Duration) -> Self {
        let history = store.load();
        Self {
            store,
            clock,
            delay,
            in_flight: AtomicBool::new(false),
            state: Mutex::new(SessionState {
                history,
                last_result: None,
            }),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// True while a check is waiting out its delay.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Snapshot of the current history, newest first.
    pub fn history(&self) -> HistoryLog {
        self.state().history.clone()
    }

    /// Result of the most recent completed check in this session.
    pub fn last_result(&self) -> Option<CheckResult> {
        self.state().last_result.clone()
    }

    /// Checks `raw` after the session delay and records the outcome.
    ///
    /// Returns `Ok(None)` without recording if `raw` is empty after trimming.
    pub async fn submit(&self, raw: &str) -> Result<Option<CheckResult>, SessionError> {
        let input = raw.trim();
        if input.is_empty() {
            tracing::debug!("ignoring empty submission");
            return Ok(None);
        }

        let _in_flight = InFlightGuard::acquire(&self.in_flight).ok_or(SessionError::Busy)?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let result = CheckResult::evaluate(input, self.clock.now_millis());
        {
            let mut state = self.state();
            state.history = self.store.record(&state.history, result.record().clone());
            state.last_result = Some(result.clone());
        }
        tracing::info!(input, valid = result.is_valid(), "checked input");
        Ok(Some(result))
    }

    /// Clears persisted and in-memory history; returns the (empty) log.
    pub fn clear_history(&self) -> HistoryLog {
        let mut state = self.state();
        state.history = self.store.clear();
        state.history.clone()
    }

    // State is only ever replaced wholesale, so a poisoned lock still holds a
    // consistent value.
    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
