//! Per-run model call budget.
//!
//! A Runner creates one [`ModelCallBudget`] per run from the run's
//! [`RunConfig`] and calls [`ModelCallBudget::record_call`] before each model
//! invocation. Exhaustion is a run-terminating [`RunError`], never a silent
//! truncation.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::RunConfig;
use crate::error::RunError;

/// Counts model calls for one run and enforces `maxModelCalls`.
///
/// Safe to share (e.g. in an `Arc`) between concurrent tasks of the same run.
#[derive(Debug)]
pub struct ModelCallBudget {
    limit: Option<u64>,
    calls: AtomicU64,
}

impl ModelCallBudget {
    /// Budget for a run under `config`; unbounded when `maxModelCalls <= 0`.
    pub fn from_config(config: &RunConfig) -> Self {
        Self::with_limit(config.model_call_limit())
    }

    pub fn with_limit(limit: Option<u64>) -> Self {
        Self {
            limit,
            calls: AtomicU64::new(0),
        }
    }

    pub fn unbounded() -> Self {
        Self::with_limit(None)
    }

    /// Records one model call and returns the new count.
    ///
    /// # Errors
    ///
    /// [`RunError::ModelCallLimitExceeded`] when the call would push the count
    /// past the limit. The rejected call is not counted.
    pub fn record_call(&self) -> Result<u64, RunError> {
        let Some(limit) = self.limit else {
            return Ok(self.calls.fetch_add(1, Ordering::AcqRel).saturating_add(1));
        };
        self.calls
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < limit).then_some(n + 1)
            })
            .map(|prev| prev + 1)
            .map_err(|_| {
                tracing::warn!(limit, "model call limit exceeded; terminating run");
                RunError::ModelCallLimitExceeded { limit }
            })
    }

    pub fn calls_made(&self) -> u64 {
        self.calls.load(Ordering::Acquire)
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Calls left before exhaustion; `None` when unbounded.
    pub fn remaining(&self) -> Option<u64> {
        self.limit.map(|l| l.saturating_sub(self.calls_made()))
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == Some(0)
    }
}
