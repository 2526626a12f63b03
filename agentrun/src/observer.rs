//! Side-channel for non-fatal construction outcomes.
//!
//! Construction never fails for `maxModelCalls <= 0`; instead it reports a
//! [`ConfigWarning`] to a [`ConfigObserver`]. The default observer is
//! [`TracingObserver`]; tests and callers that want to surface warnings to
//! users pass a [`RecordingObserver`].

use std::fmt;
use std::sync::Mutex;

use crate::logging;

/// Non-fatal, construction-time configuration warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `maxModelCalls` is zero or negative: the Runner imposes no bound.
    UnboundedModelCalls { max_model_calls: i64 },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnboundedModelCalls { max_model_calls } => write!(
                f,
                "model calls are unbounded for this run (maxModelCalls={})",
                max_model_calls
            ),
        }
    }
}

/// Receives warnings produced while a `RunConfig` is being constructed.
///
/// Called at most once per warning, only for constructions that succeed.
pub trait ConfigObserver: Send + Sync {
    fn on_warning(&self, warning: &ConfigWarning);
}

/// Observer that forwards warnings to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ConfigObserver for TracingObserver {
    fn on_warning(&self, warning: &ConfigWarning) {
        match warning {
            ConfigWarning::UnboundedModelCalls { max_model_calls } => {
                logging::log_unbounded_model_calls(*max_model_calls)
            }
        }
    }
}

/// Observer that keeps every warning it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    warnings: Mutex<Vec<ConfigWarning>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the warnings received so far.
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        match self.warnings.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.warnings().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ConfigObserver for RecordingObserver {
    fn on_warning(&self, warning: &ConfigWarning) {
        let mut guard = match self.warnings.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push(warning.clone());
    }
}
