//! # agentrun
//!
//! Run configuration for an agent-execution framework: a validated record
//! that is immutable once built and governs how a single agent run behaves.
//!
//! ## Main Modules
//!
//! - [`config`]: [`RunConfig`], [`RunConfigBuilder`], speech settings and [`StreamingMode`].
//! - [`observer`]: warning side-channel ([`ConfigObserver`], [`TracingObserver`], [`RecordingObserver`]).
//! - [`budget`]: [`ModelCallBudget`], the per-run model call counter for Runners.
//! - [`summary`]: [`RunConfigSummary`] for verbose output.
//! - [`error`]: [`ConfigError`] and [`RunError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use agentrun::{ModelCallBudget, RunConfig, StreamingMode};
//!
//! let config = RunConfig::from_value(serde_json::json!({
//!     "streamingMode": "SERVER_SENT_EVENTS",
//!     "maxModelCalls": 2
//! }))
//! .unwrap();
//! assert_eq!(config.streaming_mode(), StreamingMode::Sse);
//!
//! let budget = ModelCallBudget::from_config(&config);
//! budget.record_call().unwrap();
//! budget.record_call().unwrap();
//! assert!(budget.record_call().is_err());
//! ```

pub mod budget;
pub mod config;
pub mod error;
pub mod logging;
pub mod observer;
pub mod summary;

pub use budget::ModelCallBudget;
pub use config::{
    AudioTranscriptionConfig, EffectiveTransport, ParseStreamingModeError, PrebuiltVoiceConfig,
    RunConfig, RunConfigBuilder, SpeechConfig, StreamingMode, VoiceConfig,
    DEFAULT_MAX_MODEL_CALLS, FIELD_NAMES,
};
pub use error::{ConfigError, RunError};
pub use observer::{ConfigObserver, ConfigWarning, RecordingObserver, TracingObserver};
pub use summary::{build_config_summary, RunConfigSummary};
