//! Run configuration types.
//!
//! [`RunConfig`] and its builder, the nested speech records, and the
//! streaming mode enum.

mod builder;
mod run_config;
mod speech;
mod streaming_mode;

pub use builder::RunConfigBuilder;
pub use run_config::{RunConfig, DEFAULT_MAX_MODEL_CALLS, DEFAULT_RESPONSE_MODALITY, FIELD_NAMES};
pub use speech::{AudioTranscriptionConfig, PrebuiltVoiceConfig, SpeechConfig, VoiceConfig};
pub use streaming_mode::{EffectiveTransport, ParseStreamingModeError, StreamingMode};
