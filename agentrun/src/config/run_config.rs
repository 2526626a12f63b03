//! Run config: the validated, immutable policy record for one agent run.
//!
//! Built through [`RunConfigBuilder`](super::RunConfigBuilder) or from a
//! field mapping with [`RunConfig::from_value`]. Read by a Runner through the
//! accessors below; there are no setters. To change a value, call
//! [`RunConfig::to_builder`] and build a new instance.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::builder::RunConfigBuilder;
use super::speech::{AudioTranscriptionConfig, SpeechConfig};
use super::streaming_mode::{EffectiveTransport, StreamingMode};
use crate::error::ConfigError;
use crate::logging;
use crate::observer::{ConfigObserver, TracingObserver};

/// Default upper bound on model invocations per run.
pub const DEFAULT_MAX_MODEL_CALLS: i64 = 500;

/// Output channel assumed when `responseModalities` is unset.
pub const DEFAULT_RESPONSE_MODALITY: &str = "AUDIO";

/// Declared field names, in declaration order. Anything else is rejected.
pub const FIELD_NAMES: [&str; 7] = [
    "speechConfig",
    "responseModalities",
    "saveInputBlobsAsArtifacts",
    "supportCompositionalFunctionCalling",
    "streamingMode",
    "outputAudioTranscription",
    "maxModelCalls",
];

/// Configuration for a single agent run.
///
/// Equality is value equality over all seven fields. The type is `Send + Sync`
/// and holds no interior mutability, so one instance can be shared by
/// reference (or `Arc`) across every task of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    pub(super) speech_config: Option<SpeechConfig>,
    pub(super) response_modalities: Option<Vec<String>>,
    pub(super) save_input_blobs_as_artifacts: bool,
    pub(super) support_compositional_function_calling: bool,
    pub(super) streaming_mode: StreamingMode,
    pub(super) output_audio_transcription: Option<AudioTranscriptionConfig>,
    pub(super) max_model_calls: i64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            speech_config: None,
            response_modalities: None,
            save_input_blobs_as_artifacts: false,
            support_compositional_function_calling: false,
            streaming_mode: StreamingMode::None,
            output_audio_transcription: None,
            max_model_calls: DEFAULT_MAX_MODEL_CALLS,
        }
    }
}

impl RunConfig {
    /// Builder with every field at its default.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::new()
    }

    /// Builder pre-filled with this config's values.
    pub fn to_builder(&self) -> RunConfigBuilder {
        RunConfigBuilder::from(self.clone())
    }

    /// Builds from a mapping of camelCase field names to values.
    ///
    /// Warnings go to [`TracingObserver`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnknownField`] for a key outside [`FIELD_NAMES`]
    /// - [`ConfigError::InvalidValue`] for a non-object input or a value of the wrong type
    /// - [`ConfigError::MaxModelCallsOverflow`] when `maxModelCalls` is `i64::MAX`
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        Self::from_value_with_observer(value, &TracingObserver)
    }

    /// Same as [`from_value`](Self::from_value), reporting warnings to `observer`.
    pub fn from_value_with_observer(
        value: Value,
        observer: &dyn ConfigObserver,
    ) -> Result<Self, ConfigError> {
        let builder = RunConfigBuilder::from_value(value).map_err(|e| {
            logging::log_config_rejected(&e);
            e
        })?;
        builder.build_with_observer(observer)
    }

    /// Parses a JSON document and builds from it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            let err = ConfigError::InvalidValue {
                field: None,
                message: e.to_string(),
            };
            logging::log_config_rejected(&err);
            err
        })?;
        Self::from_value(value)
    }

    pub fn speech_config(&self) -> Option<&SpeechConfig> {
        self.speech_config.as_ref()
    }

    /// Declared output channels, e.g. `AUDIO`, `TEXT`. `None` when unset.
    pub fn response_modalities(&self) -> Option<&[String]> {
        self.response_modalities.as_deref()
    }

    /// Declared output channels, with the unset case resolved to `AUDIO`.
    pub fn effective_response_modalities(&self) -> Vec<&str> {
        match &self.response_modalities {
            Some(m) => m.iter().map(String::as_str).collect(),
            None => vec![DEFAULT_RESPONSE_MODALITY],
        }
    }

    pub fn save_input_blobs_as_artifacts(&self) -> bool {
        self.save_input_blobs_as_artifacts
    }

    /// Experimental. Only has an effect with [`StreamingMode::Sse`].
    pub fn support_compositional_function_calling(&self) -> bool {
        self.support_compositional_function_calling
    }

    pub fn streaming_mode(&self) -> StreamingMode {
        self.streaming_mode
    }

    pub fn output_audio_transcription(&self) -> Option<&AudioTranscriptionConfig> {
        self.output_audio_transcription.as_ref()
    }

    /// Raw bound as supplied; zero or negative means unbounded.
    pub fn max_model_calls(&self) -> i64 {
        self.max_model_calls
    }

    /// The bound a Runner must enforce, or `None` when calls are unbounded.
    pub fn model_call_limit(&self) -> Option<u64> {
        u64::try_from(self.max_model_calls).ok().filter(|n| *n > 0)
    }

    /// Execution path the Runner must take.
    ///
    /// Differs from [`streaming_mode`](Self::streaming_mode) in one case: SSE
    /// with compositional function calling resolves to
    /// [`EffectiveTransport::Bidirectional`].
    pub fn effective_transport(&self) -> EffectiveTransport {
        EffectiveTransport::resolve(
            self.streaming_mode,
            self.support_compositional_function_calling,
        )
    }
}

impl<'de> Deserialize<'de> for RunConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        RunConfig::from_value(value).map_err(serde::de::Error::custom)
    }
}
