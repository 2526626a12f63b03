//! Builder and mapping decoder for [`RunConfig`].
//!
//! Every construction path ends in [`RunConfigBuilder::build_with_observer`],
//! which is the only place validation runs.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::run_config::{RunConfig, FIELD_NAMES};
use super::speech::{AudioTranscriptionConfig, SpeechConfig};
use super::streaming_mode::StreamingMode;
use crate::error::ConfigError;
use crate::logging;
use crate::observer::{ConfigObserver, ConfigWarning, TracingObserver};

/// Collects field values for a [`RunConfig`]; unset fields keep their defaults.
#[derive(Clone, Debug)]
pub struct RunConfigBuilder {
    speech_config: Option<SpeechConfig>,
    response_modalities: Option<Vec<String>>,
    save_input_blobs_as_artifacts: bool,
    support_compositional_function_calling: bool,
    streaming_mode: StreamingMode,
    output_audio_transcription: Option<AudioTranscriptionConfig>,
    max_model_calls: i64,
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<RunConfig> for RunConfigBuilder {
    fn from(c: RunConfig) -> Self {
        Self {
            speech_config: c.speech_config,
            response_modalities: c.response_modalities,
            save_input_blobs_as_artifacts: c.save_input_blobs_as_artifacts,
            support_compositional_function_calling: c.support_compositional_function_calling,
            streaming_mode: c.streaming_mode,
            output_audio_transcription: c.output_audio_transcription,
            max_model_calls: c.max_model_calls,
        }
    }
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        RunConfig::default().into()
    }

    /// Decodes a field mapping into a builder.
    ///
    /// All keys are checked against [`FIELD_NAMES`] before any value is
    /// decoded, so an unknown key is reported regardless of the other values.
    /// `null` leaves an optional field (`speechConfig`, `responseModalities`,
    /// `outputAudioTranscription`) unset; for any other field it is an
    /// invalid value.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(ConfigError::InvalidValue {
                    field: None,
                    message: format!("expected a mapping of field names, got {}", kind(&other)),
                })
            }
        };
        if let Some(unknown) = map.keys().find(|k| !FIELD_NAMES.contains(&k.as_str())) {
            return Err(ConfigError::UnknownField(unknown.clone()));
        }
        Self::new().apply_map(map)
    }

    fn apply_map(mut self, mut map: Map<String, Value>) -> Result<Self, ConfigError> {
        if let Some(v) = decode_optional(&mut map, "speechConfig")? {
            self.speech_config = Some(v);
        }
        if let Some(v) = decode_optional(&mut map, "responseModalities")? {
            self.response_modalities = Some(v);
        }
        if let Some(v) = decode_required(&mut map, "saveInputBlobsAsArtifacts")? {
            self.save_input_blobs_as_artifacts = v;
        }
        if let Some(v) = decode_required(&mut map, "supportCompositionalFunctionCalling")? {
            self.support_compositional_function_calling = v;
        }
        if let Some(v) = decode_required(&mut map, "streamingMode")? {
            self.streaming_mode = v;
        }
        if let Some(v) = decode_optional(&mut map, "outputAudioTranscription")? {
            self.output_audio_transcription = Some(v);
        }
        if let Some(v) = decode_required(&mut map, "maxModelCalls")? {
            self.max_model_calls = v;
        }
        Ok(self)
    }

    pub fn speech_config(mut self, speech: SpeechConfig) -> Self {
        self.speech_config = Some(speech);
        self
    }

    pub fn response_modalities<I, S>(mut self, modalities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.response_modalities = Some(modalities.into_iter().map(Into::into).collect());
        self
    }

    pub fn save_input_blobs_as_artifacts(mut self, save: bool) -> Self {
        self.save_input_blobs_as_artifacts = save;
        self
    }

    pub fn support_compositional_function_calling(mut self, enabled: bool) -> Self {
        self.support_compositional_function_calling = enabled;
        self
    }

    pub fn streaming_mode(mut self, mode: StreamingMode) -> Self {
        self.streaming_mode = mode;
        self
    }

    pub fn output_audio_transcription(mut self, transcription: AudioTranscriptionConfig) -> Self {
        self.output_audio_transcription = Some(transcription);
        self
    }

    pub fn max_model_calls(mut self, max: i64) -> Self {
        self.max_model_calls = max;
        self
    }

    /// Validates and builds; warnings go to [`TracingObserver`].
    pub fn build(self) -> Result<RunConfig, ConfigError> {
        self.build_with_observer(&TracingObserver)
    }

    /// Validates and builds, reporting warnings to `observer`.
    ///
    /// Fails with [`ConfigError::MaxModelCallsOverflow`] when `max_model_calls`
    /// is `i64::MAX`. A bound of zero or less succeeds and reports exactly one
    /// [`ConfigWarning::UnboundedModelCalls`]. Nothing is reported on failure.
    pub fn build_with_observer(
        self,
        observer: &dyn ConfigObserver,
    ) -> Result<RunConfig, ConfigError> {
        if self.max_model_calls == i64::MAX {
            let err = ConfigError::MaxModelCallsOverflow {
                value: self.max_model_calls,
            };
            logging::log_config_rejected(&err);
            return Err(err);
        }

        let config = RunConfig {
            speech_config: self.speech_config,
            response_modalities: self.response_modalities,
            save_input_blobs_as_artifacts: self.save_input_blobs_as_artifacts,
            support_compositional_function_calling: self.support_compositional_function_calling,
            streaming_mode: self.streaming_mode,
            output_audio_transcription: self.output_audio_transcription,
            max_model_calls: self.max_model_calls,
        };

        if config.max_model_calls <= 0 {
            observer.on_warning(&ConfigWarning::UnboundedModelCalls {
                max_model_calls: config.max_model_calls,
            });
        }
        logging::log_config_built(&config);
        Ok(config)
    }
}

/// Removes an optional field and decodes it; `null` and absent both yield `None`.
fn decode_optional<T: DeserializeOwned>(
    map: &mut Map<String, Value>,
    field: &str,
) -> Result<Option<T>, ConfigError> {
    match map.remove(field) {
        Some(Value::Null) => Ok(None),
        other => decode_value(other, field),
    }
}

/// Removes a non-optional field and decodes it; only absence yields `None`,
/// so `null` fails the type check.
fn decode_required<T: DeserializeOwned>(
    map: &mut Map<String, Value>,
    field: &str,
) -> Result<Option<T>, ConfigError> {
    decode_value(map.remove(field), field)
}

fn decode_value<T: DeserializeOwned>(
    value: Option<Value>,
    field: &str,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| {
            serde_json::from_value(v).map_err(|e| ConfigError::invalid(field, e.to_string()))
        })
        .transpose()
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
