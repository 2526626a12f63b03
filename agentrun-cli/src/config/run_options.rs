//! Command-line overrides for a run config.
//!
//! Built by the binary from clap args (or by tests directly) and applied as
//! the highest-precedence layer in [`load_run_config`](super::load_run_config).

use serde_json::{json, Map, Value};

/// Optional overrides; only set fields take effect.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// JSON file with a field mapping (lowest precedence layer).
    pub config_path: Option<std::path::PathBuf>,
    /// Streaming mode name, e.g. `SERVER_SENT_EVENTS` or `sse`.
    pub streaming_mode: Option<String>,
    pub max_model_calls: Option<i64>,
    /// Output channels, e.g. `["AUDIO", "TEXT"]`.
    pub response_modalities: Option<Vec<String>>,
    pub save_input_blobs: bool,
    pub compositional_function_calling: bool,
    pub output_audio_transcription: bool,
    pub language_code: Option<String>,
    pub voice_name: Option<String>,
    /// Skip the `.env` / environment layer.
    pub ignore_env: bool,
}

impl RunOptions {
    /// Field mapping for the options that are set. Flags only ever turn
    /// features on; leaving one off does not override a lower layer.
    pub fn to_layer(&self) -> Map<String, Value> {
        let mut layer = Map::new();
        if let Some(mode) = &self.streaming_mode {
            layer.insert("streamingMode".into(), json!(mode));
        }
        if let Some(n) = self.max_model_calls {
            layer.insert("maxModelCalls".into(), json!(n));
        }
        if let Some(m) = &self.response_modalities {
            layer.insert("responseModalities".into(), json!(m));
        }
        if self.save_input_blobs {
            layer.insert("saveInputBlobsAsArtifacts".into(), json!(true));
        }
        if self.compositional_function_calling {
            layer.insert("supportCompositionalFunctionCalling".into(), json!(true));
        }
        if self.output_audio_transcription {
            layer.insert("outputAudioTranscription".into(), json!({}));
        }
        let speech = speech_layer(self.language_code.as_deref(), self.voice_name.as_deref());
        if let Some(speech) = speech {
            layer.insert("speechConfig".into(), speech);
        }
        layer
    }
}

/// Nested `speechConfig` value for a language code and/or voice name.
pub(crate) fn speech_layer(
    language_code: Option<&str>,
    voice_name: Option<&str>,
) -> Option<Value> {
    let mut speech = Map::new();
    if let Some(code) = language_code {
        speech.insert("languageCode".into(), json!(code));
    }
    if let Some(name) = voice_name {
        speech.insert(
            "voiceConfig".into(),
            json!({ "prebuiltVoiceConfig": { "voiceName": name } }),
        );
    }
    (!speech.is_empty()).then_some(Value::Object(speech))
}
