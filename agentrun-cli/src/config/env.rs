//! Environment variable layer.
//!
//! | Variable | Field |
//! |---|---|
//! | `AGENTRUN_STREAMING_MODE` | `streamingMode` |
//! | `AGENTRUN_MAX_MODEL_CALLS` | `maxModelCalls` |
//! | `AGENTRUN_RESPONSE_MODALITIES` | `responseModalities` (comma separated) |
//! | `AGENTRUN_SAVE_INPUT_BLOBS` | `saveInputBlobsAsArtifacts` |
//! | `AGENTRUN_COMPOSITIONAL_FUNCTION_CALLING` | `supportCompositionalFunctionCalling` |
//! | `AGENTRUN_OUTPUT_AUDIO_TRANSCRIPTION` | `outputAudioTranscription` (true enables, false clears) |
//! | `AGENTRUN_LANGUAGE_CODE` | `speechConfig.languageCode` |
//! | `AGENTRUN_VOICE_NAME` | `speechConfig.voiceConfig.prebuiltVoiceConfig.voiceName` |
//!
//! Values that do not parse are passed through as strings, so `RunConfig`
//! reports them as an invalid value for the named field.

use serde_json::{json, Map, Value};

use super::run_options::speech_layer;

pub const ENV_PREFIX: &str = "AGENTRUN_";

/// Reads the layer from the process environment.
pub fn env_layer() -> Map<String, Value> {
    env_layer_from(|name| std::env::var(name).ok())
}

/// Reads the layer through `lookup`, which maps a variable name to its value.
pub fn env_layer_from<F>(lookup: F) -> Map<String, Value>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |suffix: &str| {
        lookup(&format!("{}{}", ENV_PREFIX, suffix))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    let mut layer = Map::new();

    if let Some(mode) = var("STREAMING_MODE") {
        layer.insert("streamingMode".into(), json!(mode));
    }
    if let Some(raw) = var("MAX_MODEL_CALLS") {
        let value = raw.parse::<i64>().map(|n| json!(n)).unwrap_or(json!(raw));
        layer.insert("maxModelCalls".into(), value);
    }
    if let Some(list) = var("RESPONSE_MODALITIES") {
        let modalities: Vec<&str> = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        layer.insert("responseModalities".into(), json!(modalities));
    }
    if let Some(b) = var("SAVE_INPUT_BLOBS") {
        layer.insert("saveInputBlobsAsArtifacts".into(), parse_bool(&b));
    }
    if let Some(b) = var("COMPOSITIONAL_FUNCTION_CALLING") {
        layer.insert("supportCompositionalFunctionCalling".into(), parse_bool(&b));
    }
    if let Some(b) = var("OUTPUT_AUDIO_TRANSCRIPTION") {
        let value = match parse_bool(&b) {
            Value::Bool(true) => json!({}),
            // null clears a transcription request from a lower layer
            Value::Bool(false) => Value::Null,
            other => other,
        };
        layer.insert("outputAudioTranscription".into(), value);
    }
    let language = var("LANGUAGE_CODE");
    let voice = var("VOICE_NAME");
    if let Some(speech) = speech_layer(language.as_deref(), voice.as_deref()) {
        layer.insert("speechConfig".into(), speech);
    }
    layer
}

fn parse_bool(s: &str) -> Value {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Value::Bool(true),
        "0" | "false" | "no" | "off" => Value::Bool(false),
        _ => Value::String(s.to_string()),
    }
}
