//! Speech settings carried opaquely to the model backend.
//!
//! `SpeechConfig` owns a `VoiceConfig`, which owns a `PrebuiltVoiceConfig`.
//! Keys are camelCase and unknown keys are rejected at every level.

use serde::{Deserialize, Serialize};

/// Speech synthesis settings for audio-capable runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpeechConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_config: Option<VoiceConfig>,
    /// Language in ISO 639 form, e.g. `en-US`. Not validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl SpeechConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language_code(mut self, code: impl Into<String>) -> Self {
        self.language_code = Some(code.into());
        self
    }

    pub fn with_voice_config(mut self, voice: VoiceConfig) -> Self {
        self.voice_config = Some(voice);
        self
    }

    /// Shorthand for a prebuilt voice by name.
    pub fn with_prebuilt_voice(self, voice_name: impl Into<String>) -> Self {
        self.with_voice_config(VoiceConfig::prebuilt(voice_name))
    }

    /// Prebuilt voice name, if one is configured all the way down.
    pub fn voice_name(&self) -> Option<&str> {
        self.voice_config
            .as_ref()
            .and_then(|v| v.prebuilt_voice_config.as_ref())
            .and_then(|p| p.voice_name.as_deref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VoiceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prebuilt_voice_config: Option<PrebuiltVoiceConfig>,
}

impl VoiceConfig {
    pub fn prebuilt(voice_name: impl Into<String>) -> Self {
        Self {
            prebuilt_voice_config: Some(PrebuiltVoiceConfig {
                voice_name: Some(voice_name.into()),
            }),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PrebuiltVoiceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_name: Option<String>,
}

/// Request for transcription of audio responses. Presence is the signal;
/// the record has no settings of its own.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AudioTranscriptionConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// **Scenario**: A nested camelCase mapping decodes into the ownership tree.
    #[test]
    fn speech_config_decodes_nested_camel_case() {
        let v = json!({
            "languageCode": "en-US",
            "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": "Kore" } }
        });
        let sc: SpeechConfig = serde_json::from_value(v).unwrap();
        assert_eq!(sc.language_code.as_deref(), Some("en-US"));
        assert_eq!(sc.voice_name(), Some("Kore"));
        assert_eq!(
            sc,
            SpeechConfig::new()
                .with_language_code("en-US")
                .with_prebuilt_voice("Kore")
        );
    }

    /// **Scenario**: Unknown keys are rejected at every nesting level.
    #[test]
    fn unknown_keys_rejected_at_each_level() {
        let top = json!({ "languageCode": "en-US", "pitch": 2 });
        assert!(serde_json::from_value::<SpeechConfig>(top).is_err());

        let mid = json!({ "voiceConfig": { "custom": true } });
        assert!(serde_json::from_value::<SpeechConfig>(mid).is_err());

        let leaf = json!({
            "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": "Kore", "speed": 1 } }
        });
        assert!(serde_json::from_value::<SpeechConfig>(leaf).is_err());

        let transcription = json!({ "model": "x" });
        assert!(serde_json::from_value::<AudioTranscriptionConfig>(transcription).is_err());
    }

    #[test]
    fn empty_mappings_are_valid() {
        let sc: SpeechConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(sc, SpeechConfig::default());
        assert_eq!(sc.voice_name(), None);
        let tc: AudioTranscriptionConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(tc, AudioTranscriptionConfig::default());
    }

    #[test]
    fn unset_fields_are_omitted_when_serialized() {
        let sc = SpeechConfig::new().with_language_code("de-DE");
        assert_eq!(serde_json::to_value(&sc).unwrap(), json!({ "languageCode": "de-DE" }));
    }
}
