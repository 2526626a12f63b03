//! Run configuration summary for logging and verbose output.
//!
//! Groups a [`RunConfig`] into sections (streaming, speech, artifacts,
//! limits) that render as stable `key=value` lines, e.g. to stderr when the
//! CLI runs with `--verbose`.

use std::fmt;

use serde::Serialize;

use crate::config::RunConfig;

/// Streaming section: declared mode and the transport a Runner must use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StreamingSummary {
    pub mode: String,
    pub transport: String,
    pub compositional_function_calling: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SpeechSummary {
    pub response_modalities: Vec<String>,
    pub language_code: Option<String>,
    pub voice_name: Option<String>,
    pub output_audio_transcription: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArtifactSummary {
    pub save_input_blobs: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LimitSummary {
    /// `None` when model calls are unbounded.
    pub max_model_calls: Option<u64>,
}

/// All sections for one config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunConfigSummary {
    pub streaming: StreamingSummary,
    pub speech: SpeechSummary,
    pub artifacts: ArtifactSummary,
    pub limits: LimitSummary,
}

/// Builds the summary for `config`.
pub fn build_config_summary(config: &RunConfig) -> RunConfigSummary {
    let speech = config.speech_config();
    RunConfigSummary {
        streaming: StreamingSummary {
            mode: config.streaming_mode().to_string(),
            transport: config.effective_transport().to_string(),
            compositional_function_calling: config.support_compositional_function_calling(),
        },
        speech: SpeechSummary {
            response_modalities: config
                .effective_response_modalities()
                .into_iter()
                .map(String::from)
                .collect(),
            language_code: speech.and_then(|s| s.language_code.clone()),
            voice_name: speech.and_then(|s| s.voice_name()).map(String::from),
            output_audio_transcription: config.output_audio_transcription().is_some(),
        },
        artifacts: ArtifactSummary {
            save_input_blobs: config.save_input_blobs_as_artifacts(),
        },
        limits: LimitSummary {
            max_model_calls: config.model_call_limit(),
        },
    }
}

impl RunConfigSummary {
    pub fn print_to_stderr(&self) {
        eprint!("{}", self);
    }
}

fn opt(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("-")
}

impl fmt::Display for RunConfigSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[config] streaming mode={} transport={} cfc={}",
            self.streaming.mode,
            self.streaming.transport,
            self.streaming.compositional_function_calling
        )?;
        writeln!(
            f,
            "[config] speech modalities={} language={} voice={} transcription={}",
            self.speech.response_modalities.join(","),
            opt(&self.speech.language_code),
            opt(&self.speech.voice_name),
            self.speech.output_audio_transcription
        )?;
        writeln!(
            f,
            "[config] artifacts save_input_blobs={}",
            self.artifacts.save_input_blobs
        )?;
        match self.limits.max_model_calls {
            Some(n) => writeln!(f, "[config] limits max_model_calls={}", n),
            None => writeln!(f, "[config] limits max_model_calls=unbounded"),
        }
    }
}
