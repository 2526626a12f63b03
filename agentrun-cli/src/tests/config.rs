//! Unit tests for [`load_run_config`](crate::load_run_config) and its layers.
//!
//! Scenarios: file only, precedence file < env < options, strict rejection of
//! unknown keys from the file, warnings for unbounded runs. Tests that touch
//! AGENTRUN_* variables hold a static lock so they do not race.

use std::io::Write;
use std::sync::Mutex;

use agentrun::{ConfigError, ConfigWarning, RecordingObserver, StreamingMode};

use crate::{load_run_config, RunOptions};

static ENV_LOCK: std::sync::OnceLock<Mutex<()>> = std::sync::OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|p| p.into_inner())
}

fn write_config(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write config");
    file
}

/// **Scenario**: a config file alone builds the config.
///
/// Given: a file with streamingMode and maxModelCalls, env ignored  
/// When: load_run_config is called  
/// Then: the config carries the file's values and no warning is recorded
#[test]
fn file_only_builds_config() {
    let file = write_config(r#"{ "streamingMode": "SERVER_SENT_EVENTS", "maxModelCalls": 200 }"#);
    let options = RunOptions {
        config_path: Some(file.path().to_path_buf()),
        ignore_env: true,
        ..Default::default()
    };
    let observer = RecordingObserver::new();

    let config = load_run_config(&options, &observer).expect("file config should load");

    assert_eq!(config.streaming_mode(), StreamingMode::Sse);
    assert_eq!(config.max_model_calls(), 200);
    assert!(observer.is_empty());
}

/// **Scenario**: an unknown key in the file is rejected as a ConfigError.
#[test]
fn unknown_key_in_file_is_rejected() {
    let file = write_config(r#"{ "maxModelCalls": 10, "maxLlmCalls": 10 }"#);
    let options = RunOptions {
        config_path: Some(file.path().to_path_buf()),
        ignore_env: true,
        ..Default::default()
    };

    let err = load_run_config(&options, &RecordingObserver::new()).unwrap_err();

    let err = err
        .downcast_ref::<ConfigError>()
        .expect("should be a ConfigError");
    assert_eq!(err, &ConfigError::UnknownField("maxLlmCalls".into()));
}

#[test]
fn missing_file_is_an_error() {
    let options = RunOptions {
        config_path: Some("/nonexistent/agentrun/run.json".into()),
        ignore_env: true,
        ..Default::default()
    };
    let err = load_run_config(&options, &RecordingObserver::new()).unwrap_err();
    assert!(err.to_string().contains("cannot read"), "{}", err);
}

#[test]
fn non_object_file_is_an_error() {
    let file = write_config("[1, 2, 3]");
    let options = RunOptions {
        config_path: Some(file.path().to_path_buf()),
        ignore_env: true,
        ..Default::default()
    };
    let err = load_run_config(&options, &RecordingObserver::new()).unwrap_err();
    assert!(err.to_string().contains("JSON object"), "{}", err);
}

/// **Scenario**: options override the file; nested speech settings merge.
///
/// Given: a file with a language code and a bound of 10  
/// When: options set a voice name and a bound of -1  
/// Then: both speech values are present, the bound is -1 and one warning is recorded
#[test]
fn options_override_file_and_merge_speech() {
    let file = write_config(
        r#"{ "speechConfig": { "languageCode": "en-US" }, "maxModelCalls": 10 }"#,
    );
    let options = RunOptions {
        config_path: Some(file.path().to_path_buf()),
        max_model_calls: Some(-1),
        voice_name: Some("Kore".into()),
        ignore_env: true,
        ..Default::default()
    };
    let observer = RecordingObserver::new();

    let config = load_run_config(&options, &observer).unwrap();

    let speech = config.speech_config().expect("speech config");
    assert_eq!(speech.language_code.as_deref(), Some("en-US"));
    assert_eq!(speech.voice_name(), Some("Kore"));
    assert_eq!(config.max_model_calls(), -1);
    assert_eq!(
        observer.warnings(),
        vec![ConfigWarning::UnboundedModelCalls {
            max_model_calls: -1
        }]
    );
}

/// **Scenario**: env sits between file and options in precedence.
///
/// Given: file sets NONE/10, env sets sse/20, options set the bound to 30  
/// When: load_run_config is called with env enabled  
/// Then: streaming mode comes from env and the bound from options
#[test]
fn env_layer_sits_between_file_and_options() {
    let _guard = env_lock();
    let saved_mode = std::env::var("AGENTRUN_STREAMING_MODE").ok();
    let saved_calls = std::env::var("AGENTRUN_MAX_MODEL_CALLS").ok();
    std::env::set_var("AGENTRUN_STREAMING_MODE", "sse");
    std::env::set_var("AGENTRUN_MAX_MODEL_CALLS", "20");

    let file = write_config(r#"{ "streamingMode": "NONE", "maxModelCalls": 10 }"#);
    let options = RunOptions {
        config_path: Some(file.path().to_path_buf()),
        max_model_calls: Some(30),
        ..Default::default()
    };
    let result = load_run_config(&options, &RecordingObserver::new());

    restore("AGENTRUN_STREAMING_MODE", saved_mode);
    restore("AGENTRUN_MAX_MODEL_CALLS", saved_calls);

    let config = result.expect("layered config should load");
    assert_eq!(config.streaming_mode(), StreamingMode::Sse);
    assert_eq!(config.max_model_calls(), 30);
}

/// **Scenario**: env `false` turns off features the file turned on.
///
/// Given: a file enabling transcription and input blob saving  
/// When: env sets both AGENTRUN_OUTPUT_AUDIO_TRANSCRIPTION and AGENTRUN_SAVE_INPUT_BLOBS to false  
/// Then: the loaded config has neither enabled
#[test]
fn env_false_overrides_file_true() {
    let _guard = env_lock();
    let saved_transcription = std::env::var("AGENTRUN_OUTPUT_AUDIO_TRANSCRIPTION").ok();
    let saved_blobs = std::env::var("AGENTRUN_SAVE_INPUT_BLOBS").ok();
    std::env::set_var("AGENTRUN_OUTPUT_AUDIO_TRANSCRIPTION", "false");
    std::env::set_var("AGENTRUN_SAVE_INPUT_BLOBS", "false");

    let file = write_config(
        r#"{ "outputAudioTranscription": {}, "saveInputBlobsAsArtifacts": true }"#,
    );
    let options = RunOptions {
        config_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let result = load_run_config(&options, &RecordingObserver::new());

    restore("AGENTRUN_OUTPUT_AUDIO_TRANSCRIPTION", saved_transcription);
    restore("AGENTRUN_SAVE_INPUT_BLOBS", saved_blobs);

    let config = result.expect("layered config should load");
    assert!(!config.save_input_blobs_as_artifacts());
    assert!(config.output_audio_transcription().is_none());
}

/// **Scenario**: an ill-typed env value is reported against its field.
#[test]
fn invalid_env_value_names_field() {
    let _guard = env_lock();
    let saved = std::env::var("AGENTRUN_SAVE_INPUT_BLOBS").ok();
    std::env::set_var("AGENTRUN_SAVE_INPUT_BLOBS", "maybe");

    let result = load_run_config(&RunOptions::default(), &RecordingObserver::new());

    restore("AGENTRUN_SAVE_INPUT_BLOBS", saved);

    let err = result.unwrap_err();
    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::InvalidValue { field, .. }) => {
            assert_eq!(field.as_deref(), Some("saveInputBlobsAsArtifacts"))
        }
        other => panic!("expected InvalidValue, got {:?}", other),
    }
}

fn restore(name: &str, saved: Option<String>) {
    match saved {
        Some(v) => std::env::set_var(name, v),
        None => std::env::remove_var(name),
    }
}
