//! Logging helpers for run configuration events.
//!
//! Structured `tracing` events so a subscriber (e.g. the CLI's `EnvFilter`
//! subscriber) can filter on target and fields.

use crate::config::RunConfig;

/// Log the non-fatal "unbounded model calls" outcome of construction.
pub fn log_unbounded_model_calls(max_model_calls: i64) {
    tracing::warn!(max_model_calls, "model calls are unbounded for this run");
}

/// Log a successfully built configuration.
pub fn log_config_built(config: &RunConfig) {
    tracing::debug!(
        streaming_mode = %config.streaming_mode(),
        max_model_calls = config.max_model_calls(),
        save_input_blobs_as_artifacts = config.save_input_blobs_as_artifacts(),
        support_cfc = config.support_compositional_function_calling(),
        "Run config built"
    );
}

/// Log a rejected construction attempt (unknown field, invalid value or overflow).
pub fn log_config_rejected(error: &crate::error::ConfigError) {
    tracing::debug!(%error, "Run config rejected");
}
