//! Assemble and validate a run config from file, environment and options.

use agentrun::{ConfigObserver, RunConfig};
use serde_json::{Map, Value};

use super::env::env_layer;
use super::file::file_layer;
use super::merge::merge_layer;
use super::run_options::RunOptions;

/// Error type used for config loading.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Builds a [`RunConfig`] from the configured layers.
///
/// Loads `.env` unless `options.ignore_env` is set. Warnings produced during
/// construction go to `observer`.
///
/// # Errors
///
/// I/O or JSON errors for the config file, or the [`agentrun::ConfigError`]
/// from construction.
pub fn load_run_config(
    options: &RunOptions,
    observer: &dyn ConfigObserver,
) -> Result<RunConfig, Error> {
    let mut mapping = Map::new();
    if let Some(path) = &options.config_path {
        merge_layer(&mut mapping, file_layer(path)?);
    }
    if !options.ignore_env {
        dotenv::dotenv().ok();
        merge_layer(&mut mapping, env_layer());
    }
    merge_layer(&mut mapping, options.to_layer());

    tracing::debug!(fields = mapping.len(), "Merged run config layers");
    let config = RunConfig::from_value_with_observer(Value::Object(mapping), observer)?;
    Ok(config)
}
