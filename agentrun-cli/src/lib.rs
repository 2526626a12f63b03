//! agentrun-cli library: load, validate and summarise a run config.
//!
//! Merges a JSON file, `AGENTRUN_*` env vars (and `.env`) and command-line
//! overrides into one field mapping and builds an [`agentrun::RunConfig`] from it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agentrun::TracingObserver;
//! use agentrun_cli::{load_run_config, RunOptions};
//!
//! let options = RunOptions {
//!     streaming_mode: Some("sse".into()),
//!     max_model_calls: Some(200),
//!     ..Default::default()
//! };
//! let config = load_run_config(&options, &TracingObserver).unwrap();
//! agentrun::build_config_summary(&config).print_to_stderr();
//! ```

mod config;
mod logging;
mod report;

pub use config::{
    env_layer, env_layer_from, file_layer, load_run_config, merge_layer, Error, RunOptions,
    ENV_PREFIX,
};
pub use logging::init_tracing;
pub use report::{render_report, OutputFormat};

#[cfg(test)]
mod tests;
