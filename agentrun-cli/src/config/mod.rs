//! Configuration sources for the CLI.
//!
//! A run config is assembled from three layers, lowest precedence first:
//! a JSON file, `AGENTRUN_*` environment variables (after loading `.env`),
//! and [`RunOptions`] from the command line. The merged mapping is handed to
//! [`RunConfig::from_value_with_observer`](agentrun::RunConfig::from_value_with_observer),
//! so strictness and warnings apply to every layer the same way.

mod env;
mod file;
mod load;
mod merge;
mod run_options;

pub use env::{env_layer, env_layer_from, ENV_PREFIX};
pub use file::file_layer;
pub use load::{load_run_config, Error};
pub use merge::merge_layer;
pub use run_options::RunOptions;
