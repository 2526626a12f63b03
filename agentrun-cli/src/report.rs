//! Rendering a validated config for stdout.

use agentrun::{build_config_summary, RunConfig};

/// How the binary prints a validated config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `[config] key=value` summary lines.
    #[default]
    Summary,
    /// Pretty JSON with camelCase field names (feeds back into `--config`).
    Json,
}

/// Renders `config` in the given format.
pub fn render_report(
    config: &RunConfig,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Summary => Ok(build_config_summary(config).to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(config).map(|mut s| {
            s.push('\n');
            s
        }),
    }
}
