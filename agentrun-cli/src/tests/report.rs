//! Unit tests for [`render_report`](crate::render_report).

use agentrun::{RunConfig, StreamingMode};

use crate::{render_report, OutputFormat};

/// **Scenario**: JSON output feeds back into RunConfig unchanged.
///
/// Given: a config with non-default streaming mode and bound  
/// When: it is rendered as JSON and parsed again  
/// Then: the parsed config equals the original
#[test]
fn json_report_round_trips() {
    let config = RunConfig::builder()
        .streaming_mode(StreamingMode::Bidi)
        .response_modalities(["TEXT"])
        .max_model_calls(12)
        .build()
        .unwrap();
    let out = render_report(&config, OutputFormat::Json).unwrap();
    assert!(out.ends_with('\n'));
    assert!(out.contains("\"streamingMode\": \"BIDIRECTIONAL\""), "{}", out);
    assert_eq!(RunConfig::from_json_str(&out).unwrap(), config);
}

/// **Scenario**: summary output is the config summary lines.
#[test]
fn summary_report_lists_sections() {
    let out = render_report(&RunConfig::default(), OutputFormat::Summary).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("[config] streaming mode=NONE"));
    assert!(lines[3].ends_with("max_model_calls=500"));
}
