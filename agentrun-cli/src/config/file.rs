//! JSON file layer.

use std::path::Path;

use serde_json::{Map, Value};

use super::load::Error;

/// Reads a JSON object from `path`. Keys are passed through untouched so
/// that unknown fields are reported by `RunConfig` itself.
pub fn file_layer(path: &Path) -> Result<Map<String, Value>, Error> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        std::io::Error::new(e.kind(), format!("cannot read {}: {}", path.display(), e))
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("{} is not valid JSON: {}", path.display(), e),
        )
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("{} must contain a JSON object", path.display()),
        )
        .into()),
    }
}
