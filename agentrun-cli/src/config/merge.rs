//! Layer merging for field mappings.

use serde_json::{Map, Value};

/// Merges `overlay` into `base`. Nested objects merge key by key; any other
/// value in `overlay` replaces the one in `base`.
pub fn merge_layer(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_layer(existing, incoming)
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    /// **Scenario**: nested speechConfig keys from two layers are combined.
    #[test]
    fn nested_objects_merge_key_by_key() {
        let mut base = obj(json!({
            "speechConfig": { "languageCode": "en-US" },
            "maxModelCalls": 10
        }));
        merge_layer(
            &mut base,
            obj(json!({
                "speechConfig": {
                    "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": "Kore" } }
                },
                "maxModelCalls": 20
            })),
        );
        assert_eq!(
            Value::Object(base),
            json!({
                "speechConfig": {
                    "languageCode": "en-US",
                    "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": "Kore" } }
                },
                "maxModelCalls": 20
            })
        );
    }

    #[test]
    fn scalars_and_arrays_replace() {
        let mut base = obj(json!({ "responseModalities": ["AUDIO", "TEXT"] }));
        merge_layer(&mut base, obj(json!({ "responseModalities": ["TEXT"] })));
        assert_eq!(base["responseModalities"], json!(["TEXT"]));
    }
}
