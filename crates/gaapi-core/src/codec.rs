//! JSON encoding and decoding of records.
//!
//! Field routing (declared keys to fixed fields, everything else to the
//! extension map) lives in each record's serde implementation. The codec adds
//! the checks that need configuration or a whole-document view, and logs.

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::{CodecConfig, CollisionPolicy};
use crate::error::{CodecError, CodecResult};
use crate::record::Record;

/// Encoder/decoder for records.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec with the given configuration.
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a record as JSON text.
    pub fn encode<R: Record>(&self, record: &R) -> CodecResult<String> {
        self.check_collisions(record)?;
        debug!(
            record = R::TYPE_NAME,
            extension_len = record.extension().len(),
            "Encoding record"
        );
        let text = if self.config.pretty {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };
        Ok(text)
    }

    /// Encode a record as a JSON value.
    pub fn encode_value<R: Record>(&self, record: &R) -> CodecResult<Value> {
        self.check_collisions(record)?;
        debug!(
            record = R::TYPE_NAME,
            extension_len = record.extension().len(),
            "Encoding record"
        );
        Ok(serde_json::to_value(record)?)
    }

    /// Decode a record from JSON text.
    pub fn decode<R: Record>(&self, input: &str) -> CodecResult<R> {
        let value: Value = serde_json::from_str(input)?;
        self.decode_value(value)
    }

    /// Decode a record from a JSON value.
    ///
    /// Keys the record does not declare are kept in its extension map.
    pub fn decode_value<R: Record>(&self, value: Value) -> CodecResult<R> {
        let Value::Object(object) = &value else {
            return Err(CodecError::NotAnObject {
                record: R::TYPE_NAME,
                found: json_type_name(&value),
            });
        };

        for key in object.keys().filter(|key| !R::is_fixed_key(key)) {
            trace!(record = R::TYPE_NAME, key = %key, "Routing unknown key to extension");
        }

        let record: R = serde_json::from_value(value)?;
        debug!(
            record = R::TYPE_NAME,
            extension_len = record.extension().len(),
            "Decoded record"
        );
        Ok(record)
    }

    fn check_collisions<R: Record>(&self, record: &R) -> CodecResult<()> {
        if self.config.collision_policy == CollisionPolicy::Reject {
            if let Some(key) = record.colliding_extension_keys().first() {
                return Err(CodecError::ExtensionCollision {
                    record: R::TYPE_NAME,
                    key: (*key).to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Encode a record as compact JSON with the default codec.
pub fn to_json<R: Record>(record: &R) -> CodecResult<String> {
    Codec::default().encode(record)
}

/// Decode a record from JSON text with the default codec.
pub fn from_json<R: Record>(input: &str) -> CodecResult<R> {
    Codec::default().decode(input)
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GetLegacyGenomeParams, LegacyGenomeSelector, Region};
    use serde_json::json;

    #[test]
    fn test_encode_compact_by_default() {
        let region = Region::new().with_start(Some(5));
        assert_eq!(to_json(&region).unwrap(), r#"{"start":5}"#);
    }

    #[test]
    fn test_encode_pretty() {
        let codec = Codec::new(CodecConfig::new().with_pretty(true));
        let region = Region::new().with_start(Some(5));
        assert_eq!(codec.encode(&region).unwrap(), "{\n  \"start\": 5\n}");
    }

    #[test]
    fn test_decode_rejects_non_object() {
        let result: CodecResult<Region> = from_json("[1, 2]");
        assert!(matches!(
            result,
            Err(CodecError::NotAnObject {
                record: "Region",
                found: "array"
            })
        ));
    }

    #[test]
    fn test_decode_malformed_json() {
        let result: CodecResult<Region> = from_json("{\"start\": ");
        assert!(matches!(result, Err(CodecError::Json(_))));
    }

    #[test]
    fn test_decode_type_mismatch() {
        let result: CodecResult<Region> = from_json(r#"{"start": "five"}"#);
        assert!(matches!(result, Err(CodecError::Json(_))));
    }

    #[test]
    fn test_skip_policy_drops_colliding_entry() {
        let mut params = GetLegacyGenomeParams::new().with_no_data(Some(1));
        params.set_extension("no_data", 0);
        params.set_extension("priority", "high");

        let encoded = Codec::default().encode_value(&params).unwrap();
        assert_eq!(encoded, json!({"no_data": 1, "priority": "high"}));
    }

    #[test]
    fn test_reject_policy_fails_on_collision() {
        let codec = Codec::new(CodecConfig::new().with_collision_policy(CollisionPolicy::Reject));
        let mut selector = LegacyGenomeSelector::new();
        selector.set_extension("ref", "9/9/9");

        let result = codec.encode(&selector);
        assert!(matches!(
            result,
            Err(CodecError::ExtensionCollision { record: "LegacyGenomeSelector", ref key }) if key == "ref"
        ));
    }

    #[test]
    fn test_reject_policy_allows_clean_records() {
        let codec = Codec::new(CodecConfig::new().with_collision_policy(CollisionPolicy::Reject));
        let mut selector = LegacyGenomeSelector::new();
        selector.set_extension("label", "primary");
        assert_eq!(codec.encode(&selector).unwrap(), r#"{"label":"primary"}"#);
    }
}
