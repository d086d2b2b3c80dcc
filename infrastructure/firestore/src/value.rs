//! Decoding of Firestore REST values into plain JSON.
//!
//! The REST API wraps every field in a single-key object naming its type
//! (`{"stringValue": "x"}`, `{"integerValue": "3"}`, ...). Exports carry
//! the bare values instead.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Number, Value, json};

use business::domain::guild_job::errors::GuildJobError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
enum FirestoreValue {
    NullValue(serde::de::IgnoredAny),
    BooleanValue(bool),
    IntegerValue(String),
    DoubleValue(Value),
    TimestampValue(String),
    StringValue(String),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(LatLng),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

#[derive(Debug, Default, Deserialize)]
struct LatLng {
    #[serde(default)]
    latitude: f64,
    #[serde(default)]
    longitude: f64,
}

#[derive(Debug, Default, Deserialize)]
struct ArrayValue {
    #[serde(default)]
    values: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct MapValue {
    #[serde(default)]
    fields: Map<String, Value>,
}

/// Decodes the `fields` object of a document, keeping field order.
pub fn decode_fields(fields: Map<String, Value>) -> Result<Map<String, Value>, GuildJobError> {
    fields
        .into_iter()
        .map(|(key, value)| {
            let decoded = decode_value(value)
                .map_err(|e| GuildJobError::InvalidDocument(format!("field '{}': {}", key, e)))?;
            Ok((key, decoded))
        })
        .collect()
}

/// Decodes one typed Firestore value.
pub fn decode_value(value: Value) -> Result<Value, String> {
    let typed: FirestoreValue = serde_json::from_value(value).map_err(|e| e.to_string())?;

    match typed {
        FirestoreValue::NullValue(_) => Ok(Value::Null),
        FirestoreValue::BooleanValue(b) => Ok(Value::Bool(b)),
        FirestoreValue::IntegerValue(raw) => raw
            .parse::<i64>()
            .map(Value::from)
            .map_err(|e| format!("integerValue '{}': {}", raw, e)),
        FirestoreValue::DoubleValue(raw) => Ok(decode_double(raw)),
        FirestoreValue::TimestampValue(raw) => decode_timestamp(&raw),
        FirestoreValue::StringValue(s) | FirestoreValue::BytesValue(s) => Ok(Value::String(s)),
        FirestoreValue::ReferenceValue(path) => Ok(Value::String(document_path(&path))),
        FirestoreValue::GeoPointValue(point) => Ok(json!({
            "latitude": point.latitude,
            "longitude": point.longitude,
        })),
        FirestoreValue::ArrayValue(array) => array
            .values
            .into_iter()
            .map(decode_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        FirestoreValue::MapValue(map) => map
            .fields
            .into_iter()
            .map(|(key, value)| decode_value(value).map(|v| (key, v)))
            .collect::<Result<Map<_, _>, _>>()
            .map(Value::Object),
    }
}

// NaN and the infinities arrive as strings and have no JSON form.
fn decode_double(raw: Value) -> Value {
    match raw {
        Value::Number(n) => n
            .as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

fn decode_timestamp(raw: &str) -> Result<Value, String> {
    let timestamp = DateTime::parse_from_rfc3339(raw)
        .map_err(|e| format!("timestampValue '{}': {}", raw, e))?
        .with_timezone(&Utc);

    Ok(json!({
        "seconds": timestamp.timestamp(),
        "nanoseconds": timestamp.timestamp_subsec_nanos(),
    }))
}

/// Strips `projects/{p}/databases/{d}/documents/` from a resource name.
fn document_path(resource_name: &str) -> String {
    match resource_name.split_once("/documents/") {
        Some((_, path)) => path.to_string(),
        None => resource_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_scalar_values() {
        assert_eq!(decode_value(json!({"nullValue": null})).unwrap(), Value::Null);
        assert_eq!(decode_value(json!({"booleanValue": true})).unwrap(), json!(true));
        assert_eq!(decode_value(json!({"integerValue": "-42"})).unwrap(), json!(-42));
        assert_eq!(decode_value(json!({"doubleValue": 1.5})).unwrap(), json!(1.5));
        assert_eq!(decode_value(json!({"stringValue": "depot"})).unwrap(), json!("depot"));
        assert_eq!(decode_value(json!({"bytesValue": "AQID"})).unwrap(), json!("AQID"));
    }

    #[test]
    fn should_decode_large_integers_without_losing_precision() {
        let decoded = decode_value(json!({"integerValue": "9007199254740993"})).unwrap();

        assert_eq!(decoded.as_i64(), Some(9_007_199_254_740_993));
    }

    #[test]
    fn should_decode_non_finite_doubles_as_null() {
        assert_eq!(decode_value(json!({"doubleValue": "NaN"})).unwrap(), Value::Null);
        assert_eq!(decode_value(json!({"doubleValue": "Infinity"})).unwrap(), Value::Null);
    }

    #[test]
    fn should_decode_timestamp_into_seconds_and_nanoseconds() {
        let decoded = decode_value(json!({"timestampValue": "2023-03-04T15:40:52.123456Z"})).unwrap();

        assert_eq!(decoded, json!({"seconds": 1677944452, "nanoseconds": 123456000}));
    }

    #[test]
    fn should_decode_reference_as_document_path() {
        let decoded = decode_value(json!({
            "referenceValue": "projects/demo/databases/(default)/documents/env/prod/regions/7"
        }))
        .unwrap();

        assert_eq!(decoded, json!("env/prod/regions/7"));
    }

    #[test]
    fn should_decode_geo_point_with_omitted_zero() {
        let decoded = decode_value(json!({"geoPointValue": {"latitude": 52.5}})).unwrap();

        assert_eq!(decoded, json!({"latitude": 52.5, "longitude": 0.0}));
    }

    #[test]
    fn should_decode_nested_arrays_and_maps() {
        let decoded = decode_value(json!({
            "arrayValue": {"values": [
                {"mapValue": {"fields": {
                    "Type": {"stringValue": "relative_region"},
                    "Value": {"integerValue": "2"}
                }}},
                {"arrayValue": {}}
            ]}
        }))
        .unwrap();

        assert_eq!(decoded, json!([{"Type": "relative_region", "Value": 2}, []]));
    }

    #[test]
    fn should_decode_empty_map_value() {
        assert_eq!(decode_value(json!({"mapValue": {}})).unwrap(), json!({}));
    }

    #[test]
    fn should_keep_field_order_of_document() {
        let mut fields = Map::new();
        fields.insert("Zeta".to_string(), json!({"integerValue": "1"}));
        fields.insert("Alpha".to_string(), json!({"integerValue": "2"}));

        let decoded = decode_fields(fields).unwrap();

        let keys: Vec<&str> = decoded.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn should_reject_unknown_value_kind() {
        let mut fields = Map::new();
        fields.insert("Weird".to_string(), json!({"vectorValue": {}}));

        let result = decode_fields(fields);

        match result {
            Err(GuildJobError::InvalidDocument(message)) => assert!(message.contains("Weird")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn should_reject_malformed_integer() {
        assert!(decode_value(json!({"integerValue": "twelve"})).is_err());
    }
}
