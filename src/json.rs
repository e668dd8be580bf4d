//! JSON bridge for [`Value`].
//!
//! Supported inputs for [`parse_json_array`]:
//! - A JSON array: `[{"a":1}, {"a":2}]`
//! - A single JSON object, treated as a one-element sequence
//! - Newline-delimited JSON (NDJSON): `{"a":1}\n{"a":2}\n`
//!
//! [`Value::Undefined`] and non-finite floats have no JSON form and are written as `null`.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::{TransformError, TransformResult};
use crate::types::{Object, Value};

/// Parse a single JSON document.
pub fn parse_json(input: &str) -> TransformResult<Value> {
    let v = serde_json::from_str::<serde_json::Value>(input)?;
    Ok(Value::from(v))
}

/// Parse a JSON array, a single object or NDJSON into a sequence of items.
pub fn parse_json_array(input: &str) -> TransformResult<Vec<Value>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    // First try parsing as a single JSON value.
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return match v {
            serde_json::Value::Array(items) => Ok(items.into_iter().map(Value::from).collect()),
            obj @ serde_json::Value::Object(_) => Ok(vec![Value::from(obj)]),
            other => Err(TransformError::NotAnArray {
                found: json_kind(&other).to_string(),
            }),
        };
    }

    // Fall back to NDJSON.
    let mut values = Vec::new();
    for line in trimmed.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        values.push(Value::from(serde_json::from_str::<serde_json::Value>(line)?));
    }
    Ok(values)
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int64(i),
                None => Value::Float64(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Utf8(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(v: &Value) -> Self {
        match v {
            Value::Undefined | Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int64(n) => serde_json::Value::from(*n),
            Value::Float64(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Utf8(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int64(n) => serializer.serialize_i64(*n),
            Value::Float64(f) if f.is_finite() => serializer.serialize_f64(*f),
            Value::Float64(_) => serializer.serialize_unit(),
            Value::Utf8(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_json, parse_json_array};
    use crate::error::TransformError;
    use crate::types::Value;

    #[test]
    fn parse_json_maps_numbers_by_kind() {
        let v = parse_json(r#"{"id":1,"score":98.5,"user":{"name":"Ada"},"tags":[null,true]}"#)
            .unwrap();
        assert_eq!(v.get_path("id"), Value::Int64(1));
        assert_eq!(v.get_path("score"), Value::Float64(98.5));
        assert_eq!(v.get_path("user.name"), Value::from("Ada"));
        assert_eq!(v.get_path("tags.0"), Value::Null);
        assert_eq!(v.get_path("tags.1"), Value::Bool(true));
    }

    #[test]
    fn parse_json_array_accepts_arrays_and_ndjson() {
        let arr = parse_json_array(r#"[{"a":1},{"a":2}]"#).unwrap();
        assert_eq!(arr.len(), 2);

        let nd = parse_json_array("{\"a\":1}\n\n{\"a\":2}\n").unwrap();
        assert_eq!(nd, arr);

        assert!(parse_json_array("   ").unwrap().is_empty());
    }

    #[test]
    fn parse_json_array_rejects_scalars_and_bad_lines() {
        assert_eq!(parse_json_array(r#"{"a":1}"#).unwrap().len(), 1);

        let err = parse_json_array("42").unwrap_err();
        assert!(matches!(err, TransformError::NotAnArray { ref found } if found == "number"));

        let err = parse_json_array("{\"a\":1}\nnot json").unwrap_err();
        assert!(err.to_string().starts_with("json error"));
    }

    #[test]
    fn undefined_and_nan_serialize_as_null() {
        let v = Value::Array(vec![Value::Undefined, Value::Float64(f64::NAN), Value::Int64(3)]);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[null,null,3]");
        assert_eq!(serde_json::Value::from(&v), serde_json::json!([null, null, 3]));
    }

    #[test]
    fn value_round_trips_through_serde() {
        let v: Value = serde_json::from_str(r#"{"k":[1,"x",2.5]}"#).unwrap();
        let back: Value = serde_json::from_str(&serde_json::to_string(&v).unwrap()).unwrap();
        assert_eq!(back, v);
    }
}
