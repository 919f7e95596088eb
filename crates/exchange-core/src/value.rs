use crate::error::{ExchangeError, ExchangeResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Message body carried by the bus, keyed by field name.
pub type Payload = BTreeMap<String, DataValue>;

/// A single primitive payload value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl DataValue {
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DataValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Float(f) => Some(*f),
            DataValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DataValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    fn from_json(key: &str, value: Value) -> ExchangeResult<Self> {
        Ok(match value {
            Value::Null => DataValue::Null,
            Value::Bool(b) => DataValue::Boolean(b),
            Value::String(s) => DataValue::String(s),
            Value::Number(n) => match n.as_i64() {
                Some(i) => DataValue::Integer(i),
                // u64 beyond i64 range and real numbers both land here
                None => DataValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::Array(_) => {
                return Err(ExchangeError::UnsupportedValue {
                    key: key.to_string(),
                    kind: "array",
                })
            }
            Value::Object(_) => {
                return Err(ExchangeError::UnsupportedValue {
                    key: key.to_string(),
                    kind: "object",
                })
            }
        })
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::String(value.to_string())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::String(value)
    }
}

impl From<i64> for DataValue {
    fn from(value: i64) -> Self {
        DataValue::Integer(value)
    }
}

impl From<i32> for DataValue {
    fn from(value: i32) -> Self {
        DataValue::Integer(value.into())
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        DataValue::Float(value)
    }
}

impl From<bool> for DataValue {
    fn from(value: bool) -> Self {
        DataValue::Boolean(value)
    }
}

impl<T: Into<DataValue>> From<Option<T>> for DataValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DataValue::Null, Into::into)
    }
}

impl From<DataValue> for Value {
    fn from(value: DataValue) -> Self {
        match value {
            DataValue::String(s) => Value::String(s),
            DataValue::Integer(i) => Value::Number(i.into()),
            DataValue::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
            DataValue::Boolean(b) => Value::Bool(b),
            DataValue::Null => Value::Null,
        }
    }
}

/// Builds a payload from a JSON object. Nested arrays and objects are rejected.
pub fn payload_from_json(value: Value) -> ExchangeResult<Payload> {
    let object = match value {
        Value::Object(object) => object,
        Value::Array(_) => {
            return Err(ExchangeError::UnsupportedValue {
                key: String::new(),
                kind: "array",
            })
        }
        _ => {
            return Err(ExchangeError::UnsupportedValue {
                key: String::new(),
                kind: "scalar",
            })
        }
    };

    object
        .into_iter()
        .map(|(key, value)| {
            let value = DataValue::from_json(&key, value)?;
            Ok((key, value))
        })
        .collect()
}

/// Converts a payload to a JSON object. JSON has no NaN or infinity, so
/// such floats are written as `null` and read back as [`DataValue::Null`].
pub fn payload_to_json(payload: &Payload) -> Value {
    let object: Map<String, Value> = payload
        .iter()
        .map(|(key, value)| (key.clone(), value.clone().into()))
        .collect();
    Value::Object(object)
}
