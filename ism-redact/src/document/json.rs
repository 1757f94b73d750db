//! `serde_json::Value` support for documents.
//!
//! Conversions are lossless for everything JSON can express. `null` maps to
//! [`Node::Absent`] and back; non-finite floats cannot be represented in JSON
//! and are emitted as `null`.

use serde_json::{Map, Number, Value};

use super::node::{Node, Scalar};

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Bool(flag) => Self::Scalar(Scalar::Bool(flag)),
            Value::Number(number) => Self::Scalar(Scalar::from(number)),
            Value::String(text) => Self::Scalar(Scalar::String(text)),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => {
                Self::Mapping(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}

impl From<Number> for Scalar {
    fn from(number: Number) -> Self {
        if let Some(value) = number.as_i64() {
            Self::Int(value)
        } else if let Some(value) = number.as_u64() {
            Self::UInt(value)
        } else {
            // serde_json numbers are always representable as one of the three.
            Self::Float(number.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Bool(flag) => Self::Bool(flag),
            Scalar::Int(value) => Self::Number(value.into()),
            Scalar::UInt(value) => Self::Number(value.into()),
            Scalar::Float(value) => Number::from_f64(value).map_or(Self::Null, Self::Number),
            Scalar::String(text) => Self::String(text),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Absent => Self::Null,
            Node::Scalar(scalar) => scalar.into(),
            Node::Sequence(items) => Self::Array(items.into_iter().map(Value::from).collect()),
            Node::Mapping(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}
