//! The coerced key/value body sent to the prediction endpoint.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// Every integer up to this magnitude is exact in an `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A single coerced form value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Numeric field. Whole numbers serialize without a fraction (`500`,
    /// not `500.0`); non-finite values serialize as `null`.
    Number(f64),
    /// Categorical field, passed through verbatim.
    Text(String),
    /// Boolean toggle, serialized as `1` or `0`.
    Flag(bool),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Flag(b) => Some(if *b { 1.0 } else { 0.0 }),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Number(n) if is_safe_integer(*n) => serializer.serialize_i64(*n as i64),
            FieldValue::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            FieldValue::Number(_) => serializer.serialize_none(),
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Flag(b) => serializer.serialize_u8(u8::from(*b)),
        }
    }
}

fn is_safe_integer(n: f64) -> bool {
    n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER
}

/// Field name → coerced value. Later inserts overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormPayload {
    fields: BTreeMap<String, FieldValue>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}
