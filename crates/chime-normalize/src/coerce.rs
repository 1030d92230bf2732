//! Lenient scalar coercion for fields the backend does not type consistently.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// String spellings accepted as `true`, compared after trimming and
/// lower-casing.
pub const TRUTHY_TOKENS: &[&str] = &["1", "true", "yes", "on", "enabled"];

/// A boolean-like field as it arrived on the wire.
///
/// The backend sends flags as JSON booleans, `0`/`1` integers, or assorted
/// strings depending on the endpoint.  Decoding never fails: arrays and
/// objects land in [`FlagValue::Other`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FlagValue {
    /// Field missing or `null`.
    #[default]
    Absent,
    Bool(bool),
    Number(f64),
    Text(String),
    Other,
}

impl FlagValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Value> for FlagValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n.as_f64().map_or(Self::Other, Self::Number),
            Value::String(s) => Self::Text(s),
            Value::Array(_) | Value::Object(_) => Self::Other,
        }
    }
}

impl From<bool> for FlagValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for FlagValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for FlagValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl<'de> Deserialize<'de> for FlagValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.map_or(Self::Absent, Self::from))
    }
}

/// Resolve a boolean-like value.
///
/// Only a missing value (or one of an unusable shape) yields `default`.  A
/// string that is not one of [`TRUTHY_TOKENS`] is `false`, not `default`.
pub fn coerce_bool(value: &FlagValue, default: bool) -> bool {
    match value {
        FlagValue::Absent | FlagValue::Other => default,
        FlagValue::Bool(b) => *b,
        FlagValue::Number(n) => n.trunc() == 1.0,
        FlagValue::Text(s) => {
            let token = s.trim().to_lowercase();
            TRUTHY_TOKENS.contains(&token.as_str())
        }
    }
}

/// Narrow a JSON number to `i32`, truncating toward zero.
///
/// Out-of-range values saturate at the `i32` bounds and NaN becomes zero.
pub fn narrow_to_i32(value: f64) -> i32 {
    value as i32
}
