//! Scaffold option values and their conversion from GUI input.

use serde::{Deserialize, Serialize};

use super::ScaffoldPackage;

/// Value of a scaffold option.
///
/// Serialized untagged, so a settings file holds plain JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
    Package(Box<ScaffoldPackage>),
}

impl OptionValue {
    /// Converts `input` to the type of `self`.
    ///
    /// Text is parsed; numbers convert between integer and real (reals
    /// truncate); booleans convert to and from 0/1. Returns `None` when the
    /// input cannot represent a value of this type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mesh_generator::scaffold::OptionValue;
    ///
    /// let current = OptionValue::Integer(4);
    /// assert_eq!(current.coerce(&OptionValue::from("6")), Some(OptionValue::Integer(6)));
    /// assert_eq!(current.coerce(&OptionValue::from("six")), None);
    /// ```
    pub fn coerce(&self, input: &OptionValue) -> Option<OptionValue> {
        use OptionValue::*;
        match (self, input) {
            (Bool(_), Bool(value)) => Some(Bool(*value)),
            (Bool(_), Integer(value)) => Some(Bool(*value != 0)),
            (Bool(_), Text(text)) => parse_bool(text).map(Bool),

            (Integer(_), Integer(value)) => Some(Integer(*value)),
            (Integer(_), Real(value)) if value.is_finite() => Some(Integer(value.trunc() as i64)),
            (Integer(_), Bool(value)) => Some(Integer(i64::from(*value))),
            (Integer(_), Text(text)) => text.trim().parse().ok().map(Integer),

            (Real(_), Real(value)) => Some(Real(*value)),
            (Real(_), Integer(value)) => Some(Real(*value as f64)),
            (Real(_), Bool(value)) => Some(Real(f64::from(u8::from(*value)))),
            (Real(_), Text(text)) => text.trim().parse().ok().map(Real),

            (Text(_), Text(text)) => Some(Text(text.clone())),
            (Text(_), Bool(value)) => Some(Text(value.to_string())),
            (Text(_), Integer(value)) => Some(Text(value.to_string())),
            (Text(_), Real(value)) => Some(Text(value.to_string())),

            (Package(_), Package(package)) => Some(Package(package.clone())),
            _ => None,
        }
    }

    /// Returns the nested package, if this option holds one.
    pub fn as_package(&self) -> Option<&ScaffoldPackage> {
        match self {
            OptionValue::Package(package) => Some(package),
            _ => None,
        }
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Real(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<ScaffoldPackage> for OptionValue {
    fn from(package: ScaffoldPackage) -> Self {
        OptionValue::Package(Box::new(package))
    }
}
