//! Value held by a form field.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Current value of a field.
///
/// Serializes as the bare JSON value (`null`, bool, number or string).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Nothing entered or selected.
    #[default]
    Empty,
    /// Checkbox-like value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Free text.
    Text(String),
}

impl FieldValue {
    /// Whether the field holds no content. Empty text counts as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }

    /// Text view of the value, borrowed when possible.
    #[must_use]
    pub fn as_text(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Self::Text(text) => std::borrow::Cow::Borrowed(text),
            other => std::borrow::Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_emptiness() {
        assert!(FieldValue::Empty.is_empty());
        assert!(FieldValue::from("").is_empty());
        assert!(!FieldValue::from("x").is_empty());
        assert!(!FieldValue::from(false).is_empty());
        assert!(!FieldValue::from(0).is_empty());
    }

    #[test]
    fn test_display_drops_integral_fraction() {
        assert_eq!(FieldValue::from(42).to_string(), "42");
        assert_eq!(FieldValue::from(2.5).to_string(), "2.5");
        assert_eq!(FieldValue::Empty.to_string(), "");
    }

    #[test]
    fn test_json_shape() {
        let values = vec![
            FieldValue::Empty,
            FieldValue::from(true),
            FieldValue::from(3),
            FieldValue::from("pix"),
        ];
        let encoded = serde_json::to_value(&values).unwrap();
        assert_eq!(encoded, json!([null, true, 3.0, "pix"]));

        let decoded: Vec<FieldValue> = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, values);
    }
}
