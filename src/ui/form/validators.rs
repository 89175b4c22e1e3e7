//! Field validators.
//!
//! A validator looks at a [`FieldValue`] and returns an error message when
//! the value is not acceptable. Only [`required`] rejects an empty value;
//! every other validator lets emptiness through so optional fields can
//! still carry format checks.

use std::fmt;
use std::sync::Arc;

use super::value::FieldValue;

type Check = dyn Fn(&FieldValue) -> Option<String> + Send + Sync;

/// A named check run against a field's value.
#[derive(Clone)]
pub struct Validator {
    name: &'static str,
    check: Arc<Check>,
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").field("name", &self.name).finish()
    }
}

impl Validator {
    /// Creates a custom validator.
    ///
    /// ```rust
    /// use quarry_ui::ui::form::{FieldValue, Validator};
    ///
    /// let even = Validator::new("even", |value| match value {
    ///     FieldValue::Number(n) if n % 2.0 != 0.0 => Some("Must be even".to_string()),
    ///     _ => None,
    /// });
    ///
    /// assert!(even.check(&FieldValue::from(3)).is_some());
    /// assert!(even.check(&FieldValue::from(4)).is_none());
    /// ```
    pub fn new<F>(name: &'static str, check: F) -> Self
    where
        F: Fn(&FieldValue) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            name,
            check: Arc::new(check),
        }
    }

    /// Name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the error message when `value` fails this check.
    #[must_use]
    pub fn check(&self, value: &FieldValue) -> Option<String> {
        (self.check)(value)
    }
}

/// Runs every validator and collects the messages of the failing ones,
/// in validator order.
#[must_use]
pub fn run_validators(validators: &[Validator], value: &FieldValue) -> Vec<String> {
    validators
        .iter()
        .filter_map(|validator| validator.check(value))
        .collect()
}

/// Rejects empty values.
#[must_use]
pub fn required() -> Validator {
    Validator::new("required", |value| {
        value.is_empty().then(|| "This field is required".to_string())
    })
}

/// Accepts `local@domain.tld` shaped text.
#[must_use]
pub fn email() -> Validator {
    Validator::new("email", |value| {
        if value.is_empty() || looks_like_email(&value.as_text()) {
            None
        } else {
            Some("Invalid email address".to_string())
        }
    })
}

fn looks_like_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !text.chars().any(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Requires at least `min` characters.
#[must_use]
pub fn min_length(min: usize) -> Validator {
    Validator::new("min_length", move |value| {
        let len = value.as_text().chars().count();
        (!value.is_empty() && len < min).then(|| format!("Must be at least {min} characters"))
    })
}

/// Allows at most `max` characters.
#[must_use]
pub fn max_length(max: usize) -> Validator {
    Validator::new("max_length", move |value| {
        let len = value.as_text().chars().count();
        (len > max).then(|| format!("Must be at most {max} characters"))
    })
}

/// Requires a number, or text made only of digits.
#[must_use]
pub fn numeric() -> Validator {
    Validator::new("numeric", |value| match value {
        FieldValue::Empty | FieldValue::Number(_) => None,
        FieldValue::Text(text) if text.is_empty() || text.chars().all(|c| c.is_ascii_digit()) => None,
        _ => Some("Must contain only digits".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let validator = required();
        assert_eq!(
            validator.check(&FieldValue::Empty).as_deref(),
            Some("This field is required")
        );
        assert!(validator.check(&FieldValue::from("")).is_some());
        assert!(validator.check(&FieldValue::from("a")).is_none());
        assert!(validator.check(&FieldValue::from(false)).is_none());
    }

    #[test]
    fn test_email() {
        let validator = email();
        assert!(validator.check(&FieldValue::from("dev@example.com")).is_none());
        assert!(validator.check(&FieldValue::Empty).is_none());
        for bad in ["devexample.com", "@example.com", "dev@example", "dev@.com", "d ev@x.io", "a@b@c.io"] {
            assert!(validator.check(&FieldValue::from(bad)).is_some(), "{bad} should fail");
        }
    }

    #[test]
    fn test_length_bounds_count_chars() {
        assert!(min_length(3).check(&FieldValue::from("ab")).is_some());
        assert!(min_length(3).check(&FieldValue::from("abc")).is_none());
        assert!(min_length(3).check(&FieldValue::Empty).is_none());
        assert!(max_length(2).check(&FieldValue::from("çã")).is_none());
        assert!(max_length(2).check(&FieldValue::from("çãé")).is_some());
    }

    #[test]
    fn test_numeric() {
        assert!(numeric().check(&FieldValue::from("01310100")).is_none());
        assert!(numeric().check(&FieldValue::from(12)).is_none());
        assert!(numeric().check(&FieldValue::from("12a")).is_some());
        assert!(numeric().check(&FieldValue::from(true)).is_some());
    }

    #[test]
    fn test_run_validators_keeps_order() {
        let validators = [min_length(5), numeric()];
        let errors = run_validators(&validators, &FieldValue::from("ab"));
        assert_eq!(
            errors,
            vec![
                "Must be at least 5 characters".to_string(),
                "Must contain only digits".to_string()
            ]
        );
        assert!(run_validators(&validators, &FieldValue::from("12345")).is_empty());
    }
}
