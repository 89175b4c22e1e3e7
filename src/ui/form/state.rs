//! Per-field reactive state: value, focus, disabled flag and errors.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;
use uuid::Uuid;

use super::context::FormContext;
use super::validators::{Validator, run_validators};
use super::value::FieldValue;

static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

/// Static configuration of a field.
#[derive(Debug, Clone, Default)]
pub struct FieldOptions {
    /// Name under which the form reports the value.
    pub name: Option<String>,
    /// Value the field starts with and returns to on reset.
    pub initial: FieldValue,
    /// Checks run on blur and on demand.
    pub validators: Vec<Validator>,
}

impl FieldOptions {
    /// Options for a field called `name`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the initial value.
    #[must_use]
    pub fn with_value(mut self, initial: impl Into<FieldValue>) -> Self {
        self.initial = initial.into();
        self
    }

    /// Sets the validators.
    #[must_use]
    pub fn with_validators(mut self, validators: Vec<Validator>) -> Self {
        self.validators = validators;
        self
    }
}

/// Reactive state owned by one mounted field.
///
/// The handle is `Copy`; every copy refers to the same cells, which live
/// as long as the reactive owner that created them.
#[derive(Clone, Copy)]
pub struct FieldState {
    key: u64,
    id: StoredValue<String>,
    name: StoredValue<Option<String>>,
    initial: StoredValue<FieldValue>,
    validators: StoredValue<Vec<Validator>>,
    value: RwSignal<FieldValue>,
    focused: RwSignal<bool>,
    disabled: Signal<bool>,
    errors: RwSignal<Vec<String>>,
}

impl fmt::Debug for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldState")
            .field("key", &self.key)
            .field("id", &self.id.try_get_value())
            .finish_non_exhaustive()
    }
}

impl PartialEq for FieldState {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FieldState {}

/// Maps a field name to characters valid in an id and a `for=` reference.
fn dom_id_fragment(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

impl FieldState {
    /// Creates the cells of a field.
    ///
    /// `disabled` is read reactively, so it may follow a prop or the form.
    pub fn new(options: FieldOptions, disabled: Signal<bool>) -> Self {
        let FieldOptions {
            name,
            initial,
            validators,
        } = options;

        let id = match &name {
            Some(name) => format!("field-{}", dom_id_fragment(name)),
            None => format!("field-{}", Uuid::new_v4().simple()),
        };

        Self {
            key: NEXT_KEY.fetch_add(1, Ordering::Relaxed),
            id: StoredValue::new(id),
            name: StoredValue::new(name),
            value: RwSignal::new(initial.clone()),
            initial: StoredValue::new(initial),
            validators: StoredValue::new(validators),
            focused: RwSignal::new(false),
            disabled,
            errors: RwSignal::new(Vec::new()),
        }
    }

    /// DOM id of the field's control.
    pub fn id(&self) -> String {
        self.id.get_value()
    }

    /// Name reported to the form, if any.
    pub fn name(&self) -> Option<String> {
        self.name.get_value()
    }

    /// Current value (tracked).
    pub fn value(&self) -> FieldValue {
        self.value.get()
    }

    /// Current value without subscribing.
    pub fn value_untracked(&self) -> FieldValue {
        self.value.get_untracked()
    }

    /// Replaces the value.
    pub fn set_value(&self, value: impl Into<FieldValue>) {
        self.value.set(value.into());
    }

    /// Whether the field currently has focus (tracked).
    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    /// Whether the field currently has focus, without subscribing.
    pub fn is_focused_untracked(&self) -> bool {
        self.focused.get_untracked()
    }

    /// Sets the focus flag.
    pub fn set_focused(&self, focused: bool) {
        self.focused.set(focused);
    }

    /// Whether the field is disabled (tracked).
    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    /// Whether the field is disabled, without subscribing.
    pub fn is_disabled_untracked(&self) -> bool {
        self.disabled.get_untracked()
    }

    /// Messages from the last validation (tracked).
    pub fn errors(&self) -> Vec<String> {
        self.errors.get()
    }

    /// Whether the last validation failed (tracked).
    pub fn has_errors(&self) -> bool {
        self.errors.with(|errors| !errors.is_empty())
    }

    /// Whether any validator is attached.
    pub fn has_validators(&self) -> bool {
        self.validators.with_value(|validators| !validators.is_empty())
    }

    /// Whether the value is non-empty (tracked).
    pub fn has_content(&self) -> bool {
        self.value.with(|value| !value.is_empty())
    }

    /// Runs the validators on `value`, stores the messages and returns
    /// whether the value passed.
    pub fn validate(&self, value: &FieldValue) -> bool {
        let errors = self
            .validators
            .with_value(|validators| run_validators(validators, value));
        let valid = errors.is_empty();

        if !valid {
            tracing::debug!(
                name: "form.field.invalid",
                field = %self.id.get_value(),
                errors = errors.len(),
                "Field failed validation"
            );
        }

        self.errors.set(errors);
        valid
    }

    /// Validates the stored value.
    pub fn validate_current(&self) -> bool {
        let value = self.value.get_untracked();
        self.validate(&value)
    }

    /// Restores the initial value and clears errors and focus.
    pub fn reset(&self) {
        self.value.set(self.initial.get_value());
        self.errors.set(Vec::new());
        self.focused.set(false);
    }
}

/// Creates the state of a field component and ties it to the enclosing
/// [`Form`](super::Form), if there is one.
///
/// The field is disabled when its own flag or the form's flag is set. It
/// is removed from the form when the component is cleaned up.
pub fn setup_field(options: FieldOptions, disabled: Signal<bool>) -> FieldState {
    let form = use_context::<FormContext>();

    let disabled = match form {
        Some(form) => Signal::derive(move || disabled.get() || form.is_disabled()),
        None => disabled,
    };

    let field = FieldState::new(options, disabled);

    if let Some(form) = form {
        form.register(field);
        on_cleanup(move || form.unregister(field));
    }

    field
}
