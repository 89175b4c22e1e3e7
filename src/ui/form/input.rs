//! Single-line text field, and the input/focus/blur wiring it shares with
//! [`TextArea`](super::TextArea).

use leptos::ev::FocusEvent;
use leptos::prelude::*;

use super::mask::InputMask;
use super::state::{FieldOptions, FieldState, setup_field};
use super::validators::Validator;
use super::value::FieldValue;
use super::wrapper::{FieldInternalWrapper, InputContainer};
use crate::ui::utils::{Accent, merge_callbacks};

/// Event wiring of a text control bound to a [`FieldState`].
#[derive(Clone, Copy)]
pub(crate) struct TextBinding {
    field: FieldState,
    mask: StoredValue<Option<InputMask>>,
    on_change: Option<Callback<String>>,
}

impl TextBinding {
    pub(crate) fn new(
        field: FieldState,
        mask: Option<InputMask>,
        on_change: Option<Callback<String>>,
    ) -> Self {
        Self {
            field,
            mask: StoredValue::new(mask),
            on_change,
        }
    }

    /// Applies the mask to what the user typed, stores it and reports the
    /// new value.
    pub(crate) fn input(self, raw: &str) -> String {
        let value = self
            .mask
            .with_value(|mask| mask.as_ref().map(|mask| mask.apply(raw)))
            .unwrap_or_else(|| raw.to_string());

        self.field.set_value(value.clone());
        if let Some(on_change) = self.on_change {
            on_change.run(value.clone());
        }
        value
    }

    pub(crate) fn focus(self) {
        self.field.set_focused(true);
    }

    /// Validates the current value, then drops focus.
    pub(crate) fn blur(self) {
        self.field.validate_current();
        self.field.set_focused(false);
    }

    /// Focus handler running the caller's callback first.
    pub(crate) fn focus_handler(self, user: Option<Callback<FocusEvent>>) -> Callback<FocusEvent> {
        let own = Callback::new(move |_: FocusEvent| self.focus());
        merge_callbacks(user, Some(own)).unwrap_or(own)
    }

    /// Blur handler running the caller's callback first.
    pub(crate) fn blur_handler(self, user: Option<Callback<FocusEvent>>) -> Callback<FocusEvent> {
        let own = Callback::new(move |_: FocusEvent| self.blur());
        merge_callbacks(user, Some(own)).unwrap_or(own)
    }
}

/// Single-line text input.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <TextField
///         name="zip"
///         label="ZIP code"
///         mask=InputMask::pattern("99999-999")
///         validators=vec![required()]
///     />
/// }
/// ```
#[component]
pub fn TextField(
    /// Name reported to the form.
    #[prop(into, optional)]
    name: Option<String>,
    /// Initial value.
    #[prop(into, optional)]
    value: FieldValue,
    /// Checks run on blur.
    #[prop(optional)]
    validators: Vec<Validator>,
    /// Whether the input is disabled.
    #[prop(into, optional)]
    disabled: Signal<bool>,
    /// Floating label.
    #[prop(into, optional)]
    label: MaybeProp<String>,
    /// Text shown under the field while it has no errors.
    #[prop(into, optional)]
    helper_text: MaybeProp<String>,
    /// Accent color.
    #[prop(optional)]
    color: Accent,
    /// Input type (text, email, password, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(into, optional)]
    placeholder: String,
    /// Autocomplete attribute.
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Mask applied to every keystroke.
    #[prop(into, optional)]
    mask: Option<InputMask>,
    /// Called with the new value after each input.
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Called when the input gains focus.
    #[prop(optional)]
    on_focus: Option<Callback<FocusEvent>>,
    /// Called when the input loses focus, before validation.
    #[prop(optional)]
    on_blur: Option<Callback<FocusEvent>>,
    /// Additional CSS classes for the input element.
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let field = setup_field(
        FieldOptions {
            name,
            initial: value,
            validators,
        },
        disabled,
    );
    let binding = TextBinding::new(field, mask, on_change);
    let focus = binding.focus_handler(on_focus);
    let blur = binding.blur_handler(on_blur);
    let initial_text = field.value_untracked().to_string();

    view! {
        <FieldInternalWrapper field=field helper_text=helper_text>
            <InputContainer field=field label=label color=color class="text-field-container">
                <input
                    type=input_type
                    id=field.id()
                    name=field.name().unwrap_or_default()
                    class=class
                    placeholder=placeholder
                    autocomplete=autocomplete
                    value=initial_text
                    disabled=move || field.is_disabled()
                    aria-invalid=move || field.has_errors().to_string()
                    prop:value=move || field.value().to_string()
                    on:input=move |ev| {
                        binding.input(&event_target_value(&ev));
                    }
                    on:focus=move |ev| focus.run(ev)
                    on:blur=move |ev| blur.run(ev)
                />
            </InputContainer>
        </FieldInternalWrapper>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::form::validators::required;
    use std::sync::{Arc, Mutex};

    fn binding(mask: Option<InputMask>, on_change: Option<Callback<String>>) -> (FieldState, TextBinding) {
        let field = FieldState::new(
            FieldOptions::named("zip").with_validators(vec![required()]),
            Signal::derive(|| false),
        );
        (field, TextBinding::new(field, mask, on_change))
    }

    #[test]
    fn test_input_applies_mask_and_reports() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let on_change = {
            let seen = Arc::clone(&seen);
            Callback::new(move |value: String| seen.lock().unwrap().push(value))
        };
        let (field, binding) = binding(Some(InputMask::pattern("99999-999")), Some(on_change));

        assert_eq!(binding.input("01310100"), "01310-100");
        assert_eq!(field.value_untracked(), FieldValue::from("01310-100"));
        assert_eq!(*seen.lock().unwrap(), vec!["01310-100".to_string()]);
    }

    #[test]
    fn test_input_without_mask_is_verbatim() {
        let (field, binding) = binding(None, None);
        binding.input("anything at all");
        assert_eq!(field.value_untracked(), FieldValue::from("anything at all"));
    }

    #[test]
    fn test_blur_validates_then_unfocuses() {
        let (field, binding) = binding(None, None);

        binding.focus();
        assert!(field.is_focused_untracked());
        assert!(!field.has_errors());

        binding.blur();
        assert!(!field.is_focused_untracked());
        assert_eq!(field.errors(), vec!["This field is required".to_string()]);

        binding.input("12345");
        binding.blur();
        assert!(!field.has_errors());
    }
}
