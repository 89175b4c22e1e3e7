//! Multi-line text field.

use leptos::ev::FocusEvent;
use leptos::prelude::*;

use super::input::TextBinding;
use super::mask::InputMask;
use super::state::{FieldOptions, setup_field};
use super::validators::Validator;
use super::value::FieldValue;
use super::wrapper::{FieldInternalWrapper, InputContainer};
use crate::ui::utils::{Accent, class_list, merge_class};

/// Directions in which the user may drag-resize a [`TextArea`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResizeDirection {
    /// Both axes (default).
    #[default]
    Both,
    /// Width only.
    Horizontal,
    /// Height only.
    Vertical,
    /// Fixed size.
    None,
}

impl ResizeDirection {
    /// Effective direction given the `resizable` flag.
    #[must_use]
    pub fn resolve(resizable: bool, requested: Option<Self>) -> Self {
        if resizable {
            requested.unwrap_or_default()
        } else {
            Self::None
        }
    }

    /// CSS `resize` value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::None => "none",
        }
    }
}

/// Multi-line text input.
///
/// Every keystroke goes through the optional mask before it is stored and
/// reported through `on_change`. Leaving the field validates it.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <TextArea
///         name="notes"
///         label="Delivery notes"
///         resizing_direction=ResizeDirection::Vertical
///         on_change=Callback::new(|text: String| log(text))
///     />
/// }
/// ```
#[component]
pub fn TextArea(
    /// Name reported to the form.
    #[prop(into, optional)]
    name: Option<String>,
    /// Initial value.
    #[prop(into, optional)]
    value: FieldValue,
    /// Checks run on blur.
    #[prop(optional)]
    validators: Vec<Validator>,
    /// Whether the text area is disabled.
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
    /// Whether the user may resize the text area.
    #[prop(default = true)]
    resizable: bool,
    /// Allowed resize direction; ignored when not resizable.
    #[prop(optional)]
    resizing_direction: Option<ResizeDirection>,
    /// Mask applied to every keystroke.
    #[prop(into, optional)]
    mask: Option<InputMask>,
    /// Placeholder text.
    #[prop(into, optional)]
    placeholder: String,
    /// Number of visible rows.
    #[prop(default = 3)]
    rows: u32,
    /// Called with the new value after each input.
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Called when the text area gains focus.
    #[prop(optional)]
    on_focus: Option<Callback<FocusEvent>>,
    /// Called when the text area loses focus, before validation.
    #[prop(optional)]
    on_blur: Option<Callback<FocusEvent>>,
    /// Additional CSS classes for the textarea element.
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

    let direction = ResizeDirection::resolve(resizable, resizing_direction);
    let initial_text = field.value_untracked().to_string();

    let classes = move || merge_class(&class, &class_list(&[("no-label", label.get().is_none())]));

    view! {
        <FieldInternalWrapper field=field helper_text=helper_text>
            <InputContainer
                field=field
                label=label
                color=color
                class="textarea-container"
                style=format!("--resize-direction: {}", direction.as_css())
            >
                <textarea
                    id=field.id()
                    name=field.name().unwrap_or_default()
                    class=classes
                    placeholder=placeholder
                    rows=rows.to_string()
                    disabled=move || field.is_disabled()
                    aria-invalid=move || field.has_errors().to_string()
                    prop:value=move || field.value().to_string()
                    on:input=move |ev| {
                        binding.input(&event_target_value(&ev));
                    }
                    on:focus=move |ev| focus.run(ev)
                    on:blur=move |ev| blur.run(ev)
                >
                    {initial_text}
                </textarea>
            </InputContainer>
        </FieldInternalWrapper>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_direction_defaults_to_both() {
        assert_eq!(ResizeDirection::resolve(true, None), ResizeDirection::Both);
        assert_eq!(
            ResizeDirection::resolve(true, Some(ResizeDirection::Vertical)).as_css(),
            "vertical"
        );
    }

    #[test]
    fn test_not_resizable_overrides_direction() {
        assert_eq!(
            ResizeDirection::resolve(false, Some(ResizeDirection::Horizontal)),
            ResizeDirection::None
        );
    }
}
