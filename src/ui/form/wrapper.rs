//! Shared chrome of every field: the outer wrapper with the helper line
//! and the labelled input container.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::state::FieldState;
use crate::ui::utils::{Accent, class_list, merge_class};

/// Outer wrapper of a field.
///
/// Below the field it shows the error messages when there are any, or
/// the helper text otherwise. The helper line is only rendered for fields
/// with validators or helper text.
#[component]
pub fn FieldInternalWrapper(
    /// State of the wrapped field.
    field: FieldState,
    /// Text shown under the field while it has no errors.
    #[prop(into, optional)]
    helper_text: MaybeProp<String>,
    /// Inline style.
    #[prop(into, optional)]
    style: String,
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: String,
    /// The field.
    children: Children,
) -> impl IntoView {
    let render_helper = field.has_validators() || helper_text.get_untracked().is_some();

    let classes = move || {
        merge_class(
            &merge_class("field-wrapper flex flex-col gap-1", &class),
            &class_list(&[("disabled", field.is_disabled()), ("invalid", field.has_errors())]),
        )
    };

    let helper_line = move || {
        let errors = field.errors();
        if errors.is_empty() {
            helper_text.get().map(|text| view! { <span class="helper-text">{text}</span> }.into_any())
        } else {
            Some(
                view! {
                    <ul class="field-errors">
                        {errors.into_iter().map(|error| view! { <li class="field-error">{error}</li> }).collect_view()}
                    </ul>
                }
                .into_any(),
            )
        }
    };

    view! {
        <div class=classes style=style data-field=field.name().unwrap_or_default()>
            {children()}
            {render_helper.then(|| view! {
                <div class="helper-line" id=format!("{}-helper", field.id()) aria-live="polite">
                    {helper_line}
                </div>
            })}
        </div>
    }
}

/// Labelled, bordered box holding a field's control.
#[component]
pub fn InputContainer(
    /// State of the field inside.
    field: FieldState,
    /// Floating label bound to the field's control.
    #[prop(into, optional)]
    label: MaybeProp<String>,
    /// Accent color of the focus ring and label.
    #[prop(optional)]
    color: Accent,
    /// Trailing icon.
    #[prop(into, optional)]
    icon: Option<ViewFn>,
    /// Inline style.
    #[prop(into, optional)]
    style: String,
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: String,
    /// Click handler for the whole container.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// The control.
    children: Children,
) -> impl IntoView {
    let classes = move || {
        merge_class(
            &merge_class("input-container relative flex items-center", &class),
            &merge_class(
                color.class(),
                &class_list(&[
                    ("focused", field.is_focused()),
                    ("disabled", field.is_disabled()),
                    ("has-content", field.has_content()),
                    ("no-label", label.get().is_none()),
                ]),
            ),
        )
    };

    view! {
        <div
            class=classes
            style=style
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {move || label.get().map(|text| view! { <label for=field.id() class="field-label">{text}</label> })}
            <div class="input-content flex-1">{children()}</div>
            {icon.map(|icon| view! { <span class="input-icon">{icon.run()}</span> })}
        </div>
    }
}
