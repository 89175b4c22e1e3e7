//! Floating panel shown below a field.

use leptos::prelude::*;

use crate::ui::utils::{class_list, merge_class};

/// Panel that appears under its anchor while `visible` is true.
#[component]
pub fn Dropdown(
    /// Whether the panel is open.
    #[prop(into)]
    visible: Signal<bool>,
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: String,
    /// Panel content.
    children: Children,
) -> impl IntoView {
    let classes = move || {
        merge_class(
            &merge_class("dropdown", &class),
            &class_list(&[("visible", visible.get())]),
        )
    };

    view! {
        <div
            class=classes
            role="listbox"
            aria-hidden=move || (!visible.get()).to_string()
        >
            {children()}
        </div>
    }
}
