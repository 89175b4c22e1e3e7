//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements so they pick up the
//! surrounding text color.

use leptos::prelude::*;

use crate::ui::utils::merge_class;

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

/// Downward chevron, rotated by the `open` class.
#[component]
pub fn ChevronDownIcon(
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: Signal<String>,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=move || merge_class(ICON_SIZE, &class.get())
        >
            <polyline points="6 9 12 15 18 9" />
        </svg>
    }
}

/// Check mark icon.
#[component]
pub fn CheckIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=merge_class(ICON_SIZE, class)
        >
            <polyline points="20 6 9 17 4 12" />
        </svg>
    }
}
