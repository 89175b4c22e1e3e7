//! Button components with variants, sizes and accent colors.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::ui::utils::{Accent, merge_class};

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid accent background.
    #[default]
    Filled,
    /// Transparent background with an accent border.
    Outlined,
    /// No background or border, only accent text.
    Empty,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Filled => "btn-filled bg-[var(--bg)] text-[var(--fg)] hover:bg-[var(--hover)]",
            Self::Outlined => "btn-outlined border border-[var(--bg)] text-[var(--bg)] hover:bg-[var(--hover-10)]",
            Self::Empty => "btn-empty bg-transparent text-[var(--bg)] hover:bg-[var(--hover-10)]",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button.
    Small,
    /// Medium button (default).
    #[default]
    Medium,
    /// Large button.
    Large,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Small => "h-8 px-3 text-xs",
            Self::Medium => "h-10 px-4 text-sm",
            Self::Large => "h-12 px-6 text-base",
        }
    }
}

const BASE_CLASSES: &str = "btn inline-flex items-center justify-center rounded-lg font-medium \
                            transition-colors focus-visible:outline-none \
                            disabled:pointer-events-none disabled:opacity-50";

/// Clickable button.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button color=Accent::Secondary on_click=Callback::new(|_| save())>
///         "Save"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(optional)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(optional)]
    size: ButtonSize,
    /// Accent color.
    #[prop(optional)]
    color: Accent,
    /// Whether the button is disabled.
    #[prop(into, optional)]
    disabled: Signal<bool>,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: String,
    /// Click handler.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "{} {} {} {}",
        BASE_CLASSES,
        variant.classes(),
        size.classes(),
        merge_class(color.class(), &class)
    );

    view! {
        <button
            type=button_type
            class=classes
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

/// Button rendered as plain accent text.
///
/// `active` keeps it looking hovered, e.g. for the selected entry of a menu.
#[component]
pub fn TextButton(
    /// Render as permanently hovered.
    #[prop(into, optional)]
    active: Signal<bool>,
    /// Accent color.
    #[prop(optional)]
    color: Accent,
    /// Whether the button is disabled.
    #[prop(into, optional)]
    disabled: Signal<bool>,
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: String,
    /// Click handler.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let classes = move || {
        let state = if disabled.get() {
            ""
        } else if active.get() {
            "rounded-md outline-none bg-[var(--bg)] text-[var(--fg)]"
        } else {
            "rounded-md outline-none bg-transparent text-[var(--bg)] hover:bg-[var(--hover-10)]"
        };
        merge_class(
            &merge_class("text-btn", color.class()),
            &merge_class(state, &class),
        )
    };

    view! {
        <button
            type="button"
            class=classes
            disabled=move || disabled.get()
            aria-pressed=move || active.get().to_string()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
