//! Vertical list with a size scale.

use leptos::prelude::*;

use crate::ui::utils::{class_list, merge_class};

/// Text and spacing scale of a [`List`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListSize {
    /// Small text, tight gaps.
    Small,
    /// Medium text (default).
    #[default]
    Medium,
    /// Large text, wide gaps.
    Large,
}

impl ListSize {
    /// Value of the `data-size` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

const LIST_CLASSES: &str = "list-none group flex flex-col h-fit w-full p-0 m-0 \
                            data-[size=small]:text-sm data-[size=medium]:text-base data-[size=large]:text-lg \
                            data-[size=small]:gap-2 data-[size=medium]:gap-3 data-[size=large]:gap-4";

/// Unordered list; children render in the order given.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <List size=ListSize::Small>
///         <ListItem>"First"</ListItem>
///         <ListItem active=true>"Second"</ListItem>
///     </List>
/// }
/// ```
#[component]
pub fn List(
    /// Size scale.
    #[prop(optional)]
    size: ListSize,
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: String,
    /// List entries.
    children: Children,
) -> impl IntoView {
    view! {
        <ul data-size=size.as_str() class=merge_class(LIST_CLASSES, &class)>
            {children()}
        </ul>
    }
}

/// Entry of a [`List`].
#[component]
pub fn ListItem(
    /// Highlights the entry.
    #[prop(into, optional)]
    active: Signal<bool>,
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: String,
    /// Entry content.
    children: Children,
) -> impl IntoView {
    let classes = move || {
        merge_class(
            &merge_class("list-item flex items-center", &class),
            &class_list(&[("active", active.get())]),
        )
    };

    view! {
        <li class=classes>
            {children()}
        </li>
    }
}
