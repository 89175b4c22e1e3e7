//! Small helpers shared by every component: class merging, callback
//! merging and the accent color roles.

use leptos::prelude::*;

/// Color role a component is painted with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Accent {
    /// Main brand color (default).
    #[default]
    Primary,
    /// Secondary color.
    Secondary,
    /// Tertiary color.
    Tertiary,
}

impl Accent {
    /// CSS class carrying the color variables for this accent.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
        }
    }
}

/// Joins a component's base classes with the classes passed by the caller.
///
/// ```rust
/// use quarry_ui::ui::utils::merge_class;
///
/// assert_eq!(merge_class("box", "  wide "), "box wide");
/// assert_eq!(merge_class("box", ""), "box");
/// ```
#[must_use]
pub fn merge_class(base: &str, extra: &str) -> String {
    [base.trim(), extra.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds a class string out of `(class, enabled)` pairs, keeping order.
#[must_use]
pub fn class_list(entries: &[(&str, bool)]) -> String {
    entries
        .iter()
        .filter(|(class, enabled)| *enabled && !class.is_empty())
        .map(|(class, _)| *class)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combines two optional callbacks into one that runs `first` then `second`.
pub fn merge_callbacks<T>(first: Option<Callback<T>>, second: Option<Callback<T>>) -> Option<Callback<T>>
where
    T: Clone + 'static,
{
    match (first, second) {
        (Some(first), Some(second)) => Some(Callback::new(move |arg: T| {
            first.run(arg.clone());
            second.run(arg);
        })),
        (first, None) => first,
        (None, second) => second,
    }
}
