//! Surface (box) component whose background follows its nesting depth.

use leptos::context::Provider;
use leptos::prelude::*;

use crate::ui::utils::{class_list, merge_class};

/// How deep a surface sits inside other surfaces.
///
/// Each level maps to a step of the monochromatic background scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Depth {
    /// Flat, no background shade.
    Zero,
    /// Outermost surface (default).
    #[default]
    One,
    /// Surface inside a depth-one surface.
    Two,
    /// Deepest shade; further nesting stays here.
    Three,
}

impl Depth {
    /// Depth of a surface nested directly inside this one.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Two,
            Self::Two | Self::Three => Self::Three,
        }
    }

    /// Resolves the depth of a surface from its own prop and its parent.
    #[must_use]
    pub fn resolve(explicit: Option<Self>, parent: Option<Self>) -> Self {
        explicit.unwrap_or_else(|| parent.map_or(Self::One, Self::next))
    }

    /// Numeric level, 0 to 3.
    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Depth shared with every surface below the current one.
#[derive(Debug, Clone, Copy)]
struct DepthContext(Memo<Depth>);

/// Returns the depth of the closest enclosing [`Surface`], if any.
pub fn use_depth() -> Option<Memo<Depth>> {
    use_context::<DepthContext>().map(|ctx| ctx.0)
}

/// A box whose background shade follows how deeply it is nested.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Surface>
///         <h1>"Depth one"</h1>
///         <Surface>
///             <h2>"Depth two"</h2>
///         </Surface>
///     </Surface>
/// }
/// ```
#[component]
pub fn Surface(
    /// Overrides the depth this surface would get from its context.
    #[prop(into, optional)]
    depth: MaybeProp<Depth>,
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: String,
    /// Surface content.
    children: Children,
) -> impl IntoView {
    let parent = use_depth();
    let depth = Memo::new(move |_| Depth::resolve(depth.get(), parent.map(|p| p.get())));

    let classes = move || {
        let current = depth.get();
        merge_class(
            &merge_class("box", &class),
            &class_list(&[
                ("gray-1", current == Depth::One),
                ("gray-2", current == Depth::Two),
                ("gray-3", current == Depth::Three),
            ]),
        )
    };

    view! {
        <Provider value=DepthContext(depth)>
            <div class=classes data-depth=move || depth.get().level().to_string()>
                {children()}
            </div>
        </Provider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nesting_saturates_at_three() {
        let mut depth = Depth::resolve(None, None);
        let mut seen = vec![depth];
        for _ in 0..4 {
            depth = Depth::resolve(None, Some(depth));
            seen.push(depth);
        }

        assert_eq!(
            seen,
            vec![Depth::One, Depth::Two, Depth::Three, Depth::Three, Depth::Three]
        );
    }

    #[test]
    fn test_explicit_depth_wins() {
        assert_eq!(Depth::resolve(Some(Depth::Zero), Some(Depth::Two)), Depth::Zero);
        assert_eq!(Depth::resolve(Some(Depth::Three), None), Depth::Three);
    }

    #[test]
    fn test_zero_depth_parent_gives_one() {
        assert_eq!(Depth::resolve(None, Some(Depth::Zero)), Depth::One);
    }
}
