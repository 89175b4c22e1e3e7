//! Layout primitives: [`Stack`], [`Container`] and [`Divisor`].

use leptos::prelude::*;

use crate::ui::utils::merge_class;

/// Main axis of a [`Stack`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StackDirection {
    /// Children side by side.
    Horizontal,
    /// Children top to bottom (default).
    #[default]
    Vertical,
}

/// Distribution of children along an axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    /// Pack at the start (default).
    #[default]
    Start,
    /// Center.
    Center,
    /// Pack at the end.
    End,
    /// First and last child at the edges.
    SpaceBetween,
    /// Equal space around each child.
    SpaceAround,
}

impl Align {
    fn justify(self) -> &'static str {
        match self {
            Self::Start => "justify-start",
            Self::Center => "justify-center",
            Self::End => "justify-end",
            Self::SpaceBetween => "justify-between",
            Self::SpaceAround => "justify-around",
        }
    }

    fn items(self) -> &'static str {
        match self {
            Self::Start | Self::SpaceBetween | Self::SpaceAround => "items-start",
            Self::Center => "items-center",
            Self::End => "items-end",
        }
    }
}

/// Flex container along one axis.
#[component]
pub fn Stack(
    /// Main axis.
    #[prop(optional)]
    direction: StackDirection,
    /// Distribution along the main axis.
    #[prop(optional)]
    align: Align,
    /// Gap between children, in spacing units.
    #[prop(default = 2)]
    gap: u8,
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: String,
    /// Stacked content.
    children: Children,
) -> impl IntoView {
    let direction_class = match direction {
        StackDirection::Horizontal => "flex-row",
        StackDirection::Vertical => "flex-col",
    };

    let classes = format!(
        "stack flex {} {} gap-{}",
        direction_class,
        align.justify(),
        gap
    );

    view! {
        <div class=merge_class(&classes, &class)>
            {children()}
        </div>
    }
}

/// Maximum width of a [`Container`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaxWidth {
    /// 640px.
    Sm,
    /// 768px.
    Md,
    /// 1024px (default).
    #[default]
    Lg,
    /// 1280px.
    Xl,
    /// No limit.
    Full,
}

impl MaxWidth {
    fn class(self) -> &'static str {
        match self {
            Self::Sm => "max-w-screen-sm",
            Self::Md => "max-w-screen-md",
            Self::Lg => "max-w-screen-lg",
            Self::Xl => "max-w-screen-xl",
            Self::Full => "max-w-full",
        }
    }
}

/// Centered page-width container.
#[component]
pub fn Container(
    /// Maximum width.
    #[prop(optional)]
    max_width: MaxWidth,
    /// Horizontal placement of the content.
    #[prop(optional)]
    horizontal_align: Align,
    /// Vertical placement of the content.
    #[prop(optional)]
    vertical_align: Align,
    /// Inline style.
    #[prop(into, optional)]
    style: String,
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: String,
    /// Container content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "container mx-auto w-full flex flex-col px-4 {} {} {}",
        max_width.class(),
        horizontal_align.items(),
        vertical_align.justify()
    );

    view! {
        <div class=merge_class(&classes, &class) style=style>
            {children()}
        </div>
    }
}

/// Divisor orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Horizontal line (default).
    #[default]
    Horizontal,
    /// Vertical line.
    Vertical,
}

/// Visual separator line.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <p>"Above"</p>
///     <Divisor />
///     <p>"Below"</p>
/// }
/// ```
#[component]
pub fn Divisor(
    /// Line orientation.
    #[prop(optional)]
    orientation: Orientation,
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let orientation_classes = match orientation {
        Orientation::Horizontal => "h-[1px] w-full",
        Orientation::Vertical => "h-full w-[1px]",
    };

    let classes = format!("divisor shrink-0 bg-[var(--divisor)] {orientation_classes}");

    view! {
        <div role="separator" class=merge_class(&classes, &class) />
    }
}
