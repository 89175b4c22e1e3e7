//! Navigation steps for multi-page flows.

use leptos::context::Provider;
use leptos::prelude::*;

use super::icons::CheckIcon;
use crate::ui::utils::class_list;

/// Where a step sits relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Already completed.
    Done,
    /// The step being worked on.
    Current,
    /// Not reached yet.
    Upcoming,
}

impl StepStatus {
    /// Status of the step at `index` when `current` is active.
    #[must_use]
    pub fn of(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => Self::Done,
            std::cmp::Ordering::Equal => Self::Current,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }

    /// CSS class for this status.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Current => "current",
            Self::Upcoming => "upcoming",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct StepsContext {
    current: Signal<usize>,
    next_index: StoredValue<usize>,
}

impl StepsContext {
    /// Hands out indexes in render order.
    fn claim_index(self) -> usize {
        let index = self.next_index.get_value();
        self.next_index.set_value(index + 1);
        index
    }
}

/// Ordered list of [`Step`]s with the `current` one highlighted.
///
/// Steps are indexed from zero in the order they are rendered.
///
/// # Example
///
/// ```rust,ignore
/// let (step, set_step) = signal(0);
///
/// view! {
///     <Steps current=step identification="checkout">
///         <Step description="where to ship">"Address"</Step>
///         <Step description="card details">"Payment"</Step>
///         <Step>"Done"</Step>
///     </Steps>
/// }
/// ```
#[component]
pub fn Steps(
    /// Index of the active step.
    #[prop(into)]
    current: Signal<usize>,
    /// Identifies the flow; used as id and accessible label.
    #[prop(into)]
    identification: String,
    /// The steps.
    children: Children,
) -> impl IntoView {
    let ctx = StepsContext {
        current,
        next_index: StoredValue::new(0),
    };

    view! {
        <Provider value=ctx>
            <ol class="steps flex items-start w-full" id=identification.clone() aria-label=identification>
                {children()}
            </ol>
        </Provider>
    }
}

/// One entry of [`Steps`].
#[component]
pub fn Step(
    /// Secondary line shown below the title.
    #[prop(into, optional)]
    description: MaybeProp<String>,
    /// Step title.
    children: Children,
) -> impl IntoView {
    let (index, current) = match use_context::<StepsContext>() {
        Some(ctx) => (ctx.claim_index(), Some(ctx.current)),
        None => {
            tracing::warn!(name: "steps.orphan_step", "Step rendered outside of Steps");
            (0, None)
        }
    };

    // Without a parent there is no progress to report.
    let status = Memo::new(move |_| {
        current.map_or(StepStatus::Upcoming, |current| StepStatus::of(index, current.get()))
    });

    let connector_class = move || {
        class_list(&[("step-connector", true), ("done", status.get() != StepStatus::Upcoming)])
    };

    let marker = move || match status.get() {
        StepStatus::Done => view! { <CheckIcon class="step-check" /> }.into_any(),
        _ => view! { <span>{index + 1}</span> }.into_any(),
    };

    view! {
        {(index > 0).then(|| view! { <li class=connector_class aria-hidden="true"></li> })}
        <li
            class=move || format!("step {}", status.get().class())
            aria-current=move || (status.get() == StepStatus::Current).then_some("step")
            data-index=index.to_string()
        >
            <span class="step-marker">{marker}</span>
            <div class="step-text">
                <span class="step-title">{children()}</span>
                {move || description.get().map(|text| view! { <span class="step-description">{text}</span> })}
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_relative_to_current() {
        assert_eq!(StepStatus::of(0, 1), StepStatus::Done);
        assert_eq!(StepStatus::of(1, 1), StepStatus::Current);
        assert_eq!(StepStatus::of(2, 1), StepStatus::Upcoming);
    }

    #[test]
    fn test_current_past_the_end_marks_everything_done() {
        let statuses: Vec<_> = (0..3).map(|i| StepStatus::of(i, 3)).collect();
        assert!(statuses.iter().all(|s| *s == StepStatus::Done));
    }

    #[test]
    fn test_indexes_claimed_in_order() {
        let ctx = StepsContext {
            current: Signal::derive(|| 0),
            next_index: StoredValue::new(0),
        };

        assert_eq!(ctx.claim_index(), 0);
        assert_eq!(ctx.claim_index(), 1);
        assert_eq!(ctx.claim_index(), 2);
    }
}
