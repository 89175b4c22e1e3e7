//! Modal dialog with a title, body and Ok/Cancel actions.

use leptos::ev::MouseEvent;
use leptos::portal::Portal;
use leptos::prelude::*;

use super::button::{Button, ButtonVariant};
use super::layout::Divisor;
use super::surface::{Depth, Surface};
use crate::ui::utils::{Accent, merge_class};

/// Backdrop click handler: cancels only while the dialog is shown.
fn cancel_when_visible<E: 'static>(
    visible: Signal<bool>,
    on_cancel: Option<Callback<E>>,
) -> impl Fn(E) + Copy + 'static {
    move |ev| {
        if visible.get_untracked() {
            if let Some(on_cancel) = on_cancel {
                on_cancel.run(ev);
            }
        }
    }
}

/// Modal dialog.
///
/// The dialog is portaled to the end of the document body and only
/// exists in the DOM while `visible` is true. Clicking the backdrop
/// cancels; clicks inside the dialog box stay inside it.
///
/// # Example
///
/// ```rust,ignore
/// let (open, set_open) = signal(false);
///
/// view! {
///     <Modal
///         visible=open
///         title=|| "Delete file?"
///         on_ok=Callback::new(move |_| set_open.set(false))
///         on_cancel=Callback::new(move |_| set_open.set(false))
///     >
///         <p>"This cannot be undone."</p>
///     </Modal>
/// }
/// ```
#[component]
pub fn Modal(
    /// Whether the dialog is shown.
    #[prop(into)]
    visible: Signal<bool>,
    /// Header content.
    #[prop(into)]
    title: ViewFn,
    /// Extra elements placed in the footer, before the actions.
    #[prop(into, optional)]
    extra_footer: ViewFn,
    /// Called when "Ok" is clicked.
    #[prop(optional)]
    on_ok: Option<Callback<MouseEvent>>,
    /// Called when "Cancel" or the backdrop is clicked.
    #[prop(optional)]
    on_cancel: Option<Callback<MouseEvent>>,
    /// Additional CSS classes for the dialog box.
    #[prop(into, optional)]
    class: String,
    /// Render in place instead of portaling to the body.
    #[prop(optional)]
    inline: bool,
    /// Dialog body.
    children: ChildrenFn,
) -> impl IntoView {
    let title = StoredValue::new(title);
    let extra_footer = StoredValue::new(extra_footer);
    let body = StoredValue::new(children);
    let box_class = StoredValue::new(merge_class("modal-box", &class));

    let on_backdrop_click = cancel_when_visible(visible, on_cancel);

    let content = move || {
        view! {
            <Show when=move || visible.get()>
                <div class="modal-backdrop visible" on:click=on_backdrop_click>
                    <div
                        class="modal-frame"
                        role="dialog"
                        aria-modal="true"
                        on:click=|ev: MouseEvent| ev.stop_propagation()
                    >
                        <Surface depth=Depth::One class=box_class.get_value()>
                            <div class="header">{title.with_value(ViewFn::run)}</div>

                            <Divisor />

                            <div class="body">{body.with_value(|body| body())}</div>

                            <Divisor />

                            <div class="footer">
                                {extra_footer.with_value(ViewFn::run)}

                                <div class="actions">
                                    <Button variant=ButtonVariant::Empty on_click=on_cancel.unwrap_or_else(|| Callback::new(|_| {}))>
                                        "Cancel"
                                    </Button>
                                    <Button color=Accent::Primary on_click=on_ok.unwrap_or_else(|| Callback::new(|_| {}))>
                                        "Ok"
                                    </Button>
                                </div>
                            </div>
                        </Surface>
                    </div>
                </div>
            </Show>
        }
    };

    if inline {
        content().into_any()
    } else {
        view! { <Portal>{content}</Portal> }.into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_cancels_only_while_visible() {
        let visible = RwSignal::new(false);
        let cancelled = RwSignal::new(0);
        let on_cancel = Callback::new(move |_: ()| cancelled.update(|count| *count += 1));
        let on_backdrop = cancel_when_visible(visible.into(), Some(on_cancel));

        on_backdrop(());
        assert_eq!(cancelled.get_untracked(), 0);

        visible.set(true);
        on_backdrop(());
        assert_eq!(cancelled.get_untracked(), 1);
    }

    #[test]
    fn test_backdrop_without_handler_is_inert() {
        let on_backdrop = cancel_when_visible::<()>(Signal::derive(|| true), None);
        on_backdrop(());
    }
}
