//! Select field: pick one option among many.

use leptos::html::Div;
use leptos::prelude::*;
use web_sys::Node;

use super::state::{FieldOptions, FieldState, setup_field};
use super::validators::Validator;
use super::value::FieldValue;
use super::wrapper::{FieldInternalWrapper, InputContainer};
use crate::ui::components::{ChevronDownIcon, Dropdown};
use crate::ui::utils::{Accent, class_list, merge_class};

/// One choice of a [`Select`], given as a slot.
#[slot]
pub struct SelectOption {
    /// Value the field takes when this option is picked.
    #[prop(into)]
    value: FieldValue,
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: String,
    /// Label of the option, also shown in the closed select.
    children: ChildrenFn,
}

struct OptionEntry {
    value: FieldValue,
    class: String,
    label: ChildrenFn,
}

/// Open/close and pick behavior of a select, independent of the DOM.
#[derive(Clone, Copy)]
struct SelectController {
    field: FieldState,
    on_change: Option<Callback<FieldValue>>,
    on_focused: Option<Callback<()>>,
}

impl SelectController {
    /// Opening reports focus; closing validates the current value.
    fn set_open(self, open: bool) {
        if self.field.is_focused_untracked() == open {
            return;
        }

        self.field.set_focused(open);
        if open {
            if let Some(on_focused) = self.on_focused {
                on_focused.run(());
            }
        } else {
            self.field.validate_current();
        }
    }

    fn toggle(self) {
        if !self.field.is_disabled_untracked() {
            self.set_open(!self.field.is_focused_untracked());
        }
    }

    /// Handles a click anywhere on the page; only clicks outside the
    /// field and its dropdown close it.
    fn page_click(self, inside: bool) {
        if !inside {
            self.set_open(false);
        }
    }

    fn choose(self, value: FieldValue) {
        if let Some(on_change) = self.on_change {
            on_change.run(value.clone());
        }
        self.field.set_value(value);
        self.set_open(false);
    }
}

/// Select field.
///
/// Options are given as [`SelectOption`] slots; anything else passed to the
/// select is ignored. Clicking anywhere outside the field closes it.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Select
///         name="best_game"
///         label="Which one is better?"
///         helper_text="Pick carefully"
///         validators=vec![required()]
///     >
///         <SelectOption slot value="minecraft">"Minecraft"</SelectOption>
///         <SelectOption slot value="terraria">"Terraria"</SelectOption>
///         <SelectOption slot value="starbound">"Starbound"</SelectOption>
///     </Select>
/// }
/// ```
#[component]
pub fn Select(
    /// Name reported to the form.
    #[prop(into, optional)]
    name: Option<String>,
    /// Initially selected value.
    #[prop(into, optional)]
    value: FieldValue,
    /// Checks run when the dropdown closes.
    #[prop(optional)]
    validators: Vec<Validator>,
    /// Whether the select is disabled.
    #[prop(into, optional)]
    disabled: Signal<bool>,
    /// Floating label.
    #[prop(into, optional)]
    label: MaybeProp<String>,
    /// Text shown under the field while it has no errors.
    #[prop(into, optional)]
    helper_text: MaybeProp<String>,
    /// Accent color.
    #[prop(optional)]
    color: Accent,
    /// Called with the picked value, before it is stored.
    #[prop(optional)]
    on_change: Option<Callback<FieldValue>>,
    /// Called each time the dropdown opens.
    #[prop(optional)]
    on_focused: Option<Callback<()>>,
    /// Additional CSS classes for the container.
    #[prop(into, optional)]
    class: String,
    /// The options.
    #[prop(optional)]
    select_option: Vec<SelectOption>,
) -> impl IntoView {
    let field = setup_field(
        FieldOptions {
            name,
            initial: value,
            validators,
        },
        disabled,
    );
    let controller = SelectController {
        field,
        on_change,
        on_focused,
    };

    let options = StoredValue::new(
        select_option
            .into_iter()
            .map(|option| OptionEntry {
                value: option.value,
                class: option.class,
                label: option.children,
            })
            .collect::<Vec<_>>(),
    );

    let field_ref = NodeRef::<Div>::new();

    // Window listeners only exist in the browser; effects never run while
    // rendering on the server.
    Effect::new(move |_| {
        let listener = window_event_listener(leptos::ev::click, move |ev| {
            if !field.is_focused_untracked() {
                return;
            }
            let Some(root) = field_ref.get_untracked() else {
                return;
            };
            let target = event_target::<Node>(&ev);
            controller.page_click(root.contains(Some(&target)));
        });
        on_cleanup(move || listener.remove());
    });

    let selected_label = move || {
        let current = field.value();
        let label = options.with_value(|options| {
            options
                .iter()
                .find(|option| option.value == current)
                .map(|option| option.label.clone())
        });
        label.map(|label| label())
    };

    let entries = options.with_value(|options| {
        options
            .iter()
            .map(|option| (option.value.clone(), option.class.clone(), option.label.clone()))
            .collect::<Vec<_>>()
    });

    let option_views = entries
        .into_iter()
        .map(|(value, class, label)| {
            let compared = value.clone();
            let is_active = Memo::new(move |_| field.value() == compared);
            let base = merge_class("option", &class);

            view! {
                <div
                    class=move || merge_class(&base, &class_list(&[("active", is_active.get())]))
                    role="option"
                    aria-selected=move || is_active.get().to_string()
                    data-value=value.to_string()
                    on:click=move |_| controller.choose(value.clone())
                >
                    {label()}
                </div>
            }
        })
        .collect_view();

    let icon_class = Signal::derive(move || {
        merge_class("select-icon", &class_list(&[("open", field.is_focused())]))
    });

    view! {
        <FieldInternalWrapper field=field helper_text=helper_text class="select-field">
            <div class="select-root relative" node_ref=field_ref>
                <input
                    type="hidden"
                    name=field.name().unwrap_or_default()
                    value=field.value_untracked().to_string()
                    prop:value=move || field.value().to_string()
                />
                <InputContainer
                    field=field
                    label=label
                    color=color
                    class=merge_class("select-container", &class)
                    icon=move || view! { <ChevronDownIcon class=icon_class /> }
                    on_click=Callback::new(move |_| controller.toggle())
                >
                    <span
                        class="select-value"
                        id=field.id()
                        role="combobox"
                        aria-expanded=move || field.is_focused().to_string()
                        aria-disabled=move || field.is_disabled().to_string()
                    >
                        {selected_label}
                    </span>
                </InputContainer>

                <Dropdown
                    visible=Signal::derive(move || field.is_focused())
                    class=format!("select-dropdown {}", color.class())
                >
                    {option_views}
                </Dropdown>
            </div>
        </FieldInternalWrapper>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::form::validators::required;
    use std::sync::{Arc, Mutex};

    fn controller(
        disabled: bool,
        on_change: Option<Callback<FieldValue>>,
        on_focused: Option<Callback<()>>,
    ) -> SelectController {
        let field = FieldState::new(
            FieldOptions::named("game").with_validators(vec![required()]),
            Signal::derive(move || disabled),
        );
        SelectController {
            field,
            on_change,
            on_focused,
        }
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let opened = Arc::new(Mutex::new(0));
        let on_focused = {
            let opened = Arc::clone(&opened);
            Callback::new(move |()| *opened.lock().unwrap() += 1)
        };
        let select = controller(false, None, Some(on_focused));

        select.toggle();
        assert!(select.field.is_focused_untracked());
        assert_eq!(*opened.lock().unwrap(), 1);

        // Closing without a value validates.
        select.toggle();
        assert!(!select.field.is_focused_untracked());
        assert!(select.field.has_errors());
    }

    #[test]
    fn test_disabled_select_stays_closed() {
        let select = controller(true, None, None);
        select.toggle();
        assert!(!select.field.is_focused_untracked());
    }

    #[test]
    fn test_choose_sets_value_and_closes() {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let on_change = {
            let changes = Arc::clone(&changes);
            Callback::new(move |value: FieldValue| changes.lock().unwrap().push(value))
        };
        let select = controller(false, Some(on_change), None);

        select.toggle();
        select.choose(FieldValue::from("terraria"));

        assert_eq!(select.field.value_untracked(), FieldValue::from("terraria"));
        assert!(!select.field.is_focused_untracked());
        assert!(!select.field.has_errors());
        assert_eq!(*changes.lock().unwrap(), vec![FieldValue::from("terraria")]);
    }

    #[test]
    fn test_click_inside_keeps_dropdown_open() {
        let select = controller(false, None, None);
        select.toggle();

        // A click on an option lands inside the field root.
        select.page_click(true);
        assert!(select.field.is_focused_untracked());
        assert!(!select.field.has_errors());

        select.choose(FieldValue::from("pix"));
        assert!(!select.field.is_focused_untracked());
        assert!(!select.field.has_errors());
    }

    #[test]
    fn test_click_outside_closes_and_validates() {
        let select = controller(false, None, None);
        select.toggle();

        select.page_click(false);
        assert!(!select.field.is_focused_untracked());
        assert_eq!(select.field.errors(), vec!["This field is required".to_string()]);
    }

    #[test]
    fn test_select_renders_on_the_server() {
        let html = Owner::new().with(|| {
            view! {
                <Select name="method" value="pix">
                    <SelectOption slot value="card">"Card"</SelectOption>
                    <SelectOption slot value="pix">"Pix"</SelectOption>
                </Select>
            }
            .to_html()
        });

        assert!(html.contains("select-root"));
        assert!(html.contains("type=\"hidden\" name=\"method\" value=\"pix\""));
        assert!(html.contains("data-value=\"card\""));
    }

    #[test]
    fn test_closing_twice_does_not_revalidate() {
        let select = controller(false, None, None);
        select.set_open(false);
        assert!(!select.field.has_errors());
    }
}
