//! Form context: the registry of mounted fields and form-wide operations.

use std::collections::BTreeMap;

use leptos::context::Provider;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::state::FieldState;
use super::value::FieldValue;
use crate::error::{FormError, Result};
use crate::ui::utils::merge_class;

/// Handle to a form's fields.
///
/// Fields rendered inside a [`Form`] register themselves here on mount
/// and leave on cleanup. The handle is `Copy`; create one up front and
/// pass it to [`Form`] to drive the form from outside (e.g. a "Next"
/// button that calls [`FormContext::validate_all`]).
#[derive(Debug, Clone, Copy)]
pub struct FormContext {
    fields: RwSignal<Vec<FieldState>>,
    disabled: RwSignal<bool>,
}

impl Default for FormContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FormContext {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self {
            fields: RwSignal::new(Vec::new()),
            disabled: RwSignal::new(false),
        }
    }

    /// Adds a field.
    pub fn register(&self, field: FieldState) {
        self.fields.update(|fields| {
            if !fields.contains(&field) {
                fields.push(field);
            }
        });
    }

    /// Removes a field. Unknown fields are ignored.
    pub fn unregister(&self, field: FieldState) {
        // The form may already be gone when the whole tree is torn down.
        let _ = self
            .fields
            .try_update(|fields| fields.retain(|registered| *registered != field));
    }

    /// Number of mounted fields (tracked).
    pub fn len(&self) -> usize {
        self.fields.with(Vec::len)
    }

    /// Whether no field is mounted (tracked).
    pub fn is_empty(&self) -> bool {
        self.fields.with(Vec::is_empty)
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<FieldState> {
        self.fields.with_untracked(|fields| {
            fields
                .iter()
                .copied()
                .find(|field| field.name().as_deref() == Some(name))
        })
    }

    /// Values of every named field (tracked).
    pub fn values(&self) -> BTreeMap<String, FieldValue> {
        self.fields.with(|fields| {
            fields
                .iter()
                .filter_map(|field| field.name().map(|name| (name, field.value())))
                .collect()
        })
    }

    /// Values of every named field, without subscribing.
    pub fn values_untracked(&self) -> BTreeMap<String, FieldValue> {
        untrack(|| self.values())
    }

    /// Sets the value of the field called `name`.
    pub fn set_value(&self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        let field = self
            .field(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.set_value(value);
        Ok(())
    }

    /// Validates every field, even after one fails, and returns whether
    /// all passed.
    pub fn validate_all(&self) -> bool {
        let fields = self.fields.get_untracked();
        let invalid = fields
            .iter()
            .filter(|field| !field.validate_current())
            .count();

        tracing::debug!(
            name: "form.validated",
            fields = fields.len(),
            invalid,
            "Form validated"
        );

        invalid == 0
    }

    /// Whether any field currently shows errors (tracked).
    pub fn is_invalid(&self) -> bool {
        self.fields
            .with(|fields| fields.iter().any(FieldState::has_errors))
    }

    /// Current error messages of the named fields that have any (tracked).
    pub fn errors(&self) -> BTreeMap<String, Vec<String>> {
        self.fields.with(|fields| {
            fields
                .iter()
                .filter(|field| field.has_errors())
                .filter_map(|field| field.name().map(|name| (name, field.errors())))
                .collect()
        })
    }

    /// Resets every field to its initial value.
    pub fn reset(&self) {
        self.fields.with_untracked(|fields| fields.iter().for_each(FieldState::reset));
    }

    /// Disables or enables every field of the form.
    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }

    /// Whether the whole form is disabled (tracked).
    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    /// Validates every field and, when all pass, hands the named values to
    /// `on_submit`. Returns whether the form was valid.
    pub fn submit(&self, on_submit: Option<Callback<BTreeMap<String, FieldValue>>>) -> bool {
        if !self.validate_all() {
            return false;
        }
        if let Some(on_submit) = on_submit {
            on_submit.run(self.values_untracked());
        }
        true
    }

    /// Named values as a JSON object.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.values_untracked())?)
    }
}

/// Returns the context of the enclosing [`Form`], if any.
pub fn use_form() -> Option<FormContext> {
    use_context::<FormContext>()
}

/// Form element that collects the fields rendered inside it.
///
/// Submitting validates every field and calls `on_submit` with the named
/// values only when all of them pass. An invalid form is never posted.
///
/// # Example
///
/// ```rust,ignore
/// let form = FormContext::new();
///
/// view! {
///     <Form context=form on_submit=Callback::new(|values| save(values))>
///         <TextField name="city" label="City" validators=vec![required()] />
///     </Form>
///     <Button on_click=Callback::new(move |_| { form.validate_all(); })>"Check"</Button>
/// }
/// ```
#[component]
pub fn Form(
    /// Handle to use; a fresh one is created when omitted.
    #[prop(optional)]
    context: Option<FormContext>,
    /// Called with the named values after a valid submission.
    #[prop(optional)]
    on_submit: Option<Callback<BTreeMap<String, FieldValue>>>,
    /// URL the browser posts the fields to after a valid submission.
    /// Without it the submission never leaves the page.
    #[prop(into, optional)]
    action: Option<String>,
    /// Additional CSS classes.
    #[prop(into, optional)]
    class: String,
    /// Form content.
    children: Children,
) -> impl IntoView {
    let form = context.unwrap_or_default();

    let posts = action.is_some();
    let submit = move |ev: SubmitEvent| {
        // A valid form with an action goes on to the browser's own post.
        if !form.submit(on_submit) || !posts {
            ev.prevent_default();
        }
    };

    view! {
        <Provider value=form>
            <form
                class=merge_class("form flex flex-col gap-4", &class)
                action=action
                method=posts.then_some("post")
                on:submit=submit
            >
                {children()}
            </form>
        </Provider>
    }
}
