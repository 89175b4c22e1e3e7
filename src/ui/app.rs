//! Demo pages rendered by the server: the component gallery, the checkout
//! wizard and the not-found page.

use std::collections::BTreeMap;

use leptos::prelude::*;
use serde::Serialize;

use crate::ui::components::{
    Align, Button, ButtonSize, ButtonVariant, Container, Depth, Divisor, List, ListItem, ListSize,
    MaxWidth, Modal, Stack, StackDirection, Step, Steps, Surface, TextButton,
};
use crate::ui::form::{
    FieldValue, Form, FormContext, InputMask, ResizeDirection, Select, SelectOption, TextArea, TextField,
    Validator, email, max_length, min_length, numeric, required, run_validators,
};
use crate::ui::utils::Accent;

/// Titles of the checkout steps, in order.
pub const CHECKOUT_STEPS: [&str; 3] = ["Address", "Payment", "Review"];

/// Names of the fields asked for by each checkout step, in step order.
pub const CHECKOUT_STEP_FIELDS: [&[&str]; 3] = [
    &["full_name", "email", "zip", "number", "street"],
    &["payment_method", "notes"],
    &[],
];

/// Validators of every checkout field, keyed by field name.
///
/// Shared by the rendered form and `POST /api/checkout/validate`.
pub fn checkout_validators() -> Vec<(&'static str, Vec<Validator>)> {
    vec![
        ("full_name", vec![required(), min_length(3), max_length(80)]),
        ("email", vec![required(), email()]),
        ("zip", vec![required(), min_length(9)]),
        ("street", vec![required()]),
        ("number", vec![required(), numeric()]),
        ("payment_method", vec![required()]),
        ("notes", vec![max_length(200)]),
    ]
}

/// Outcome of validating submitted checkout values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutValidation {
    pub valid: bool,
    /// Messages of the failing fields only.
    pub errors: BTreeMap<String, Vec<String>>,
}

/// Runs the checkout validators over `values`; missing fields count as empty.
pub fn validate_checkout(values: &BTreeMap<String, FieldValue>) -> CheckoutValidation {
    validate_fields(values, |_| true)
}

/// Like [`validate_checkout`], restricted to the fields of step `step`.
/// Steps past the end ask for nothing and always pass.
pub fn validate_checkout_step(
    step: usize,
    values: &BTreeMap<String, FieldValue>,
) -> CheckoutValidation {
    let fields = CHECKOUT_STEP_FIELDS.get(step).copied().unwrap_or_default();
    validate_fields(values, |name| fields.contains(&name))
}

fn validate_fields(
    values: &BTreeMap<String, FieldValue>,
    include: impl Fn(&str) -> bool,
) -> CheckoutValidation {
    let errors: BTreeMap<String, Vec<String>> = checkout_validators()
        .into_iter()
        .filter(|(name, _)| include(name))
        .filter_map(|(name, validators)| {
            let value = values.get(name).cloned().unwrap_or_default();
            let messages = run_validators(&validators, &value);
            (!messages.is_empty()).then(|| (name.to_string(), messages))
        })
        .collect();

    CheckoutValidation {
        valid: errors.is_empty(),
        errors,
    }
}

fn step_action(step: usize) -> String {
    format!("/checkout?step={step}")
}

fn initial_value(values: &BTreeMap<String, FieldValue>, name: &str) -> FieldValue {
    values.get(name).cloned().unwrap_or_default()
}

fn validators_for(name: &str) -> Vec<Validator> {
    checkout_validators()
        .into_iter()
        .find(|(field, _)| *field == name)
        .map(|(_, validators)| validators)
        .unwrap_or_default()
}

/// Component gallery.
#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <Container class="gallery py-8">
            <Stack direction=StackDirection::Vertical gap=6>
                <h1 class="text-3xl font-bold">"Components"</h1>

                <section id="surfaces">
                    <h2 class="text-xl font-semibold mb-2">"Surfaces"</h2>
                    <Surface class="p-4">
                        <p>"Depth one"</p>
                        <Surface class="p-4">
                            <p>"Depth two"</p>
                            <Surface class="p-4">
                                <p>"Depth three"</p>
                                <Surface class="p-4">
                                    <p>"Still three"</p>
                                </Surface>
                            </Surface>
                        </Surface>
                        <Surface depth=Depth::Zero class="p-4">
                            <p>"Flat"</p>
                        </Surface>
                    </Surface>
                </section>

                <section id="buttons">
                    <h2 class="text-xl font-semibold mb-2">"Buttons"</h2>
                    <Stack align=Align::Start gap=3>
                        <Button>"Filled"</Button>
                        <Button variant=ButtonVariant::Outlined color=Accent::Secondary>"Outlined"</Button>
                        <Button variant=ButtonVariant::Empty color=Accent::Tertiary>"Empty"</Button>
                        <Button size=ButtonSize::Small disabled=true>"Disabled"</Button>
                        <TextButton active=true>"Active text"</TextButton>
                        <TextButton>"Text"</TextButton>
                    </Stack>
                </section>

                <section id="lists">
                    <h2 class="text-xl font-semibold mb-2">"Lists"</h2>
                    <Stack align=Align::SpaceBetween>
                        <List size=ListSize::Small>
                            <ListItem>"Small"</ListItem>
                            <ListItem active=true>"Active"</ListItem>
                        </List>
                        <List>
                            <ListItem>"Medium"</ListItem>
                        </List>
                        <List size=ListSize::Large>
                            <ListItem>"Large"</ListItem>
                        </List>
                    </Stack>
                </section>

                <section id="steps">
                    <h2 class="text-xl font-semibold mb-2">"Steps"</h2>
                    <Steps current=1usize identification="gallery-steps">
                        <Step description="Done already">"First"</Step>
                        <Step description="In progress">"Second"</Step>
                        <Step>"Third"</Step>
                    </Steps>
                </section>

                <section id="fields">
                    <h2 class="text-xl font-semibold mb-2">"Fields"</h2>
                    <Stack direction=StackDirection::Vertical gap=4>
                        <TextField
                            name="phone"
                            label="Phone"
                            mask=InputMask::pattern("(99) 99999-9999")
                            helper_text="Digits only, the mask adds the rest"
                        />
                        <Select
                            name="game"
                            label="Which one is better?"
                            value="terraria"
                            validators=vec![required()]
                        >
                            <SelectOption slot value="minecraft">"Minecraft"</SelectOption>
                            <SelectOption slot value="terraria">"Terraria"</SelectOption>
                            <SelectOption slot value="starbound">"Starbound"</SelectOption>
                        </Select>
                        <TextArea
                            name="bio"
                            label="Bio"
                            resizing_direction=ResizeDirection::Vertical
                            helper_text="Tell us about yourself"
                        />
                        <TextArea name="fixed" label="Fixed size" resizable=false disabled=true />
                    </Stack>
                </section>

                <section id="modal">
                    <h2 class="text-xl font-semibold mb-2">"Modal"</h2>
                    <div class="modal-preview relative">
                        <Modal
                            visible=true
                            inline=true
                            title=|| "Delete file?"
                            extra_footer=|| view! { <span class="text-sm">"Step 1 of 1"</span> }
                        >
                            <p>"This cannot be undone."</p>
                        </Modal>
                    </div>
                </section>
            </Stack>
        </Container>
    }
}

/// Checkout wizard, showing the form of step `step`.
///
/// Each step's form posts to `/checkout?step=<n>`; when the server rejects
/// a post it renders the page again with the `submitted` values and the
/// failing fields' messages.
#[component]
pub fn CheckoutPage(
    /// Zero-based index of the active step; clamped to the last one.
    step: usize,
    /// Values of a rejected post of this step.
    #[prop(optional_no_strip)]
    submitted: Option<BTreeMap<String, FieldValue>>,
) -> impl IntoView {
    let step = step.min(CHECKOUT_STEPS.len() - 1);
    let rejected = submitted.is_some();
    let values = submitted.unwrap_or_default();
    let form = FormContext::new();

    let body = match step {
        0 => view! { <AddressStep form=form values=values /> }.into_any(),
        1 => view! { <PaymentStep form=form values=values /> }.into_any(),
        _ => view! { <ReviewStep /> }.into_any(),
    };

    // The step's fields registered while building the body.
    if rejected {
        form.validate_all();
    }

    view! {
        <Container max_width=MaxWidth::Md class="checkout py-8">
            <Stack direction=StackDirection::Vertical gap=6>
                <h1 class="text-3xl font-bold">"Checkout"</h1>
                <Steps current=step identification="checkout">
                    <Step description="Where to ship">{CHECKOUT_STEPS[0]}</Step>
                    <Step description="How to pay">{CHECKOUT_STEPS[1]}</Step>
                    <Step>{CHECKOUT_STEPS[2]}</Step>
                </Steps>
                <Surface class="p-6">{body}</Surface>
            </Stack>
        </Container>
    }
}

#[component]
fn AddressStep(form: FormContext, values: BTreeMap<String, FieldValue>) -> impl IntoView {
    let initial = |name| initial_value(&values, name);
    let (full_name, email, zip) = (initial("full_name"), initial("email"), initial("zip"));
    let (number, street) = (initial("number"), initial("street"));

    view! {
        <Form context=form action=step_action(0) class="checkout-address">
            <TextField
                name="full_name"
                label="Full name"
                value=full_name
                validators=validators_for("full_name")
            />
            <TextField
                name="email"
                label="E-mail"
                input_type="email"
                autocomplete="email"
                value=email
                validators=validators_for("email")
            />
            <Stack gap=4>
                <TextField
                    name="zip"
                    label="ZIP code"
                    mask=InputMask::pattern("99999-999")
                    value=zip
                    validators=validators_for("zip")
                />
                <TextField
                    name="number"
                    label="Number"
                    mask=InputMask::pattern("99999")
                    value=number
                    validators=validators_for("number")
                />
            </Stack>
            <TextField
                name="street"
                label="Street"
                value=street
                validators=validators_for("street")
            />
            <Divisor class="my-4" />
            <StepNavigation step=0 />
        </Form>
    }
}

#[component]
fn PaymentStep(form: FormContext, values: BTreeMap<String, FieldValue>) -> impl IntoView {
    let payment_method = initial_value(&values, "payment_method");
    let notes = initial_value(&values, "notes");

    view! {
        <Form context=form action=step_action(1) class="checkout-payment">
            <Select
                name="payment_method"
                label="Payment method"
                helper_text="You will not be charged in this demo"
                value=payment_method
                validators=validators_for("payment_method")
            >
                <SelectOption slot value="card">"Credit card"</SelectOption>
                <SelectOption slot value="pix">"Pix"</SelectOption>
                <SelectOption slot value="invoice">"Invoice"</SelectOption>
            </Select>
            <TextArea
                name="notes"
                label="Delivery notes"
                rows=4
                resizing_direction=ResizeDirection::Vertical
                value=notes
                validators=validators_for("notes")
            />
            <Divisor class="my-4" />
            <StepNavigation step=1 />
        </Form>
    }
}

#[component]
fn ReviewStep() -> impl IntoView {
    let last = CHECKOUT_STEPS.len() - 1;

    view! {
        <div class="checkout-review">
            <p class="mb-4">"Check everything before confirming."</p>
            <List size=ListSize::Small>
                {CHECKOUT_STEPS
                    .iter()
                    .map(|title| view! { <ListItem>{*title}</ListItem> })
                    .collect_view()}
            </List>
            <Divisor class="my-4" />
            <StepNavigation step=last />
        </div>
    }
}

/// Back/next controls between checkout steps.
///
/// "Next" submits the enclosing step form, so moving forward always goes
/// through validation. "Back" is disabled on the first step.
#[component]
fn StepNavigation(step: usize) -> impl IntoView {
    let last = CHECKOUT_STEPS.len() - 1;

    let back = if step == 0 {
        view! {
            <Button variant=ButtonVariant::Outlined disabled=true class="step-back">
                "Back"
            </Button>
        }
        .into_any()
    } else {
        view! {
            <a href=step_action(step - 1) class="step-back">"Back"</a>
        }
        .into_any()
    };

    view! {
        <Stack align=Align::SpaceBetween class="step-navigation">
            {back}
            {if step < last {
                view! { <Button button_type="submit" class="step-next">"Next"</Button> }.into_any()
            } else {
                view! { <Button class="step-confirm">"Confirm"</Button> }.into_any()
            }}
        </Stack>
    }
}

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Container class="py-20" horizontal_align=Align::Center>
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="mb-6">"Page not found"</p>
            <a href="/">
                <Button variant=ButtonVariant::Outlined>"Go Home"</Button>
            </a>
        </Container>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, FieldValue> {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), FieldValue::from(*value)))
            .collect()
    }

    #[test]
    fn test_complete_checkout_is_valid() {
        let result = validate_checkout(&values(&[
            ("full_name", "Ana Souza"),
            ("email", "ana@example.com"),
            ("zip", "01310-100"),
            ("street", "Av. Paulista"),
            ("number", "1578"),
            ("payment_method", "pix"),
        ]));

        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_missing_fields_are_required() {
        let result = validate_checkout(&values(&[("email", "not-an-email")]));

        assert!(!result.valid);
        assert_eq!(result.errors["email"], vec!["Invalid email address".to_string()]);
        assert_eq!(result.errors["street"], vec!["This field is required".to_string()]);
        // Optional field with no value passes.
        assert!(!result.errors.contains_key("notes"));
    }

    #[test]
    fn test_step_validation_only_checks_that_step() {
        let address = values(&[
            ("full_name", "Ana Souza"),
            ("email", "ana@example.com"),
            ("zip", "01310-100"),
            ("street", "Av. Paulista"),
            ("number", "1578"),
        ]);

        assert!(validate_checkout_step(0, &address).valid);

        let payment = validate_checkout_step(1, &address);
        assert!(!payment.valid);
        assert_eq!(payment.errors.keys().collect::<Vec<_>>(), vec!["payment_method"]);

        // Review and anything past it ask for nothing.
        assert!(validate_checkout_step(2, &BTreeMap::new()).valid);
        assert!(validate_checkout_step(9, &BTreeMap::new()).valid);
    }

    #[test]
    fn test_every_step_field_has_validators() {
        for name in CHECKOUT_STEP_FIELDS.iter().flat_map(|fields| fields.iter()) {
            assert!(!validators_for(name).is_empty(), "{name} has no validators");
        }
    }

    #[test]
    fn test_rejected_step_shows_errors_and_keeps_values() {
        let html = Owner::new().with(|| {
            let submitted = values(&[("full_name", "Al"), ("email", "ana@example.com")]);
            view! { <CheckoutPage step=0 submitted=Some(submitted) /> }.to_html()
        });

        assert!(html.contains("action=\"/checkout?step=0\""));
        assert!(html.contains("method=\"post\""));
        assert!(html.contains("value=\"ana@example.com\""));
        assert!(html.contains("Must be at least 3 characters"));
        assert!(html.contains("This field is required"));
    }

    #[test]
    fn test_fresh_step_has_no_errors_and_disabled_back() {
        let html = Owner::new().with(|| view! { <CheckoutPage step=0 /> }.to_html());

        assert!(!html.contains("This field is required"));
        assert!(html.contains("type=\"submit\""));
        assert!(!html.contains("<a href=\"/checkout?step="));

        let html = Owner::new().with(|| view! { <CheckoutPage step=1 /> }.to_html());
        assert!(html.contains("<a href=\"/checkout?step=0\""));
    }

    #[test]
    fn test_validators_for_unknown_field_is_empty() {
        assert!(validators_for("nope").is_empty());
        assert_eq!(validators_for("email").len(), 2);
    }
}
