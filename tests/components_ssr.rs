use leptos::prelude::*;
use quarry_ui::ui::components::{List, ListItem, ListSize, Modal, Step, Steps, Surface};
use quarry_ui::ui::form::{
    FieldValue, Form, FormContext, ResizeDirection, Select, SelectOption, TextArea, TextField,
    required,
};

/// Renders `view` inside a throwaway reactive owner.
fn render<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(|| view().to_html())
}

#[test]
fn test_surface_depth_follows_nesting() {
    let html = render(|| {
        view! {
            <Surface>
                <Surface>
                    <Surface>
                        <Surface>"deepest"</Surface>
                    </Surface>
                </Surface>
            </Surface>
        }
    });

    assert_eq!(html.matches("data-depth=\"1\"").count(), 1);
    assert_eq!(html.matches("data-depth=\"2\"").count(), 1);
    // Depth saturates at three.
    assert_eq!(html.matches("data-depth=\"3\"").count(), 2);
    assert!(html.contains("gray-3"));
}

#[test]
fn test_surface_depth_does_not_leak_to_siblings() {
    let html = render(|| {
        view! {
            <Surface>
                <Surface>"child"</Surface>
            </Surface>
            <Surface>"sibling"</Surface>
        }
    });

    assert_eq!(html.matches("data-depth=\"1\"").count(), 2);
    assert_eq!(html.matches("data-depth=\"2\"").count(), 1);
}

#[test]
fn test_steps_mark_current_step() {
    let html = render(|| {
        view! {
            <Steps current=1usize identification="signup">
                <Step description="who you are">"Account"</Step>
                <Step>"Profile"</Step>
                <Step>"Done"</Step>
            </Steps>
        }
    });

    assert!(html.contains("id=\"signup\""));
    assert_eq!(html.matches("aria-current=\"step\"").count(), 1);
    assert!(html.contains("step done"));
    assert!(html.contains("step current"));
    assert!(html.contains("step upcoming"));
    assert!(html.contains("data-index=\"2\""));
    // One connector between each pair of steps.
    assert_eq!(html.matches("step-connector").count(), 2);
    assert!(html.contains("who you are"));
}

#[test]
fn test_step_outside_steps_renders_as_first_upcoming() {
    let html = render(|| view! { <Step>"Alone"</Step> });

    assert!(html.contains("data-index=\"0\""));
    assert!(html.contains("step upcoming"));
    assert!(!html.contains("step current"));
    assert!(!html.contains("aria-current"));
    assert!(!html.contains("step-connector"));
}

#[test]
fn test_inline_modal_renders_only_when_visible() {
    let hidden = render(|| {
        view! {
            <Modal visible=false inline=true title=|| "Hidden">
                <p>"body"</p>
            </Modal>
        }
    });
    assert!(!hidden.contains("modal-frame"));

    let shown = render(|| {
        view! {
            <Modal visible=true inline=true title=|| "Delete file?">
                <p>"This cannot be undone."</p>
            </Modal>
        }
    });
    assert!(shown.contains("role=\"dialog\""));
    assert!(shown.contains("aria-modal=\"true\""));
    assert!(shown.contains("Delete file?"));
    assert!(shown.contains("This cannot be undone."));
    assert!(shown.contains("data-depth=\"1\""));
    let cancel = shown.find("Cancel").expect("cancel action");
    let ok = shown.find("Ok").expect("ok action");
    assert!(cancel < ok);
}

#[test]
fn test_list_exposes_size() {
    let html = render(|| {
        view! {
            <List size=ListSize::Large>
                <ListItem>"Apple"</ListItem>
                <ListItem>"Banana"</ListItem>
            </List>
        }
    });

    assert!(html.contains("data-size=\"large\""));
    let apple = html.find("Apple").expect("first item");
    let banana = html.find("Banana").expect("second item");
    assert!(apple < banana);
}

#[test]
fn test_select_shows_selected_option() {
    let html = render(|| {
        view! {
            <Select name="letter" label="Letter" value="b">
                <SelectOption slot value="a">"Alpha"</SelectOption>
                <SelectOption slot value="b">"Bravo"</SelectOption>
            </Select>
        }
    });

    assert!(html.contains("aria-selected=\"true\" data-value=\"b\""));
    assert!(html.contains("aria-selected=\"false\" data-value=\"a\""));
    // Once in the closed select, once in the dropdown.
    assert_eq!(html.matches("Bravo").count(), 2);
    assert_eq!(html.matches("Alpha").count(), 1);
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(html.contains("for=\"field-letter\""));
}

#[test]
fn test_text_area_resize_direction() {
    let html = render(|| {
        view! {
            <TextArea name="bio" resizing_direction=ResizeDirection::Vertical />
            <TextArea name="fixed" resizable=false resizing_direction=ResizeDirection::Horizontal />
        }
    });

    assert!(html.contains("--resize-direction: vertical"));
    assert!(html.contains("--resize-direction: none"));
    assert!(!html.contains("--resize-direction: horizontal"));
}

#[test]
fn test_helper_line_only_with_validators_or_helper_text() {
    let bare = render(|| view! { <TextField name="plain" /> });
    assert!(!bare.contains("helper-line"));

    let helped = render(|| view! { <TextField name="hint" helper_text="Say hi" /> });
    assert!(helped.contains("Say hi"));

    let validated = render(|| view! { <TextField name="must" validators=vec![required()] /> });
    assert!(validated.contains("helper-line"));
}

#[test]
fn test_form_collects_and_disables_fields() {
    let owner = Owner::new();
    owner.with(|| {
        let form = FormContext::new();
        form.set_disabled(true);

        let html = view! {
            <Form context=form>
                <TextField name="city" value="Recife" />
                <Select name="size" value="m">
                    <SelectOption slot value="m">"Medium"</SelectOption>
                </Select>
            </Form>
            <TextField name="outside" />
        }
        .to_html();

        assert!(html.contains("<form"));
        assert_eq!(form.len(), 2);
        assert!(form.field("outside").is_none());
        assert_eq!(form.values_untracked()["city"], FieldValue::from("Recife"));

        let city = form.field("city").expect("registered field");
        assert!(city.is_disabled_untracked());

        form.set_disabled(false);
        assert!(!city.is_disabled_untracked());
    });
}
