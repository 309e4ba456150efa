//! Shared form controls and page chrome.

use api::dashboard::StatusClass;
use dioxus::prelude::*;

/// Labelled text input.
#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = false)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                disabled,
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

/// Labelled select; options go in as children.
#[component]
pub fn SelectField(
    id: String,
    label: String,
    value: String,
    #[props(default = false)] disabled: bool,
    onchange: EventHandler<FormEvent>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { r#for: "{id}", "{label}" }
            select {
                id: "{id}",
                value: "{value}",
                disabled,
                onchange: move |evt| onchange.call(evt),
                {children}
            }
        }
    }
}

/// Checkbox group over a fixed option catalog.
#[component]
pub fn CheckboxGroup(
    label: String,
    options: Vec<String>,
    selected: Vec<String>,
    on_toggle: EventHandler<(String, bool)>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            span { class: "field-label", "{label}" }
            div {
                class: "checkbox-group",
                for entry in options.clone() {
                    CheckboxOption {
                        key: "{entry}",
                        name: entry.clone(),
                        checked: selected.contains(&entry),
                        on_toggle,
                    }
                }
            }
        }
    }
}

#[component]
fn CheckboxOption(name: String, checked: bool, on_toggle: EventHandler<(String, bool)>) -> Element {
    let value = name.clone();
    rsx! {
        label {
            class: "checkbox-option",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |evt: FormEvent| on_toggle.call((value.clone(), evt.checked())),
            }
            span { "{name}" }
        }
    }
}

/// Cancel + submit pair; the submit control disables while a request is in
/// flight and swaps its label.
#[component]
pub fn SubmitRow(
    busy: bool,
    #[props(default = false)] disabled: bool,
    idle_label: String,
    busy_label: String,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "form-actions",
            button {
                r#type: "button",
                class: "secondary",
                onclick: move |_| on_cancel.call(()),
                "Cancelar"
            }
            button {
                r#type: "submit",
                class: "primary",
                disabled: busy || disabled,
                if busy { "{busy_label}" } else { "{idle_label}" }
            }
        }
    }
}

/// Inline validation/submission message.
#[component]
pub fn ErrorText(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "form-error", "{message}" }
        }
    }
}

/// Status pill; unknown statuses render in the neutral style.
#[component]
pub fn StatusBadge(status: String) -> Element {
    let class = StatusClass::from_status(&status).css_class();
    rsx! {
        span { class: "{class}", "{status}" }
    }
}

/// Dashboard card linking to one of the create forms.
#[component]
pub fn ActionCard(
    title: String,
    blurb: String,
    button_label: String,
    icon: Element,
    onclick: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "action-card",
            div {
                class: "action-card-header",
                div { class: "action-card-icon", {icon} }
                h2 { "{title}" }
            }
            p { "{blurb}" }
            button {
                class: "primary full-width",
                onclick: move |_| onclick.call(()),
                "{button_label}"
            }
        }
    }
}

/// Card wrapper shared by the form pages.
#[component]
pub fn PageCard(
    title: String,
    #[props(default = String::new())] blurb: String,
    icon: Element,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "page-card",
            div {
                class: "page-card-header",
                div { class: "page-card-icon", {icon} }
                h1 { "{title}" }
            }
            if !blurb.is_empty() {
                p { class: "page-card-blurb", "{blurb}" }
            }
            {children}
        }
    }
}
