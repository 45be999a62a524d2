use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "field-label", r#for: "{html_for}", {children} }
    }
}

#[component]
pub fn Input(
    id: String,
    value: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
    #[props(default)] invalid: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: if invalid { "input input--invalid" } else { "input" },
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            value: "{value}",
            disabled,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Labelled input with a "<label> is required" hint when `invalid`.
#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] invalid: bool,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "field",
            Label { html_for: id.clone(), "{label}" }
            Input {
                id: id.clone(),
                r#type,
                value,
                disabled,
                invalid,
                oninput: move |evt: FormEvent| on_change.call(evt.value()),
            }
            if invalid {
                span { class: "field-error", "{label} is required" }
            }
        }
    }
}

#[component]
pub fn TextAreaField(
    id: String,
    label: String,
    value: String,
    #[props(default)] invalid: bool,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "field",
            Label { html_for: id.clone(), "{label}" }
            textarea {
                id: "{id}",
                class: if invalid { "input input--invalid" } else { "input" },
                rows: 4,
                value: "{value}",
                oninput: move |evt| on_change.call(evt.value()),
            }
            if invalid {
                span { class: "field-error", "{label} is required" }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[component]
pub fn SelectField(
    id: String,
    label: String,
    value: String,
    options: Vec<SelectOption>,
    #[props(default)] disabled: bool,
    #[props(default)] invalid: bool,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "field",
            Label { html_for: id.clone(), "{label}" }
            select {
                id: "{id}",
                class: if invalid { "input input--invalid" } else { "input" },
                value: "{value}",
                disabled,
                onchange: move |evt| on_change.call(evt.value()),
                option { value: "", disabled: true, selected: value.is_empty(), "Select an option..." }
                for opt in options {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
            if invalid {
                span { class: "field-error", "{label} is required" }
            }
        }
    }
}

#[component]
pub fn CheckboxField(id: String, label: String, checked: bool, on_change: EventHandler<bool>) -> Element {
    rsx! {
        div {
            class: "field field--inline",
            input {
                id: "{id}",
                r#type: "checkbox",
                checked,
                onchange: move |evt| on_change.call(evt.checked()),
            }
            Label { html_for: id.clone(), "{label}" }
        }
    }
}
