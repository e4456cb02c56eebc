//! Input Field Components
//!
//! Controlled text inputs and textareas on dark panels, plus the hidden
//! honeypot input used to catch automated submitters.

use dioxus::prelude::*;

/// Element id derived from the form field name
pub fn field_id(name: &str) -> String {
    format!("field-{}", name)
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Form field name, also used to derive the element id
    pub name: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         name: "email".to_string(),
///         input_type: "email".to_string(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         placeholder: "Your Email".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = field_id(&props.name);

    rsx! {
        input {
            id: "{id}",
            class: "input-field",
            name: "{props.name}",
            r#type: "{props.input_type}",
            value: "{props.value}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            "aria-label": props.placeholder.as_deref().unwrap_or(""),
            required: props.required,
            disabled: props.disabled,
            oninput: move |e| props.oninput.call(e.value()),
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub name: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = field_id(&props.name);

    rsx! {
        textarea {
            id: "{id}",
            class: "input-field textarea",
            name: "{props.name}",
            rows: "{props.rows}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            "aria-label": props.placeholder.as_deref().unwrap_or(""),
            required: props.required,
            disabled: props.disabled,
            value: "{props.value}",
            oninput: move |e| props.oninput.call(e.value()),
        }
    }
}

/// Properties for the HoneypotInput component
#[derive(Clone, PartialEq, Props)]
pub struct HoneypotInputProps {
    /// Something a form-filling bot finds plausible
    #[props(default = "company".to_string())]
    pub name: String,
    pub value: String,
    pub oninput: EventHandler<String>,
}

/// Input hidden from people and skipped by keyboard navigation.
///
/// Naive bots fill every input they find; a value here marks the submission
/// as automated.
#[component]
pub fn HoneypotInput(props: HoneypotInputProps) -> Element {
    rsx! {
        input {
            class: "honeypot",
            name: "{props.name}",
            r#type: "text",
            style: "display: none;",
            tabindex: "-1",
            autocomplete: "off",
            "aria-hidden": "true",
            value: "{props.value}",
            oninput: move |e| props.oninput.call(e.value()),
        }
    }
}
