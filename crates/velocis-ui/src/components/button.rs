//! Button Components
//!
//! - Primary: white fill, dark text (hero call to action, form submit)
//! - Outline: transparent with a light border
//! - LinkButton: an anchor styled as a button, for in-page jumps

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// White fill, hover to light gray
    #[default]
    Primary,
    /// Transparent with a light border
    Outline,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
        }
    }

    fn with_extra(&self, extra: Option<&str>) -> String {
        match extra {
            Some(extra) if !extra.is_empty() => format!("{} {}", self.class(), extra),
            _ => self.class().to_string(),
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         button_type: "submit".to_string(),
///         disabled: sending,
///         "Send Message"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = props.variant.with_extra(props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Properties for the LinkButton component
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    /// Link target, usually an in-page anchor like `#contact`
    pub href: String,
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let full_class = props.variant.with_extra(props.class.as_deref());

    rsx! {
        a {
            class: "{full_class}",
            href: "{props.href}",
            {props.children}
        }
    }
}
