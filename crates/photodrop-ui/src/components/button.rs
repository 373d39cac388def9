//! Button Components
//!
//! - Send: the single submit action, green
//! - Outline: secondary actions such as browse
//! - Danger: destructive actions such as clear

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Secondary action - outlined
    #[default]
    Outline,
    /// Submit action - filled, large
    Send,
    /// Destructive action - red outline
    Danger,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Send => "btn-send",
            ButtonVariant::Danger => "btn-danger",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Replace the content with a spinner and `busy_label`
    #[props(default = false)]
    pub busy: bool,
    /// Text shown next to the spinner
    #[props(default = "Working...".to_string())]
    pub busy_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button.
///
/// While `busy` the button is disabled and shows a spinner.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Send,
///         disabled: !state.read().can_submit(),
///         busy: state.read().is_loading(),
///         busy_label: "Sending...".to_string(),
///         onclick: move |_| send(),
///         "📤 Send to Telegram"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base_class = props.variant.class();
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        format!("btn {}", base_class)
    } else {
        format!("btn {} {}", base_class, extra_class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled || props.busy,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if props.busy {
                Spinner {}
                "{props.busy_label}"
            } else {
                {props.children}
            }
        }
    }
}

/// Inline progress indicator
#[component]
pub fn Spinner() -> Element {
    rsx! {
        span { class: "spinner", "aria-hidden": "true" }
    }
}
