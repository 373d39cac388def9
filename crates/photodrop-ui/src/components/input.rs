//! Input Field Components
//!
//! Labelled single-line inputs. Secrets render masked.

use dioxus::prelude::*;

/// What the field holds
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputKind {
    /// Plain text
    #[default]
    Text,
    /// Masked; never echoed on screen
    Secret,
}

impl InputKind {
    /// HTML `type` attribute for this kind
    pub fn html_type(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Secret => "password",
        }
    }
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used for the label's `for`
    pub id: String,
    /// Label text
    pub label: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub kind: InputKind,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Labelled text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "botToken".to_string(),
///         label: "Bot Token".to_string(),
///         kind: InputKind::Secret,
///         value: state.read().bot_token().to_string(),
///         oninput: move |s| state.write().set_bot_token(s),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            input {
                id: "{props.id}",
                class: "input-field",
                r#type: props.kind.html_type(),
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                autocomplete: "off",
                spellcheck: "false",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
