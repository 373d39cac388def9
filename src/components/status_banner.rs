//! Outcome of the last submission.

use dioxus::prelude::*;
use photodrop_core::StatusMessage;

use crate::context::use_uploader;

/// CSS modifier for a message; `None` hides the banner.
pub fn banner_class(message: &StatusMessage) -> Option<&'static str> {
    match message {
        StatusMessage::Empty => None,
        StatusMessage::Success(_) => Some("alert alert--success"),
        StatusMessage::Failure(_) => Some("alert alert--danger"),
    }
}

#[component]
pub fn StatusBanner() -> Element {
    let state = use_uploader();
    let message = state.read().message().clone();

    rsx! {
        if let Some(class) = banner_class(&message) {
            div { class: "{class}", role: "status", "{message}" }
        }
    }
}
