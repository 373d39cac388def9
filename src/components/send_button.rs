//! Submit control.

use dioxus::prelude::*;
use photodrop_core::deliver;
use photodrop_ui::{Button, ButtonVariant};

use crate::context::{use_transport, use_uploader};

/// Send the selected image. Disabled while a request is in flight or a
/// credential is empty.
#[component]
pub fn SendButton() -> Element {
    let mut state = use_uploader();
    let transport = use_transport();

    let loading = state.read().is_loading();
    let enabled = state.read().can_submit();

    let handle_send = move |_| {
        // Busy or missing input: begin_submission already updated state
        let Ok(request) = state.write().begin_submission() else {
            return;
        };

        let transport = transport.clone();
        spawn(async move {
            let outcome = deliver(transport.as_ref(), &request).await;
            state.write().finish_submission(&outcome);
        });
    };

    rsx! {
        div { class: "send-row",
            Button {
                variant: ButtonVariant::Send,
                disabled: !enabled,
                busy: loading,
                busy_label: "Sending...".to_string(),
                onclick: handle_send,
                "📤 Send to Telegram"
            }
        }
    }
}
