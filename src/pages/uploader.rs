//! Uploader page: the whole app on one card.

use dioxus::prelude::*;
use photodrop_core::IntakeSource;

use crate::clipboard;
use crate::components::{CredentialsForm, DropZone, Instructions, SendButton, StatusBanner};
use crate::context::use_uploader;
use crate::intake;

/// Whether a key press is the platform paste shortcut
fn is_paste_shortcut(e: &KeyboardEvent) -> bool {
    let modifiers = e.modifiers();
    let command = modifiers.ctrl() || modifiers.meta();
    matches!(e.key(), Key::Character(ref c) if c.eq_ignore_ascii_case("v")) && command
}

#[component]
pub fn Uploader() -> Element {
    let state = use_uploader();
    let has_image = state.read().image().is_some();

    // Text pastes into the inputs still happen; only clipboard images are taken
    let handle_keydown = move |e: KeyboardEvent| {
        if !is_paste_shortcut(&e) {
            return;
        }

        let ticket = intake::begin(state, IntakeSource::Paste);
        spawn(async move {
            match tokio::task::spawn_blocking(clipboard::read_image).await {
                Ok(Ok(Some(candidate))) => {
                    intake::finish(state, ticket, IntakeSource::Paste, candidate).await
                }
                Ok(Ok(None)) => tracing::debug!("Clipboard holds no image"),
                Ok(Err(e)) => tracing::warn!("Paste failed: {}", e),
                Err(e) => tracing::warn!("Clipboard task failed: {:?}", e),
            }
        });
    };

    rsx! {
        div {
            class: "app",
            tabindex: "0",
            onkeydown: handle_keydown,

            div { class: "card",
                header { class: "card__header",
                    h1 { class: "card__title", "📸 Telegram Image Uploader" }
                }
                div { class: "card__body",
                    CredentialsForm {}
                    DropZone {}

                    if has_image {
                        SendButton {}
                    }

                    StatusBanner {}
                    Instructions {}
                }
            }
        }
    }
}
