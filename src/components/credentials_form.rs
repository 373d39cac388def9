//! Bot token and channel inputs.

use dioxus::prelude::*;
use photodrop_ui::{Input, InputKind};

use crate::context::use_uploader;

#[component]
pub fn CredentialsForm() -> Element {
    let mut state = use_uploader();
    let token = state.read().bot_token().to_string();
    let channel = state.read().channel_id().to_string();

    rsx! {
        div { class: "credentials",
            Input {
                id: "botToken".to_string(),
                label: "Bot Token".to_string(),
                kind: InputKind::Secret,
                placeholder: "Enter your bot token".to_string(),
                value: token,
                oninput: move |value: String| state.write().set_bot_token(value),
            }
            Input {
                id: "channelId".to_string(),
                label: "Channel ID (with @)".to_string(),
                placeholder: "@yourchannel".to_string(),
                value: channel,
                oninput: move |value: String| state.write().set_channel_id(value),
            }
        }
    }
}
