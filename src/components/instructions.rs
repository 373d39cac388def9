//! Setup steps shown under the form.

use dioxus::prelude::*;

const STEPS: &[&str] = &[
    "Create a Telegram bot using @BotFather",
    "Get your bot token from BotFather",
    "Add your bot to your channel as an administrator",
    "Enter your bot token and channel ID above",
    "Upload or paste an image and click \"Send to Telegram\"",
];

#[component]
pub fn Instructions() -> Element {
    rsx! {
        div { class: "instructions",
            h6 { class: "instructions__title", "📋 Instructions:" }
            ol { class: "instructions__list",
                for step in STEPS.iter() {
                    li { "{step}" }
                }
            }
        }
    }
}
