use std::sync::Arc;

use dioxus::prelude::*;
use photodrop_core::{TelegramClient, UploaderState};

use crate::context::{get_config, SharedTransport};
use crate::pages::Uploader;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, uploader state and transport context.
#[component]
pub fn App() -> Element {
    let state: Signal<UploaderState> = use_signal(UploaderState::new);

    use_context_provider(|| state);
    use_context_provider(|| {
        let client = TelegramClient::new(&get_config());
        Arc::new(client) as SharedTransport
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Uploader {}
    }
}
