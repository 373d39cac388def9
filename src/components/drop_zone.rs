//! Drop Zone
//!
//! Accepts dropped files and the picker; shows the preview once an image is
//! selected. Paste is handled by the page so it works from anywhere.

use dioxus::prelude::*;
use photodrop_core::IntakeSource;
use photodrop_ui::{Button, ButtonVariant};

use crate::context::use_uploader;
use crate::intake::{self, first_dropped_image, pick_image_file};

#[component]
pub fn DropZone() -> Element {
    let mut state = use_uploader();

    let dragging = state.read().is_dragging();
    let preview = state.read().image().map(|img| img.preview.clone());

    let handle_drop = move |e: DragEvent| {
        e.prevent_default();
        state.write().set_dragging(false);

        let Some(files) = e.files() else {
            return;
        };
        let ticket = intake::begin(state, IntakeSource::Drop);
        spawn(async move {
            if let Some(candidate) = first_dropped_image(files).await {
                intake::finish(state, ticket, IntakeSource::Drop, candidate).await;
            }
        });
    };

    let browse = move |_| {
        let ticket = intake::begin(state, IntakeSource::Picker);
        spawn(async move {
            if let Some(candidate) = pick_image_file().await {
                intake::finish(state, ticket, IntakeSource::Picker, candidate).await;
            }
        });
    };

    let zone_class = if dragging {
        "drop-zone drop-zone--active"
    } else {
        "drop-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |e: DragEvent| {
                e.prevent_default();
                state.write().set_dragging(true);
            },
            ondragleave: move |e: DragEvent| {
                e.prevent_default();
                state.write().set_dragging(false);
            },
            ondrop: handle_drop,

            if let Some(uri) = preview {
                div { class: "preview",
                    img {
                        class: "preview__img",
                        src: "{uri}",
                        alt: "Preview",
                    }
                    div { class: "preview__actions",
                        Button {
                            variant: ButtonVariant::Danger,
                            onclick: move |_| state.write().clear(),
                            "🗑️ Clear"
                        }
                        Button {
                            onclick: browse,
                            "📁 Choose Different"
                        }
                    }
                }
            } else {
                div { class: "drop-zone__prompt",
                    div { class: "drop-zone__icon", "☁" }
                    h5 { class: "drop-zone__title", "Drag & Drop Image Here" }
                    p { class: "text-muted", "or" }
                    Button {
                        onclick: browse,
                        "📁 Browse Files"
                    }
                    p { class: "drop-zone__hint",
                        "You can also paste an image using Ctrl+V"
                    }
                }
            }
        }
    }
}
