//! Glue between desktop input events and the core intake transitions.
//!
//! Handlers take their [`IntakeTicket`] synchronously, before anything is
//! read, and pass it along. The ticket order is then the order of the user's
//! actions, whatever order the reads finish in.

use std::sync::Arc;

use dioxus::html::FileEngine;
use dioxus::prelude::*;
use photodrop_core::{
    picker_extensions, prepare_preview, ImageCandidate, IntakeSource, IntakeTicket,
    UploaderState,
};
use rfd::FileDialog;

/// Take a ticket for an intake the user just started.
pub fn begin(mut state: Signal<UploaderState>, source: IntakeSource) -> IntakeTicket {
    state.write().begin_intake(source)
}

/// Decode the preview off-thread and install it under `ticket`.
///
/// The image lands in state only if no later intake installed one first.
pub async fn finish(
    mut state: Signal<UploaderState>,
    ticket: IntakeTicket,
    source: IntakeSource,
    candidate: ImageCandidate,
) {
    match prepare_preview(candidate).await {
        Ok(image) => {
            state.write().finish_intake(ticket, image);
        }
        Err(e) => {
            tracing::warn!(%source, "Failed to prepare preview: {}", e);
        }
    }
}

/// First image among the files of a drop.
pub async fn first_dropped_image(files: Arc<dyn FileEngine>) -> Option<ImageCandidate> {
    photodrop_core::first_image_file(files.files(), |path| {
        let files = files.clone();
        async move { files.read_file(&path).await }
    })
    .await
}

/// Open the native picker and load the chosen file.
///
/// Returns `None` if the user cancelled or the file is not an image.
pub async fn pick_image_file() -> Option<ImageCandidate> {
    // Open file picker (blocking, but in spawn_blocking so UI stays responsive)
    let picked = tokio::task::spawn_blocking(move || {
        let extensions = picker_extensions();
        let path = FileDialog::new()
            .add_filter("images", extensions.as_slice())
            .set_title("Select Image")
            .pick_file()?;
        Some(ImageCandidate::from_path(&path))
    })
    .await;

    match picked {
        Ok(Some(Ok(candidate))) if candidate.is_image() => Some(candidate),
        Ok(Some(Ok(candidate))) => {
            tracing::debug!("Ignoring picked non-image {:?}", candidate);
            None
        }
        Ok(Some(Err(e))) => {
            tracing::warn!("Failed to load picked file: {}", e);
            None
        }
        // User cancelled
        Ok(None) => None,
        Err(e) => {
            tracing::warn!("File picker error: {:?}", e);
            None
        }
    }
}
