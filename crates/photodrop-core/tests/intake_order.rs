//! Intake Ordering Tests
//!
//! Tickets are taken when the user acts, so a slow read started first never
//! overrides a quicker selection made after it.

use std::sync::{Arc, Mutex};

use photodrop_core::{
    first_image_file, prepare_preview, IntakeSource, IntakeTicket, UploaderState,
};
use tokio::sync::oneshot;

// ============================================================================
// Test Utilities
// ============================================================================

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0];

type Shared = Arc<Mutex<UploaderState>>;

/// Read, preview and install the way the desktop handlers do
async fn run_intake(
    state: Shared,
    ticket: IntakeTicket,
    path: &str,
    read: impl std::future::Future<Output = Option<Vec<u8>>>,
) -> bool {
    let mut read = Some(read);
    let candidate = first_image_file(vec![path.to_string()], |_| {
        let pending = read.take();
        async move {
            match pending {
                Some(read) => read.await,
                None => None,
            }
        }
    })
    .await;

    let Some(candidate) = candidate else {
        return false;
    };
    let image = prepare_preview(candidate).await.unwrap();
    let applied = state.lock().unwrap().finish_intake(ticket, image);
    applied
}

fn selected_name(state: &Shared) -> Option<String> {
    state
        .lock()
        .unwrap()
        .image()
        .map(|img| img.file_name.clone())
}

// ============================================================================
// Ordering
// ============================================================================

#[tokio::test]
async fn test_slow_paste_started_first_loses_to_later_drop() {
    let state: Shared = Arc::new(Mutex::new(UploaderState::new()));
    let (release_paste, paste_ready) = oneshot::channel::<()>();

    // Ctrl+V: ticket taken before the clipboard read begins
    let paste_ticket = state.lock().unwrap().begin_intake(IntakeSource::Paste);
    let paste = tokio::spawn(run_intake(state.clone(), paste_ticket, "pasted.png", async {
        paste_ready.await.ok()?;
        Some(PNG_MAGIC.to_vec())
    }));

    // Drop of a small file, read immediately
    let drop_ticket = state.lock().unwrap().begin_intake(IntakeSource::Drop);
    let dropped = run_intake(state.clone(), drop_ticket, "/tmp/small.png", async {
        Some(PNG_MAGIC.to_vec())
    })
    .await;
    assert!(dropped);

    release_paste.send(()).unwrap();
    assert!(!paste.await.unwrap(), "earlier paste must be dropped");

    assert_eq!(selected_name(&state), Some("small.png".to_string()));
}

#[tokio::test]
async fn test_later_non_image_does_not_cancel_pending_pick() {
    let state: Shared = Arc::new(Mutex::new(UploaderState::new()));
    let (release_pick, pick_ready) = oneshot::channel::<()>();

    let pick_ticket = state.lock().unwrap().begin_intake(IntakeSource::Picker);
    let pick = tokio::spawn(run_intake(state.clone(), pick_ticket, "/tmp/cat.png", async {
        pick_ready.await.ok()?;
        Some(PNG_MAGIC.to_vec())
    }));

    // A text file dropped meanwhile is ignored
    let drop_ticket = state.lock().unwrap().begin_intake(IntakeSource::Drop);
    let dropped = run_intake(state.clone(), drop_ticket, "/tmp/notes.txt", async {
        Some(b"hello".to_vec())
    })
    .await;
    assert!(!dropped);
    assert!(selected_name(&state).is_none());

    release_pick.send(()).unwrap();
    assert!(pick.await.unwrap());

    assert_eq!(selected_name(&state), Some("cat.png".to_string()));
}

#[tokio::test]
async fn test_clear_drops_pending_intake() {
    let state: Shared = Arc::new(Mutex::new(UploaderState::new()));
    let (release, ready) = oneshot::channel::<()>();

    let ticket = state.lock().unwrap().begin_intake(IntakeSource::Drop);
    let pending = tokio::spawn(run_intake(state.clone(), ticket, "big.png", async {
        ready.await.ok()?;
        Some(PNG_MAGIC.to_vec())
    }));

    state.lock().unwrap().clear();
    release.send(()).unwrap();

    assert!(!pending.await.unwrap());
    assert!(selected_name(&state).is_none());
}
