//! Submission Tests
//!
//! Drive `UploaderState` through whole attempts against mocked transports.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use photodrop_core::{
    submit, ApiReply, ImageCandidate, IntakeSource, PhotoRequest, PhotoTransport,
    SelectedImage, SendFailure, StatusMessage, SubmitBlocked, TransportError, UploaderState,
};

// ============================================================================
// Test Utilities
// ============================================================================

enum Behaviour {
    Reply(ApiReply),
    MalformedBody,
}

/// Transport that records every request and answers with a fixed behaviour
struct MockTransport {
    behaviour: Behaviour,
    calls: AtomicUsize,
    last_request: Mutex<Option<PhotoRequest>>,
}

impl MockTransport {
    fn replying(ok: bool, description: Option<&str>) -> Self {
        Self::new(Behaviour::Reply(ApiReply {
            ok,
            description: description.map(str::to_string),
            error_code: None,
        }))
    }

    fn failing() -> Self {
        Self::new(Behaviour::MalformedBody)
    }

    fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PhotoTransport for MockTransport {
    async fn send_photo(&self, request: &PhotoRequest) -> Result<ApiReply, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        match &self.behaviour {
            Behaviour::Reply(reply) => Ok(reply.clone()),
            Behaviour::MalformedBody => {
                let err = serde_json::from_str::<ApiReply>("<html>Bad Gateway</html>").unwrap_err();
                Err(TransportError::Decode(err))
            }
        }
    }
}

fn sample_image() -> SelectedImage {
    let candidate = ImageCandidate::new("cat.png", "image/png", b"\x89PNG\r\n\x1a\n".to_vec());
    SelectedImage::from_candidate(candidate).unwrap()
}

fn state_with(image: bool, token: &str, channel: &str) -> UploaderState {
    let mut state = UploaderState::new();
    state.set_bot_token(token);
    state.set_channel_id(channel);
    if image {
        let ticket = state.begin_intake(IntakeSource::Drop);
        assert!(state.finish_intake(ticket, sample_image()));
    }
    state
}

// ============================================================================
// Missing Input
// ============================================================================

#[tokio::test]
async fn test_missing_input_never_calls_transport() {
    let cases = [
        (false, "123:abc", "@channel"),
        (true, "", "@channel"),
        (true, "123:abc", ""),
        (false, "", ""),
    ];

    for (has_image, token, channel) in cases {
        let transport = MockTransport::replying(true, None);
        let mut state = state_with(has_image, token, channel);

        let outcome = submit(&mut state, &transport).await;

        assert!(matches!(outcome, Some(Err(SendFailure::MissingInput))));
        assert_eq!(transport.calls(), 0);
        assert!(matches!(state.message(), StatusMessage::Failure(_)));
        assert_eq!(
            state.message().text(),
            "Please provide image, bot token, and channel ID"
        );
        assert!(!state.is_loading());
    }
}

// ============================================================================
// API Replies
// ============================================================================

#[tokio::test]
async fn test_ok_reply_clears_image_and_reports_success() {
    let transport = MockTransport::replying(true, None);
    let mut state = state_with(true, "123:abc", "@channel");

    let outcome = submit(&mut state, &transport).await;

    assert!(matches!(outcome, Some(Ok(_))));
    assert_eq!(transport.calls(), 1);
    assert!(state.image().is_none());
    assert!(state.message().is_success());
    assert!(state.message().text().contains('✅'));
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_request_carries_photo_and_channel() {
    let transport = MockTransport::replying(true, None);
    let mut state = state_with(true, "123:abc", "@channel");

    submit(&mut state, &transport).await;

    let request = transport.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request.bot_token, "123:abc");
    assert_eq!(request.chat_id, "@channel");
    assert_eq!(request.photo.file_name, "cat.png");
    assert_eq!(request.photo.media_type, "image/png");
}

#[tokio::test]
async fn test_rejection_shows_server_description() {
    let transport = MockTransport::replying(false, Some("bad token"));
    let mut state = state_with(true, "123:abc", "@channel");

    let outcome = submit(&mut state, &transport).await;

    assert!(matches!(
        outcome,
        Some(Err(SendFailure::Rejected { description: Some(_) }))
    ));
    assert!(state.message().text().contains("bad token"));
    assert!(!state.message().is_success());
    assert!(state.image().is_some(), "failed send keeps the image");
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_rejection_without_description_uses_fallback() {
    let transport = MockTransport::replying(false, None);
    let mut state = state_with(true, "123:abc", "@channel");

    submit(&mut state, &transport).await;

    assert_eq!(state.message().text(), "❌ Error: Failed to send image");
}

#[tokio::test]
async fn test_transport_failure_is_generic_and_clears_busy() {
    let transport = MockTransport::failing();
    let mut state = state_with(true, "123:abc", "@channel");

    let outcome = submit(&mut state, &transport).await;

    assert!(matches!(outcome, Some(Err(SendFailure::Transport(_)))));
    assert_eq!(
        state.message().text(),
        "❌ Error: Failed to send image. Please check your bot token and channel ID."
    );
    assert!(!state.is_loading());
    assert!(state.image().is_some());
}

// ============================================================================
// Busy Gate
// ============================================================================

#[tokio::test]
async fn test_retrigger_while_busy_is_noop() {
    let transport = MockTransport::replying(true, None);
    let mut state = state_with(true, "123:abc", "@channel");

    let request = state.begin_submission().expect("first trigger starts");
    assert!(state.is_loading());
    assert!(state.message().is_empty());

    assert_eq!(state.begin_submission(), Err(SubmitBlocked::Busy));
    assert!(submit(&mut state, &transport).await.is_none());
    assert_eq!(transport.calls(), 0);

    let outcome = photodrop_core::deliver(&transport, &request).await;
    state.finish_submission(&outcome);

    assert_eq!(transport.calls(), 1);
    assert!(!state.is_loading());
    assert!(state.message().is_success());
}

#[tokio::test]
async fn test_new_attempt_overwrites_message() {
    let failing = MockTransport::replying(false, Some("chat not found"));
    let mut state = state_with(true, "123:abc", "@channel");
    submit(&mut state, &failing).await;
    assert!(state.message().text().contains("chat not found"));

    let ok = MockTransport::replying(true, None);
    submit(&mut state, &ok).await;
    assert!(state.message().is_success());
}

// ============================================================================
// Clear
// ============================================================================

#[tokio::test]
async fn test_clear_resets_from_any_state() {
    // After a failure
    let transport = MockTransport::replying(false, Some("bad token"));
    let mut state = state_with(true, "123:abc", "@channel");
    submit(&mut state, &transport).await;
    state.clear();
    assert!(state.image().is_none());
    assert!(state.message().is_empty());

    // After a success
    let transport = MockTransport::replying(true, None);
    let mut state = state_with(true, "123:abc", "@channel");
    submit(&mut state, &transport).await;
    state.clear();
    assert!(state.image().is_none());
    assert!(state.message().is_empty());

    // Fresh state
    let mut state = UploaderState::new();
    state.clear();
    assert!(state.image().is_none());
    assert!(state.message().is_empty());
}

#[test]
fn test_clear_keeps_credentials() {
    let mut state = state_with(true, "123:abc", "@channel");
    state.clear();
    assert_eq!(state.bot_token(), "123:abc");
    assert_eq!(state.channel_id(), "@channel");
}
