//! Submission: one `sendPhoto` call mapped to a typed outcome.

use crate::error::SendFailure;
use crate::state::{SubmitBlocked, UploaderState};
use crate::telegram::{PhotoRequest, PhotoTransport};

/// A photo Telegram accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivered {
    pub chat_id: String,
    pub bytes: usize,
}

/// Perform the request and fold the reply into `Delivered` or `SendFailure`.
pub async fn deliver(
    transport: &dyn PhotoTransport,
    request: &PhotoRequest,
) -> Result<Delivered, SendFailure> {
    let reply = transport.send_photo(request).await?;

    if reply.ok {
        Ok(Delivered {
            chat_id: request.chat_id.clone(),
            bytes: request.photo.len(),
        })
    } else {
        Err(SendFailure::Rejected {
            description: reply.description,
        })
    }
}

/// Run a whole attempt against `state`.
///
/// Returns `None` when a submission is already in flight; nothing happens in
/// that case. Missing input is reported as `SendFailure::MissingInput`
/// without touching the transport.
pub async fn submit(
    state: &mut UploaderState,
    transport: &dyn PhotoTransport,
) -> Option<Result<Delivered, SendFailure>> {
    let request = match state.begin_submission() {
        Ok(request) => request,
        Err(SubmitBlocked::Busy) => return None,
        Err(SubmitBlocked::MissingInput) => {
            return Some(Err(SendFailure::MissingInput));
        }
    };

    let outcome = deliver(transport, &request).await;
    state.finish_submission(&outcome);
    Some(outcome)
}
