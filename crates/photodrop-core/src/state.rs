//! View state and its transitions.
//!
//! Every mutation the uploader view performs goes through a named method on
//! [`UploaderState`]. The view only reads fields through the accessors.

use std::fmt;

use tracing::{debug, info};

use crate::error::SendFailure;
use crate::intake::{IntakeSource, IntakeTicket};
use crate::photo::SelectedImage;
use crate::submit::Delivered;
use crate::telegram::{redact_token, PhotoRequest};

/// Shown after Telegram accepted the photo.
pub const SUCCESS_MESSAGE: &str = "✅ Image sent successfully to Telegram!";

/// Outcome of the last submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusMessage {
    #[default]
    Empty,
    Success(String),
    Failure(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Empty => "",
            StatusMessage::Success(text) | StatusMessage::Failure(text) => text,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, StatusMessage::Empty)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StatusMessage::Success(_))
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Why `begin_submission` did not start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A request is already in flight
    Busy,
    /// Image, token or channel missing; the status message says so
    MissingInput,
}

/// Local state of the uploader view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploaderState {
    image: Option<SelectedImage>,
    dragging: bool,
    loading: bool,
    message: StatusMessage,
    bot_token: String,
    channel_id: String,
    /// Last issued intake ticket
    intake_seq: u64,
    /// Tickets at or below this can no longer install an image
    installed_seq: u64,
}

impl UploaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn message(&self) -> &StatusMessage {
        &self.message
    }

    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Whether the send control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.loading && self.image.is_some() && self.credentials_present()
    }

    fn credentials_present(&self) -> bool {
        !self.bot_token.trim().is_empty() && !self.channel_id.trim().is_empty()
    }

    pub fn set_bot_token(&mut self, token: impl Into<String>) {
        self.bot_token = token.into();
    }

    pub fn set_channel_id(&mut self, channel_id: impl Into<String>) {
        self.channel_id = channel_id.into();
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Start an intake and get the ticket its result must present.
    ///
    /// Call it when the user acts, before the source is read. A ticket that
    /// never finishes (no image found, read failed) has no effect.
    pub fn begin_intake(&mut self, source: IntakeSource) -> IntakeTicket {
        self.intake_seq += 1;
        debug!(seq = self.intake_seq, %source, "intake started");
        IntakeTicket(self.intake_seq)
    }

    /// Install a decoded image unless a later intake already installed one
    /// or the view was cleared after `ticket` was issued.
    ///
    /// Returns `false` when the result is stale and was dropped.
    pub fn finish_intake(&mut self, ticket: IntakeTicket, image: SelectedImage) -> bool {
        if ticket.0 <= self.installed_seq {
            debug!(
                seq = ticket.0,
                installed = self.installed_seq,
                "dropping stale intake result"
            );
            return false;
        }

        info!(
            file = %image.file_name,
            media_type = %image.media_type,
            bytes = image.len(),
            "image selected"
        );
        self.image = Some(image);
        self.installed_seq = ticket.0;
        true
    }

    /// Reset image and message; pending intakes are invalidated too.
    pub fn clear(&mut self) {
        self.image = None;
        self.message = StatusMessage::Empty;
        self.installed_seq = self.intake_seq;
    }

    /// `Idle → Sending`. On success the caller owns the request and must
    /// report back through [`finish_submission`](Self::finish_submission).
    pub fn begin_submission(&mut self) -> Result<PhotoRequest, SubmitBlocked> {
        if self.loading {
            debug!("submission already in flight, ignoring trigger");
            return Err(SubmitBlocked::Busy);
        }

        let photo = match (&self.image, self.credentials_present()) {
            (Some(image), true) => image.clone(),
            _ => {
                debug!(
                    has_image = self.image.is_some(),
                    has_token = !self.bot_token.trim().is_empty(),
                    has_channel = !self.channel_id.trim().is_empty(),
                    "submission missing input"
                );
                self.message = StatusMessage::Failure(SendFailure::MissingInput.user_message());
                return Err(SubmitBlocked::MissingInput);
            }
        };

        let request = PhotoRequest {
            bot_token: self.bot_token.trim().to_string(),
            chat_id: self.channel_id.trim().to_string(),
            photo,
        };

        info!(
            bot = %redact_token(&request.bot_token),
            chat_id = %request.chat_id,
            "sending photo"
        );
        self.loading = true;
        self.message = StatusMessage::Empty;
        Ok(request)
    }

    /// `Sending → Idle`. Always clears the busy flag.
    pub fn finish_submission(&mut self, outcome: &Result<Delivered, SendFailure>) {
        self.loading = false;

        match outcome {
            Ok(delivered) => {
                info!(chat_id = %delivered.chat_id, "photo delivered");
                self.message = StatusMessage::Success(SUCCESS_MESSAGE.to_string());
                self.image = None;
            }
            Err(failure) => {
                info!("photo not delivered: {}", failure);
                self.message = StatusMessage::Failure(failure.user_message());
            }
        }
    }
}
