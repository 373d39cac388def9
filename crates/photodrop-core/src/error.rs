//! Error types for Photodrop

use thiserror::Error;

/// Shown when a submission is attempted without an image, token or channel.
pub const MISSING_INPUT_MESSAGE: &str = "Please provide image, bot token, and channel ID";

/// Fallback when Telegram rejects a photo without saying why.
pub const REJECTED_FALLBACK: &str = "Failed to send image";

/// Shown for any failure of the HTTP exchange itself.
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Failed to send image. Please check your bot token and channel ID.";

/// Failure of a single `sendPhoto` exchange below the API level.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection, TLS or body read failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The photo's media type could not be attached to the multipart part
    #[error("Invalid media type: {0}")]
    InvalidMediaType(String),

    /// Response body was not a Bot API reply
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure to turn a file or clipboard content into a selectable image.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// Reading the source failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Clipboard was unavailable or held no image
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Raw pixels could not be encoded
    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),

    /// The candidate was not an image
    #[error("Not an image: {0}")]
    NotAnImage(String),

    /// The preview encoder task did not complete
    #[error("Preview task failed: {0}")]
    Task(String),
}

/// Typed reason a submission attempt did not deliver the photo.
#[derive(Error, Debug)]
pub enum SendFailure {
    /// Image, token or channel absent; no request was made
    #[error("missing input")]
    MissingInput,

    /// Telegram answered with `ok: false`
    #[error("rejected by Telegram: {}", .description.as_deref().unwrap_or("no description"))]
    Rejected { description: Option<String> },

    /// The request did not produce a usable reply
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
}

impl SendFailure {
    /// Status text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            SendFailure::MissingInput => MISSING_INPUT_MESSAGE.to_string(),
            SendFailure::Rejected { description } => {
                let reason = description
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .unwrap_or(REJECTED_FALLBACK);
                format!("❌ Error: {}", reason)
            }
            SendFailure::Transport(_) => format!("❌ Error: {}", TRANSPORT_FAILURE_MESSAGE),
        }
    }
}

/// Result type alias using IntakeError
pub type IntakeResult<T> = Result<T, IntakeError>;
