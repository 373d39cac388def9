//! Photodrop Core Library
//!
//! Pick, drop or paste an image and post it to a Telegram channel.
//!
//! ## Overview
//!
//! The crate holds everything behind the uploader view that does not need a
//! window:
//!
//! - **Intake**: turn dropped, picked or pasted data into a [`SelectedImage`]
//!   with a `data:` URI preview
//! - **State**: [`UploaderState`], the view's local state with its named
//!   transitions
//! - **Submission**: one multipart `sendPhoto` call through a
//!   [`PhotoTransport`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use photodrop_core::{submit, ImageCandidate, IntakeSource, TelegramClient, UploaderState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut state = UploaderState::new();
//!     state.set_bot_token("123456:AAE...");
//!     state.set_channel_id("@mychannel");
//!
//!     let candidate = ImageCandidate::from_path("cat.png".as_ref())?;
//!     let ticket = state.begin_intake(IntakeSource::Path);
//!     let image = photodrop_core::prepare_preview(candidate).await?;
//!     state.finish_intake(ticket, image);
//!
//!     let client = TelegramClient::default();
//!     submit(&mut state, &client).await;
//!     println!("{}", state.message());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod intake;
pub mod photo;
pub mod state;
pub mod submit;
pub mod telegram;

// Re-exports
pub use config::{picker_extensions, UploaderConfig, DEFAULT_API_BASE};
pub use error::{IntakeError, SendFailure, TransportError};
pub use intake::{first_image_file, prepare_preview, IntakeSource, IntakeTicket};
pub use photo::{
    base_name, first_image, may_be_image_name, media_type_for_name, ImageCandidate, SelectedImage,
};
pub use state::{StatusMessage, SubmitBlocked, UploaderState, SUCCESS_MESSAGE};
pub use submit::{deliver, submit, Delivered};
pub use telegram::{redact_token, ApiReply, PhotoRequest, PhotoTransport, TelegramClient};
