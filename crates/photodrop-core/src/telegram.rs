//! Telegram Bot API transport.
//!
//! One call only: `sendPhoto` with a multipart body.
//! Docs: <https://core.telegram.org/bots/api#sendphoto>

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::UploaderConfig;
use crate::error::TransportError;
use crate::photo::SelectedImage;

/// Everything needed for one `sendPhoto` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRequest {
    pub bot_token: String,
    pub chat_id: String,
    pub photo: SelectedImage,
}

/// The envelope every Bot API method answers with.
///
/// A body without `ok` does not deserialize and counts as a transport failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiReply {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
}

/// Seam between submission logic and the network.
#[async_trait]
pub trait PhotoTransport: Send + Sync {
    async fn send_photo(&self, request: &PhotoRequest) -> Result<ApiReply, TransportError>;
}

/// Keep the bot id, hide the secret half of a token.
pub fn redact_token(token: &str) -> String {
    match token.split_once(':') {
        Some((bot_id, _)) if !bot_id.is_empty() => format!("{}:***", bot_id),
        _ => "***".to_string(),
    }
}

/// `reqwest`-backed Bot API client.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: reqwest::Client,
    api_base: String,
}

impl TelegramClient {
    pub fn new(config: &UploaderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.clone(),
        }
    }

    /// `sendPhoto` URL for a token.
    pub fn endpoint(&self, bot_token: &str) -> String {
        format!("{}/bot{}/sendPhoto", self.api_base, bot_token)
    }
}

impl Default for TelegramClient {
    fn default() -> Self {
        Self::new(&UploaderConfig::default())
    }
}

#[async_trait]
impl PhotoTransport for TelegramClient {
    async fn send_photo(&self, request: &PhotoRequest) -> Result<ApiReply, TransportError> {
        let url = self.endpoint(&request.bot_token);

        let part = reqwest::multipart::Part::bytes(request.photo.bytes.to_vec())
            .file_name(request.photo.file_name.clone())
            .mime_str(&request.photo.media_type)
            .map_err(|e| TransportError::InvalidMediaType(e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .text("chat_id", request.chat_id.clone())
            .part("photo", part);

        debug!(
            bot = %redact_token(&request.bot_token),
            chat_id = %request.chat_id,
            bytes = request.photo.len(),
            "telegram sendPhoto"
        );

        let resp = self.client.post(&url).multipart(form).send().await?;

        // Telegram reports API errors as 4xx with the same JSON envelope,
        // so the body is parsed whatever the status.
        let status = resp.status();
        let body = resp.text().await?;
        let reply: ApiReply = serde_json::from_str(&body).map_err(|e| {
            warn!("telegram sendPhoto returned non-API body ({status})");
            TransportError::Decode(e)
        })?;

        if !reply.ok {
            warn!(
                "telegram sendPhoto rejected ({status}): {}",
                reply.description.as_deref().unwrap_or("no description")
            );
        }

        Ok(reply)
    }
}
