//! Runtime configuration.
//!
//! Built from command-line flags at startup and held in memory only.

use image::ImageFormat;

use crate::photo::is_image_media_type;

/// Public Telegram Bot API host
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Extensions offered by the file picker.
///
/// The same format table that maps dropped file names to `image/*`.
pub fn picker_extensions() -> Vec<&'static str> {
    ImageFormat::all()
        .filter(|format| is_image_media_type(format.to_mime_type()))
        .flat_map(|format| format.extensions_str())
        .copied()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploaderConfig {
    /// Scheme and host of the Bot API, without trailing slash
    pub api_base: String,
}

impl UploaderConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Build from an optional override, falling back to the public host.
    pub fn from_override(api_base: Option<String>) -> Self {
        api_base.map(Self::new).unwrap_or_default()
    }
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
