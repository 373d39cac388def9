//! Image candidates and the selected image.
//!
//! A candidate is whatever an intake source handed us: a dropped file, a
//! picked file or pasted clipboard pixels. Only candidates whose media type
//! starts with `image/` can become the [`SelectedImage`].

use std::fmt;
use std::path::Path;

use base64::Engine;
use bytes::Bytes;
use image::{ImageFormat, RgbaImage};

use crate::error::{IntakeError, IntakeResult};

/// Media type used when neither the name nor the content identify the file
pub const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// File name given to clipboard images
pub const PASTED_FILE_NAME: &str = "pasted.png";

/// Resolve a media type from a file name's extension.
///
/// Uses the `image` crate's format table, so every extension it knows maps to
/// an `image/*` type. Returns `None` for unknown or missing extensions.
pub fn media_type_for_name(name: &str) -> Option<&'static str> {
    let ext = Path::new(name).extension()?;
    ImageFormat::from_extension(ext).map(|format| format.to_mime_type())
}

/// Resolve a media type by sniffing the leading bytes.
pub fn media_type_for_content(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes)
        .ok()
        .map(|format| format.to_mime_type())
}

/// Whether a file name could still turn out to be an image.
///
/// False only when the extension is present and names no image format, so
/// the file can be skipped without reading it.
pub fn may_be_image_name(name: &str) -> bool {
    Path::new(name).extension().is_none()
        || media_type_for_name(name).is_some_and(is_image_media_type)
}

/// Last path component of `path`, or `path` itself.
pub fn base_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

/// Whether a media type denotes an image.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// Build a `data:` URI for inline preview.
pub fn encode_data_uri(media_type: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", media_type, encoded)
}

/// One item offered by an intake source.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Bytes,
}

impl ImageCandidate {
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Create a candidate whose media type is resolved from the name, falling
    /// back to sniffing the content.
    pub fn from_named_bytes(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let file_name: String = file_name.into();
        let bytes: Bytes = bytes.into();
        let media_type = media_type_for_name(&file_name)
            .or_else(|| media_type_for_content(&bytes))
            .unwrap_or(UNKNOWN_MEDIA_TYPE);
        Self::new(file_name, media_type, bytes)
    }

    /// Read a file from disk into a candidate.
    pub fn from_path(path: &Path) -> IntakeResult<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("photo")
            .to_string();
        Ok(Self::from_named_bytes(file_name, bytes))
    }

    /// Encode raw RGBA clipboard pixels as a PNG candidate.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> IntakeResult<Self> {
        let buffer = RgbaImage::from_raw(width, height, rgba).ok_or_else(|| {
            IntakeError::Clipboard(format!(
                "pixel buffer does not match {}x{} RGBA",
                width, height
            ))
        })?;

        let mut png = Vec::new();
        buffer.write_to(&mut std::io::Cursor::new(&mut png), ImageFormat::Png)?;

        Ok(Self::new(PASTED_FILE_NAME, "image/png", png))
    }

    /// Accepted candidates are non-empty `image/*` items.
    pub fn is_image(&self) -> bool {
        is_image_media_type(&self.media_type) && !self.bytes.is_empty()
    }
}

impl fmt::Debug for ImageCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageCandidate")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Pick the first candidate that is an image; everything else is ignored.
pub fn first_image<I>(candidates: I) -> Option<ImageCandidate>
where
    I: IntoIterator<Item = ImageCandidate>,
{
    candidates.into_iter().find(ImageCandidate::is_image)
}

/// The image currently held by the view, ready to preview and send.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Bytes,
    /// `data:` URI of `bytes`
    pub preview: String,
}

impl SelectedImage {
    /// Encode a candidate's preview. CPU bound on large files.
    pub fn from_candidate(candidate: ImageCandidate) -> IntakeResult<Self> {
        if !candidate.is_image() {
            return Err(IntakeError::NotAnImage(candidate.media_type));
        }

        let preview = encode_data_uri(&candidate.media_type, &candidate.bytes);
        Ok(Self {
            file_name: candidate.file_name,
            media_type: candidate.media_type,
            bytes: candidate.bytes,
            preview,
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedImage")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
