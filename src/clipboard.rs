//! System clipboard access for image paste.

use photodrop_core::error::{IntakeError, IntakeResult};
use photodrop_core::ImageCandidate;

/// Read an image from the system clipboard.
///
/// `Ok(None)` when the clipboard holds something other than an image, which
/// a paste silently ignores.
pub fn read_image() -> IntakeResult<Option<ImageCandidate>> {
    // Use arboard for cross-platform clipboard access
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| IntakeError::Clipboard(e.to_string()))?;

    let data = match clipboard.get_image() {
        Ok(data) => data,
        Err(arboard::Error::ContentNotAvailable) => return Ok(None),
        Err(e) => return Err(IntakeError::Clipboard(e.to_string())),
    };

    let (width, height) = dimensions(data.width, data.height)?;
    let candidate = ImageCandidate::from_rgba(width, height, data.bytes.into_owned())?;
    Ok(Some(candidate))
}

fn dimensions(width: usize, height: usize) -> IntakeResult<(u32, u32)> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(IntakeError::Clipboard(format!(
            "image of {}x{} is too large",
            width, height
        ))),
    }
}
