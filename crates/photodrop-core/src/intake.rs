//! Image intake: source tagging and off-thread preview encoding.

use std::fmt;
use std::future::Future;

use tracing::debug;

use crate::error::{IntakeError, IntakeResult};
use crate::photo::{base_name, may_be_image_name, ImageCandidate, SelectedImage};

/// Where a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeSource {
    /// Files dropped onto the drop zone
    Drop,
    /// Clipboard paste
    Paste,
    /// Native file picker
    Picker,
    /// Path given on the command line
    Path,
}

impl fmt::Display for IntakeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntakeSource::Drop => "drop",
            IntakeSource::Paste => "paste",
            IntakeSource::Picker => "picker",
            IntakeSource::Path => "path",
        };
        f.write_str(name)
    }
}

/// Sequence number of one intake operation.
///
/// Issued by [`crate::UploaderState::begin_intake`]; only the most recently
/// issued ticket may install its image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntakeTicket(pub(crate) u64);

impl IntakeTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// First file among `paths` that is an image.
///
/// `read` loads one path and returns `None` if it cannot. Paths whose
/// extension names a non-image type are skipped unread; paths without an
/// extension are sniffed.
pub async fn first_image_file<P, R, Fut>(paths: P, mut read: R) -> Option<ImageCandidate>
where
    P: IntoIterator<Item = String>,
    R: FnMut(String) -> Fut,
    Fut: Future<Output = Option<Vec<u8>>>,
{
    for path in paths {
        if !may_be_image_name(&path) {
            debug!("Ignoring non-image file {}", path);
            continue;
        }

        let name = base_name(&path).to_string();
        let Some(bytes) = read(path).await else {
            debug!("Could not read {}", name);
            continue;
        };

        let candidate = ImageCandidate::from_named_bytes(name, bytes);
        if candidate.is_image() {
            return Some(candidate);
        }
    }

    None
}

/// Encode the preview for a candidate on the blocking pool.
pub async fn prepare_preview(candidate: ImageCandidate) -> IntakeResult<SelectedImage> {
    tokio::task::spawn_blocking(move || SelectedImage::from_candidate(candidate))
        .await
        .map_err(|e| IntakeError::Task(e.to_string()))?
}
