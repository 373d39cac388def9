//! Uploader context for Photodrop.
//!
//! Provides the view state and the Telegram transport to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut state = use_uploader();
//! let transport = use_transport();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use photodrop_core::{PhotoTransport, UploaderConfig, UploaderState};

/// Shared transport type for context.
///
/// A trait object so the view never names the HTTP client directly.
pub type SharedTransport = Arc<dyn PhotoTransport>;

/// Get the uploader configuration set from command line args.
pub fn get_config() -> UploaderConfig {
    crate::get_config()
}

/// Hook to access the uploader state.
///
/// All mutation goes through `UploaderState`'s transitions:
///
/// ```ignore
/// let mut state = use_uploader();
/// state.write().set_dragging(true);
/// ```
pub fn use_uploader() -> Signal<UploaderState> {
    use_context::<Signal<UploaderState>>()
}

/// Hook to access the transport used for submissions.
pub fn use_transport() -> SharedTransport {
    use_context::<SharedTransport>()
}
