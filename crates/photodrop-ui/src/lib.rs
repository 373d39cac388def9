//! Photodrop UI Components
//!
//! Small Dioxus building blocks shared by the uploader view. Styling lives in
//! the desktop binary's global stylesheet; components only emit class names.

pub mod components;

pub use components::*;
