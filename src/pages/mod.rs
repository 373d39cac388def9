//! Page components for Photodrop.

mod uploader;

pub use uploader::Uploader;
