//! Visual theme for Photodrop.

mod styles;

pub use styles::GLOBAL_STYLES;
