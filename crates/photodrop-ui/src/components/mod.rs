//! Reusable form components.

mod button;
mod input;

pub use button::{Button, ButtonVariant, Spinner};
pub use input::{Input, InputKind};
