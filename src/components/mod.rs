//! UI Components for Photodrop.

mod credentials_form;
mod drop_zone;
mod instructions;
mod send_button;
mod status_banner;

pub use credentials_form::CredentialsForm;
pub use drop_zone::DropZone;
pub use instructions::Instructions;
pub use send_button::SendButton;
pub use status_banner::{banner_class, StatusBanner};
