//! src/domain/mod.rs

mod inquiry;
mod inquiry_email;
mod inquiry_text;
mod mailbox_address;

pub use inquiry::{Inquiry, InquiryForm};
pub use inquiry_email::InquiryEmail;
pub use inquiry_text::{InquiryMessage, InquiryName, InquirySubject};
pub use mailbox_address::MailboxAddress;

/// Validation error for domain data
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid email")]
    InvalidEmail(String),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("`{0}` is not a valid mailbox address.")]
    InvalidMailbox(String),
}
