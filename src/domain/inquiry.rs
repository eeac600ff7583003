//! src/domain/inquiry.rs

use crate::domain::{InquiryEmail, InquiryMessage, InquiryName, InquirySubject, ValidationError};

/// Raw values as collected by the contact form.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default)]
pub struct InquiryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// An inquiry whose fields passed validation and may be dispatched.
#[derive(Debug, Clone)]
pub struct Inquiry {
    pub name: InquiryName,
    pub email: InquiryEmail,
    pub subject: InquirySubject,
    pub message: InquiryMessage,
}

impl TryFrom<InquiryForm> for Inquiry {
    type Error = ValidationError;

    fn try_from(value: InquiryForm) -> Result<Self, Self::Error> {
        // email first: an invalid address is the primary rejection reason
        let email = InquiryEmail::parse(value.email)?;
        let name = InquiryName::parse(value.name)?;
        let subject = InquirySubject::parse(value.subject)?;
        let message = InquiryMessage::parse(value.message)?;
        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }
}
