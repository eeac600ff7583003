//! src/domain/inquiry_text.rs

use crate::domain::ValidationError;

/// Trim `s` and check that something is left.
fn parse_text(s: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_owned())
}

macro_rules! inquiry_text {
    ($(#[$doc:meta])* $name:ident, $field:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn parse(s: String) -> Result<$name, ValidationError> {
                parse_text(s, $field).map(Self)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

inquiry_text!(
    /// Display name of the person sending an inquiry.
    InquiryName,
    "name"
);
inquiry_text!(
    /// Subject line as typed into the contact form.
    InquirySubject,
    "subject"
);
inquiry_text!(
    /// Free text body of an inquiry.
    InquiryMessage,
    "message"
);
