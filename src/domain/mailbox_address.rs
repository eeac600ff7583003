//! src/domain/mailbox_address.rs

use crate::domain::ValidationError;
use validator::ValidateEmail;

/// Operator-configured address, e.g. the business inbox receiving inquiries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailboxAddress(String);

impl MailboxAddress {
    pub fn parse(s: String) -> Result<MailboxAddress, ValidationError> {
        if s.validate_email() {
            Ok(Self(s))
        } else {
            Err(ValidationError::InvalidMailbox(s))
        }
    }
}

impl AsRef<str> for MailboxAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MailboxAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl<'de> serde::Deserialize<'de> for MailboxAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(s).map_err(serde::de::Error::custom)
    }
}
