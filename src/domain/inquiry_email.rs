//! src/domain/inquiry_email.rs

use crate::domain::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Address the submitter of an inquiry wants to be answered at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryEmail(String);

impl InquiryEmail {
    /// Returns an instance of `InquiryEmail` if the input looks like
    /// `local@domain.tld`. The value is kept exactly as given, so
    /// surrounding whitespace makes it invalid.
    pub fn parse(s: String) -> Result<InquiryEmail, ValidationError> {
        if EMAIL_PATTERN.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(ValidationError::InvalidEmail(s))
        }
    }
}

impl AsRef<str> for InquiryEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InquiryEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
