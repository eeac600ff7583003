//! src/contact/policy.rs

use crate::domain::{Inquiry, MailboxAddress};

/// Address the inquiry email is sent from.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SenderPolicy {
    /// `<display_name> <no-reply@<sending domain>>`
    NoReply { display_name: String },
    /// The submitter's own address.
    Submitter,
}

/// Deployment-specific routing of inquiries.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct DeliveryPolicy {
    pub sender: SenderPolicy,
    pub recipients: Vec<MailboxAddress>,
    #[serde(default)]
    pub subject_prefix: Option<String>,
}

impl DeliveryPolicy {
    pub fn sender(&self, inquiry: &Inquiry, domain: &str) -> String {
        match &self.sender {
            SenderPolicy::NoReply { display_name } => {
                format!("{} <no-reply@{}>", display_name, domain)
            }
            SenderPolicy::Submitter => inquiry.email.to_string(),
        }
    }

    pub fn subject(&self, inquiry: &Inquiry) -> String {
        match self.subject_prefix.as_deref().map(str::trim) {
            Some(prefix) if !prefix.is_empty() => {
                format!("[{}] {}", prefix, inquiry.subject.as_ref())
            }
            _ => inquiry.subject.as_ref().to_owned(),
        }
    }
}
