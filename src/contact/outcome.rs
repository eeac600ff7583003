//! src/contact/outcome.rs

/// Terminal result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    /// Correctable by the submitter.
    ValidationError(String),
    /// Correctable by the operator only.
    ConfigurationError(String),
    /// Provider-side or transport fault, not retried.
    DeliveryError(String),
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success)
    }

    pub fn outcome(&self) -> &'static str {
        match self {
            SubmissionResult::Success => "success",
            SubmissionResult::ValidationError(_) => "validation_error",
            SubmissionResult::ConfigurationError(_) => "configuration_error",
            SubmissionResult::DeliveryError(_) => "delivery_error",
        }
    }

    /// User facing notification for this result.
    pub fn notification(&self) -> Notification {
        let (title, description) = match self {
            SubmissionResult::Success => (
                "Message Sent!",
                "We'll get back to you within 24 hours.".to_string(),
            ),
            SubmissionResult::ValidationError(reason) => {
                ("Please check your details", capitalize(reason))
            }
            SubmissionResult::ConfigurationError(_) => (
                "Message not sent",
                "Our contact form is temporarily unavailable. \
                Please reach us by phone or email instead."
                    .to_string(),
            ),
            SubmissionResult::DeliveryError(_) => (
                "Message not sent",
                "We could not deliver your message. \
                Please try again or contact us directly."
                    .to_string(),
            ),
        };
        Notification {
            outcome: self.outcome().to_string(),
            title: title.to_string(),
            description,
            reset_form: self.is_success(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// What the form collector shows to the user (toast or banner).
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub outcome: String,
    pub title: String,
    pub description: String,
    /// Form fields are cleared only after a successful send.
    pub reset_form: bool,
}
