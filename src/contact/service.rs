//! src/contact/service.rs

use crate::configuration::{EmailClientSettings, MissingCredentials, Settings};
use crate::contact::{DeliveryPolicy, HtmlBody, SubmissionResult, TextBody};
use crate::domain::{Inquiry, InquiryForm, ValidationError};
use crate::email_client::{DeliveryError, EmailClient, Envelope};
use crate::error::error_chain_fmt;
use anyhow::Context;
use askama::Template;
use tracing::{field::display, Span};

/// Reasons a submission attempt ends early.
#[derive(thiserror::Error)]
enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Configuration(#[from] MissingCredentials),
    #[error("failed to render the inquiry email")]
    Render(#[from] askama::Error),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Turns contact form submissions into emails for the business inbox.
///
/// The service keeps no state between calls, so one instance can serve any
/// number of concurrent submissions.
#[derive(Debug, Clone)]
pub struct ContactService {
    email_client: EmailClient,
    gateway: EmailClientSettings,
    policy: DeliveryPolicy,
}

impl ContactService {
    pub fn new(
        email_client: EmailClient,
        gateway: EmailClientSettings,
        policy: DeliveryPolicy,
    ) -> Result<Self, anyhow::Error> {
        if policy.recipients.is_empty() {
            anyhow::bail!("At least one recipient for contact inquiries must be configured.");
        }
        Ok(Self {
            email_client,
            gateway,
            policy,
        })
    }

    pub fn from_settings(configuration: &Settings) -> Result<Self, anyhow::Error> {
        let email_client = configuration
            .emailclient
            .client()
            .context("Failed to build the email client.")?;
        Self::new(
            email_client,
            configuration.emailclient.clone(),
            configuration.contact.clone(),
        )
    }

    #[tracing::instrument(
        name = "Submitting a contact inquiry",
        skip(self, form),
        fields(
            inquiry_email = %form.email,
            inquiry_name = %form.name,
            outcome = tracing::field::Empty
        )
    )]
    pub async fn submit(&self, form: InquiryForm) -> SubmissionResult {
        let result = match self.try_submit(form).await {
            Ok(()) => SubmissionResult::Success,
            Err(SubmitError::Validation(e)) => {
                tracing::warn!(error.message = %e, "Rejected an invalid inquiry.");
                SubmissionResult::ValidationError(e.to_string())
            }
            Err(SubmitError::Configuration(e)) => {
                tracing::error!(
                    missing = ?e.missing,
                    "Delivery gateway is not configured. Inquiries cannot be sent.",
                );
                SubmissionResult::ConfigurationError(e.to_string())
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to deliver an inquiry.",
                );
                SubmissionResult::DeliveryError(e.to_string())
            }
        };
        Span::current().record("outcome", &display(result.outcome()));
        result
    }

    async fn try_submit(&self, form: InquiryForm) -> Result<(), SubmitError> {
        // both checks run before the only suspension point
        let inquiry: Inquiry = form.try_into()?;
        let credentials = self.gateway.credentials()?;
        let envelope = self.compose(&inquiry, &credentials.domain)?;
        self.email_client
            .send_email(&credentials, &envelope)
            .await?;
        Ok(())
    }

    fn compose(&self, inquiry: &Inquiry, domain: &str) -> Result<Envelope, askama::Error> {
        Ok(Envelope {
            from: self.policy.sender(inquiry, domain),
            to: self.policy.recipients.clone(),
            reply_to: inquiry.email.clone(),
            subject: self.policy.subject(inquiry),
            html_body: HtmlBody::from(inquiry).render()?,
            text_body: TextBody::from(inquiry).render()?,
        })
    }
}
