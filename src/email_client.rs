//! src/email_client.rs

use crate::domain::{InquiryEmail, MailboxAddress};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

/// Credentials of the delivery gateway account used for one dispatch.
#[derive(Debug, Clone)]
pub struct GatewayCredentials {
    pub api_key: Secret<String>,
    pub domain: String,
}

/// A fully rendered message, ready to be handed to the gateway.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub from: String,
    pub to: Vec<MailboxAddress>,
    pub reply_to: InquiryEmail,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

#[derive(thiserror::Error, Debug)]
pub enum DeliveryError {
    #[error("timeout")]
    Timeout(#[source] reqwest::Error),
    #[error("failed to reach the delivery gateway: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("delivery gateway rejected the message ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

impl From<reqwest::Error> for DeliveryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            DeliveryError::Timeout(e)
        } else {
            DeliveryError::Transport(e)
        }
    }
}

/// Error payload returned by the gateway, e.g. `{"message": "Forbidden"}`.
#[derive(serde::Deserialize)]
struct GatewayFault {
    message: String,
}

/// Pick the most helpful non-empty diagnostic out of a rejected response.
fn fault_message(status: StatusCode, body: &str) -> String {
    if let Ok(fault) = serde_json::from_str::<GatewayFault>(body) {
        if !fault.message.trim().is_empty() {
            return fault.message;
        }
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_owned();
    }
    status
        .canonical_reason()
        .map(str::to_owned)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

#[derive(Debug, Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
}

impl EmailClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
        })
    }

    #[tracing::instrument(
        name = "Dispatching a message to the delivery gateway",
        skip(self, credentials, envelope),
        fields(domain = %credentials.domain, recipients = envelope.to.len())
    )]
    pub async fn send_email(
        &self,
        credentials: &GatewayCredentials,
        envelope: &Envelope,
    ) -> Result<(), DeliveryError> {
        let url = format!(
            "{}/v3/{}/messages",
            self.base_url.trim_end_matches('/'),
            credentials.domain
        );
        let mut fields: Vec<(&str, &str)> = vec![("from", envelope.from.as_str())];
        fields.extend(envelope.to.iter().map(|to| ("to", to.as_ref())));
        fields.extend([
            ("h:Reply-To", envelope.reply_to.as_ref()),
            ("subject", envelope.subject.as_str()),
            ("text", envelope.text_body.as_str()),
            ("html", envelope.html_body.as_str()),
        ]);

        let response = self
            .http_client
            .post(&url)
            .basic_auth("api", Some(credentials.api_key.expose_secret()))
            .form(&fields)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected {
            status,
            message: fault_message(status, &body),
        })
    }
}
