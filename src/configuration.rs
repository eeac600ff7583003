//! src/configuration.rs

use crate::contact::DeliveryPolicy;
use crate::email_client::{EmailClient, GatewayCredentials};
use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;

/// Name of the environment variable carrying the delivery gateway API key.
pub const API_KEY_VARIABLE: &str = "EMAIL_API_KEY";
/// Name of the environment variable carrying the sending domain.
pub const DOMAIN_VARIABLE: &str = "EMAIL_DOMAIN";

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub emailclient: EmailClientSettings,
    pub contact: DeliveryPolicy,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    pub hmac_secret: Secret<String>,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct EmailClientSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<Secret<String>>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

/// One or both gateway credentials are absent or blank.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("missing credentials")]
pub struct MissingCredentials {
    pub missing: Vec<&'static str>,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn client(&self) -> Result<EmailClient, reqwest::Error> {
        EmailClient::new(self.base_url.clone(), self.timeout())
    }

    /// Resolve API key and sending domain. Blank values count as absent.
    pub fn credentials(&self) -> Result<GatewayCredentials, MissingCredentials> {
        let api_key = self
            .api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty());
        let domain = self
            .domain
            .as_deref()
            .map(str::trim)
            .filter(|domain| !domain.is_empty());
        match (api_key, domain) {
            (Some(api_key), Some(domain)) => Ok(GatewayCredentials {
                api_key: api_key.clone(),
                domain: domain.to_owned(),
            }),
            (api_key, domain) => {
                let mut missing = Vec::new();
                if api_key.is_none() {
                    missing.push(API_KEY_VARIABLE);
                }
                if domain.is_none() {
                    missing.push(DOMAIN_VARIABLE);
                }
                Err(MissingCredentials { missing })
            }
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("Failed to determine the current directory: {e}")))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_APPLICATION__PORT=5001 would set `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        // the two gateway variables are read under their plain names
        .set_override_option("emailclient.api_key", std::env::var(API_KEY_VARIABLE).ok())?
        .set_override_option("emailclient.domain", std::env::var(DOMAIN_VARIABLE).ok())?
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for our application.
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
