//! main.rs

use contact_desk::configuration::get_configuration;
use contact_desk::error::ContactResult;
use contact_desk::startup::Application;
use contact_desk::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> ContactResult<()> {
    let subscriber = get_subscriber("contact_desk".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    if let Err(e) = configuration.emailclient.credentials() {
        // not fatal: every inquiry is answered with a configuration error until fixed
        tracing::error!(
            missing = ?e.missing,
            "Delivery gateway credentials are missing."
        );
    }
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Contact service is listening.");
    application
        .run_until_stopped()
        .await
        .map_err(anyhow::Error::from)?;
    Ok(())
}
