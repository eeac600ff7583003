//! src/startup.rs

use crate::configuration::Settings;
use crate::contact::ContactService;
use crate::routes::{contact_form, health_check, submit_contact_form, submit_inquiry};
use actix_web::cookie::Key;
use actix_web::{dev::Server, web, web::Data, App, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use anyhow::Context;
use secrecy::{ExposeSecret, Secret};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/// Holds the newly built server and its port
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let contact_service = ContactService::from_settings(&configuration)?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind to {}.", address))?;
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            contact_service,
            configuration.application.hmac_secret,
        )?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    contact_service: ContactService,
    hmac_secret: Secret<String>,
) -> Result<Server, anyhow::Error> {
    // the service is shared by all workers
    let contact_service = Data::new(contact_service);
    let secret_key = Key::try_from(hmac_secret.expose_secret().as_bytes())
        .context("The HMAC secret must be at least 64 bytes long.")?;
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/contact", web::get().to(contact_form))
            .route("/contact", web::post().to(submit_contact_form))
            .route("/api/contact", web::post().to(submit_inquiry))
            .app_data(contact_service.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
