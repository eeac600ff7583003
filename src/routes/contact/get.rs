//! src/routes/contact/get.rs

use actix_web::Responder;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use askama_actix::Template;

struct FlashNotification {
    level: &'static str,
    content: String,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    flash_messages: Vec<FlashNotification>,
}

pub async fn contact_form(flash_messages: IncomingFlashMessages) -> impl Responder {
    let flash_messages: Vec<FlashNotification> = flash_messages
        .iter()
        .map(|m| FlashNotification {
            level: match m.level() {
                Level::Success => "success",
                Level::Error => "error",
                _ => "info",
            },
            content: m.content().to_string(),
        })
        .collect();
    ContactTemplate { flash_messages }
}
