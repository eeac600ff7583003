//! src/routes/contact/post.rs

use actix_web::{web, HttpResponse};
use actix_web_flash_messages::FlashMessage;

use crate::contact::ContactService;
use crate::domain::InquiryForm;
use crate::utils::see_other;

#[tracing::instrument(name = "Receiving the contact form.", skip(form, contact_service))]
pub async fn submit_contact_form(
    form: web::Form<InquiryForm>,
    contact_service: web::Data<ContactService>,
) -> HttpResponse {
    let result = contact_service.submit(form.0).await;
    let notification = result.notification();
    let content = format!("{} {}", notification.title, notification.description);
    if result.is_success() {
        FlashMessage::success(content).send();
    } else {
        FlashMessage::error(content).send();
    }
    see_other("/contact")
}
