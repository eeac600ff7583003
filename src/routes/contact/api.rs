//! src/routes/contact/api.rs

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

use crate::contact::{ContactService, SubmissionResult};
use crate::domain::InquiryForm;

fn status_code(result: &SubmissionResult) -> StatusCode {
    match result {
        SubmissionResult::Success => StatusCode::OK,
        SubmissionResult::ValidationError(_) => StatusCode::BAD_REQUEST,
        SubmissionResult::ConfigurationError(_) => StatusCode::SERVICE_UNAVAILABLE,
        SubmissionResult::DeliveryError(_) => StatusCode::BAD_GATEWAY,
    }
}

/// JSON endpoint for script driven forms; answers with the notification to display.
#[tracing::instrument(name = "Receiving an inquiry via the API.", skip(inquiry, contact_service))]
pub async fn submit_inquiry(
    inquiry: web::Json<InquiryForm>,
    contact_service: web::Data<ContactService>,
) -> HttpResponse {
    let result = contact_service.submit(inquiry.0).await;
    HttpResponse::build(status_code(&result)).json(result.notification())
}
