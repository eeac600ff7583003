//! src/contact/message.rs

use crate::domain::Inquiry;
use askama::Template;

/// HTML rendering of an inquiry. Every field is escaped by the template engine.
#[derive(Template)]
#[template(path = "inquiry_email.html")]
pub struct HtmlBody<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// Plain text rendering of an inquiry, fields interpolated as typed.
#[derive(Template)]
#[template(path = "inquiry_email.txt")]
pub struct TextBody<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

impl<'a> From<&'a Inquiry> for HtmlBody<'a> {
    fn from(inquiry: &'a Inquiry) -> Self {
        Self {
            name: inquiry.name.as_ref(),
            email: inquiry.email.as_ref(),
            subject: inquiry.subject.as_ref(),
            message: inquiry.message.as_ref(),
        }
    }
}

impl<'a> From<&'a Inquiry> for TextBody<'a> {
    fn from(inquiry: &'a Inquiry) -> Self {
        Self {
            name: inquiry.name.as_ref(),
            email: inquiry.email.as_ref(),
            subject: inquiry.subject.as_ref(),
            message: inquiry.message.as_ref(),
        }
    }
}
