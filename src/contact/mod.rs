//! src/contact/mod.rs

mod message;
mod outcome;
mod policy;
mod service;

pub use message::{HtmlBody, TextBody};
pub use outcome::{Notification, SubmissionResult};
pub use policy::{DeliveryPolicy, SenderPolicy};
pub use service::ContactService;
