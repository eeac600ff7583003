//! src/routes/contact/mod.rs

mod api;
mod get;
mod post;

pub use api::*;
pub use get::contact_form;
pub use post::*;
