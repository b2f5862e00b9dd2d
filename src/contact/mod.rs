//! Contact message inbox: inbound messages with a read/unread flag

mod model;
mod service;

pub use model::*;
pub use service::ContactService;
