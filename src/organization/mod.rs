//! Organization profile: a singleton record created on first read

mod model;
mod service;

pub use model::*;
pub use service::OrganizationService;
