//! Loan application lifecycle: intake, review workflow, search and reporting

mod model;
mod service;

pub use model::*;
pub use service::ApplicationService;
