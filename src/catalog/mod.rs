//! Loan product catalog: the terms offered for each loan type

mod model;
mod service;

pub use model::*;
pub use service::CatalogService;
