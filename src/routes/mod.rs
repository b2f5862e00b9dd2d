//! Route definitions for the RS Finance Service API

mod admin;
mod public;

pub use admin::admin_routes;
pub use public::public_routes;
