//! Public route definitions
//!
//! Unauthenticated surface: product listing, application intake and status
//! check (projected view only), organization profile, contact form.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::*;
use crate::state::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/public/loan-types", get(list_active_loan_types))
        .route("/api/public/loan-types/:id", get(get_loan_type))
        .route("/api/public/applications", post(submit_application))
        .route(
            "/api/public/applications/:application_id",
            get(get_application_status),
        )
        .route("/api/public/organization", get(get_organization))
        .route("/api/public/contact", post(submit_contact_message))
        .route("/api/public/health", get(public_health))
}
