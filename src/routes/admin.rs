//! Admin route definitions
//!
//! Review and catalog management surface. There is no authentication gate in
//! front of these routes; the split from the public router is the only
//! boundary, a known gap carried over deliberately.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::*;
use crate::state::AppState;

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // Applications
        .route("/api/admin/applications", get(list_applications))
        .route("/api/admin/applications/stats", get(application_stats))
        .route("/api/admin/applications/:id", get(get_application))
        .route(
            "/api/admin/applications/:id/status",
            put(update_application_status),
        )
        .route("/api/admin/applications/:id", delete(delete_application))
        // Loan type catalog
        .route("/api/admin/loan-types", get(list_all_loan_types))
        .route("/api/admin/loan-types", post(create_loan_type))
        .route("/api/admin/loan-types/:id", put(update_loan_type))
        .route("/api/admin/loan-types/:id/toggle", patch(toggle_loan_type))
        .route("/api/admin/loan-types/:id", delete(delete_loan_type))
        // Contact inbox
        .route("/api/admin/messages", get(list_messages))
        .route("/api/admin/messages/unread", get(list_unread_messages))
        .route(
            "/api/admin/messages/unread/count",
            get(count_unread_messages),
        )
        .route("/api/admin/messages/search", get(search_messages))
        .route("/api/admin/messages/:id/read", put(mark_message_read))
        .route("/api/admin/messages/:id/unread", put(mark_message_unread))
        .route("/api/admin/messages/:id", delete(delete_message))
        // Organization profile
        .route("/api/admin/organization", put(update_organization))
}
