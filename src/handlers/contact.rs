//! Contact message API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::contact::{ContactListQuery, ContactMessage, SubmitContactRequest};
use crate::error::ApiResult;
use crate::models::PaginatedResponse;
use crate::state::AppState;

/// Submit a contact message (public)
pub async fn submit_contact_message(
    State(state): State<AppState>,
    Json(request): Json<SubmitContactRequest>,
) -> ApiResult<Json<ContactMessage>> {
    let message = state.contact_service.submit(request).await?;
    Ok(Json(message))
}

/// Paginated inbox listing, optionally filtered by read flag (admin)
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<ContactListQuery>,
) -> ApiResult<Json<PaginatedResponse<ContactMessage>>> {
    let page = state.contact_service.list(query).await?;
    Ok(Json(page))
}

/// All unread messages (admin)
pub async fn list_unread_messages(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ContactMessage>>> {
    let messages = state.contact_service.list_unread().await?;
    Ok(Json(messages))
}

/// Unread message count (admin)
pub async fn count_unread_messages(
    State(state): State<AppState>,
) -> ApiResult<Json<serde_json::Value>> {
    let count = state.contact_service.count_unread().await?;
    Ok(Json(json!({ "unread": count })))
}

#[derive(Debug, Deserialize)]
pub struct SubjectSearchQuery {
    pub subject: String,
}

/// Case-insensitive subject search (admin)
pub async fn search_messages(
    State(state): State<AppState>,
    Query(query): Query<SubjectSearchQuery>,
) -> ApiResult<Json<Vec<ContactMessage>>> {
    let messages = state
        .contact_service
        .search_by_subject(&query.subject)
        .await?;
    Ok(Json(messages))
}

/// Mark a message read (admin)
pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ContactMessage>> {
    let message = state.contact_service.mark_read(id).await?;
    Ok(Json(message))
}

/// Mark a message unread (admin)
pub async fn mark_message_unread(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ContactMessage>> {
    let message = state.contact_service.mark_unread(id).await?;
    Ok(Json(message))
}

/// Hard-delete a message (admin)
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.contact_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
