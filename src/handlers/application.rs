//! Loan application API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::{
    ApplicationSearchQuery, ApplicationStats, LoanApplication, PublicApplicationStatus,
    SubmitApplicationRequest, UpdateStatusRequest,
};
use crate::error::ApiResult;
use crate::models::PaginatedResponse;
use crate::state::AppState;

/// Submit a new loan application (public)
pub async fn submit_application(
    State(state): State<AppState>,
    Json(request): Json<SubmitApplicationRequest>,
) -> ApiResult<Json<LoanApplication>> {
    let application = state.application_service.submit(request).await?;
    Ok(Json(application))
}

/// Projected status view for an applicant checking on their submission (public)
pub async fn get_application_status(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
) -> ApiResult<Json<PublicApplicationStatus>> {
    let application = state
        .application_service
        .get_by_application_id(&application_id)
        .await?;
    Ok(Json(application.public_view()))
}

/// Filtered, paginated application listing (admin)
pub async fn list_applications(
    State(state): State<AppState>,
    Query(query): Query<ApplicationSearchQuery>,
) -> ApiResult<Json<PaginatedResponse<LoanApplication>>> {
    let page = state.application_service.search(query).await?;
    Ok(Json(page))
}

/// Full application record (admin)
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<LoanApplication>> {
    let application = state.application_service.get_by_id(id).await?;
    Ok(Json(application))
}

/// Record a reviewer decision (admin)
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> ApiResult<Json<LoanApplication>> {
    let application = state.application_service.update_status(id, request).await?;
    Ok(Json(application))
}

/// Hard-delete an application (admin)
pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.application_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Aggregate counts for the dashboard (admin)
pub async fn application_stats(
    State(state): State<AppState>,
) -> ApiResult<Json<ApplicationStats>> {
    let stats = state.application_service.stats().await?;
    Ok(Json(stats))
}
