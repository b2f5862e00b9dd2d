//! Loan type catalog API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::catalog::{LoanType, LoanTypeRequest};
use crate::error::ApiResult;
use crate::state::AppState;

/// Active loan types, the public product listing
pub async fn list_active_loan_types(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<LoanType>>> {
    let loan_types = state.catalog_service.list_active().await?;
    Ok(Json(loan_types))
}

/// Single catalog entry by id (public and admin)
pub async fn get_loan_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<LoanType>> {
    let loan_type = state.catalog_service.get_by_id(id).await?;
    Ok(Json(loan_type))
}

/// Every catalog entry including inactive ones (admin)
pub async fn list_all_loan_types(State(state): State<AppState>) -> ApiResult<Json<Vec<LoanType>>> {
    let loan_types = state.catalog_service.list_all().await?;
    Ok(Json(loan_types))
}

/// Create a catalog entry (admin)
pub async fn create_loan_type(
    State(state): State<AppState>,
    Json(request): Json<LoanTypeRequest>,
) -> ApiResult<(StatusCode, Json<LoanType>)> {
    let loan_type = state.catalog_service.create(request).await?;
    Ok((StatusCode::CREATED, Json(loan_type)))
}

/// Overwrite a catalog entry (admin)
pub async fn update_loan_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<LoanTypeRequest>,
) -> ApiResult<Json<LoanType>> {
    let loan_type = state.catalog_service.update(id, request).await?;
    Ok(Json(loan_type))
}

/// Flip the active flag; a missing id responds with null rather than 404
pub async fn toggle_loan_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Option<LoanType>>> {
    let loan_type = state.catalog_service.toggle_active(id).await?;
    Ok(Json(loan_type))
}

/// Hard-delete a catalog entry (admin)
pub async fn delete_loan_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.catalog_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
