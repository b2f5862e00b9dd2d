//! Organization profile API handlers

use axum::{extract::State, Json};

use crate::error::ApiResult;
use crate::organization::{OrganizationInfo, OrganizationInfoRequest};
use crate::state::AppState;

/// Organization profile, created with defaults on first read (public)
pub async fn get_organization(
    State(state): State<AppState>,
) -> ApiResult<Json<OrganizationInfo>> {
    let info = state.organization_service.get().await?;
    Ok(Json(info))
}

/// Overwrite the organization profile (admin)
pub async fn update_organization(
    State(state): State<AppState>,
    Json(request): Json<OrganizationInfoRequest>,
) -> ApiResult<Json<OrganizationInfo>> {
    let info = state.organization_service.update(request).await?;
    Ok(Json(info))
}
