//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::application::ApplicationService;
use crate::catalog::CatalogService;
use crate::contact::ContactService;
use crate::organization::OrganizationService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub application_service: Arc<ApplicationService>,
    pub catalog_service: Arc<CatalogService>,
    pub contact_service: Arc<ContactService>,
    pub organization_service: Arc<OrganizationService>,
}

impl AppState {
    pub fn new(
        db_pool: PgPool,
        application_service: Arc<ApplicationService>,
        catalog_service: Arc<CatalogService>,
        contact_service: Arc<ContactService>,
        organization_service: Arc<OrganizationService>,
    ) -> Self {
        Self {
            db_pool,
            application_service,
            catalog_service,
            contact_service,
            organization_service,
        }
    }
}

impl FromRef<AppState> for Arc<ApplicationService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.application_service.clone()
    }
}

impl FromRef<AppState> for Arc<CatalogService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.catalog_service.clone()
    }
}

impl FromRef<AppState> for Arc<ContactService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.contact_service.clone()
    }
}

impl FromRef<AppState> for Arc<OrganizationService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.organization_service.clone()
    }
}
