//! RS Finance Service Backend Server
//!
//! Loan-application intake and management backend: public endpoints for loan
//! products, application submission and status checks, plus admin endpoints
//! for review workflow, catalog management and the contact inbox.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::{routing::get, Router};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};

use rsfinance_server::application::ApplicationService;
use rsfinance_server::catalog::CatalogService;
use rsfinance_server::config::Config;
use rsfinance_server::contact::ContactService;
use rsfinance_server::db;
use rsfinance_server::handlers;
use rsfinance_server::middleware;
use rsfinance_server::notification::{LogMailer, Mailer, Notifier, SmtpMailer};
use rsfinance_server::organization::OrganizationService;
use rsfinance_server::routes;
use rsfinance_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .init();

    tracing::info!(environment = %config.environment.as_str(), "Starting RS Finance Service backend");

    // Initialize database connection pool and schema
    let db_pool = db::create_pool(&config).await?;
    db::run_migrations(&db_pool).await?;

    // Pick the mail transport: SMTP when configured, log-only otherwise
    let mailer: Arc<dyn Mailer> = match config.smtp.clone() {
        Some(smtp) => {
            tracing::info!(host = %smtp.host, port = smtp.port, "SMTP transport configured");
            Arc::new(SmtpMailer::new(smtp))
        }
        None => {
            tracing::warn!("SMTP_HOST not set, notification emails will be logged only");
            Arc::new(LogMailer)
        }
    };

    let notifier = Arc::new(Notifier::new(
        mailer,
        config.mail_from.clone(),
        config.admin_email.clone(),
    ));

    // Initialize services
    let application_service = Arc::new(ApplicationService::new(db_pool.clone(), notifier.clone()));
    let catalog_service = Arc::new(CatalogService::new(db_pool.clone()));
    let contact_service = Arc::new(ContactService::new(db_pool.clone(), notifier.clone()));
    let organization_service = Arc::new(OrganizationService::new(db_pool.clone()));

    // Create shared app state
    let app_state = AppState::new(
        db_pool,
        application_service,
        catalog_service,
        contact_service,
        organization_service,
    );

    // Create the app router
    let app = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .merge(routes::public_routes())
        .merge(routes::admin_routes())
        .with_state(app_state)
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .layer(configure_cors(&config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check at http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

fn configure_cors(config: &Config) -> CorsLayer {
    let allowed_origins = config.cors_allowed_origins.clone().unwrap_or_default();

    if allowed_origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
