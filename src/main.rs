//! QuantRisk Server
//!
//! AI benchmark-driven cyber-risk quantification service.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                   QUANTRISK SERVER                     │
//! ├────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌───────────────┐   ┌──────────────┐  │
//! │  │  API     │   │  Calculation  │   │  Assessment  │  │
//! │  │  (Axum)  │──▶│  Core (pure)  │   │  Store       │  │
//! │  │          │   │  derive/risk  │   │  (in-memory) │  │
//! │  └──────────┘   └───────────────┘   └──────────────┘  │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! PrimaryMetrics -> derivation -> RiskParameters -> risk -> RiskResults.

mod config;
mod engine;
mod error;
mod handlers;
mod models;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "quantrisk_server=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("QuantRisk server starting...");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Documentation directory: {}", config.docs_dir.display());

    // Build application state
    let state = AppState {
        store: Arc::new(store::AssessmentStore::new()),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app).await.expect("Server error");
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<store::AssessmentStore>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))

        // Risk calculation
        .route("/api/v1/risk/calculate", post(handlers::risk::calculate))
        .route("/api/v1/risk/derive", post(handlers::risk::derive))

        // Stored assessments
        .route("/api/v1/risk/assessments/:id", get(handlers::risk::get))
        .route("/api/v1/risk/users/:user_id/assessments", get(handlers::risk::list_by_user))

        // Documentation
        .route("/docs/:filename", get(handlers::docs::serve))

        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
