//! HTTP API Layer
//!
//! This crate provides the REST API for the bill splitting engine using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: One calculation operation plus health checks
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! Each calculation request builds its own `Ledger` from the request body,
//! so there is no shared mutable state across concurrent requests.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{config::ApiConfig, create_router};
//!
//! let app = create_router(ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{bill, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let state = AppState { config };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let bill_routes = Router::new().route("/calculate", post(bill::calculate_bill));

    let api_routes = Router::new().nest("/bills", bill_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
