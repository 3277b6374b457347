//! Household inventory tracker - backend
//!
//! A password-gated JSON API over a SQLite database of household
//! consumables, with restock projections and file backups.

use std::{path::Path, sync::Arc};

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use sqlx::SqlitePool;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;

use crate::error::AppResult;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
    /// bcrypt hash of the household password
    pub password_hash: Arc<str>,
}

impl AppState {
    /// Build the state, hashing the configured password once
    pub fn new(db: SqlitePool, config: Config) -> AppResult<Self> {
        let password_hash =
            services::auth::hash_password(&config.auth.app_password, config.auth.bcrypt_cost)?;
        Ok(Self {
            db,
            config: Arc::new(config),
            password_hash: Arc::from(password_hash),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // Credentialed requests need an echoed origin rather than `*`
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let static_dir = Path::new(&state.config.server.static_dir);
    let frontend =
        ServeDir::new(static_dir).not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes(state.clone()))
        .fallback_service(frontend)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}
