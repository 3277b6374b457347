//! Route definitions for the household inventory API

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Largest accepted restore upload
const MAX_BACKUP_BYTES: usize = 64 * 1024 * 1024;

/// Create API routes, mounted under `/api`
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Auth routes (public)
        .nest("/auth", auth_routes())
        // Everything else requires a session
        .merge(protected_routes().route_layer(middleware::from_fn_with_state(state, auth_middleware)))
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/check", get(handlers::check_auth))
}

fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/consumables",
            get(handlers::list_consumables).post(handlers::create_consumable),
        )
        .route(
            "/consumables/:id",
            get(handlers::get_consumable)
                .put(handlers::update_consumable)
                .delete(handlers::delete_consumable),
        )
        .route("/inventory/:id", put(handlers::update_inventory))
        .route("/usage-rate/:id", put(handlers::update_usage_rate))
        .route(
            "/purchases",
            get(handlers::list_purchases).post(handlers::create_purchase),
        )
        .route(
            "/purchases/:id",
            delete(handlers::delete_purchase),
        )
        .route(
            "/usage",
            get(handlers::list_usage).post(handlers::create_usage),
        )
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/stats", get(handlers::get_stats))
        .route("/backup", get(handlers::download_backup))
        .route(
            "/restore",
            post(handlers::restore_backup).layer(DefaultBodyLimit::max(MAX_BACKUP_BYTES)),
        )
}
