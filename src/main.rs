//! Business Directory - Main Application Entry Point
//!
//! This is the web server for a local-business directory: public
//! browse/search and slug-path detail endpoints, a paid submission flow,
//! an XML sitemap, and an authenticated admin back office for moderation,
//! categories, discount codes, and site settings.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Authentication**: Admin API key with SHA-256 hashing
//! - **Format**: JSON requests/responses (plus XML for the sitemap)
//!
//! # Routing scheme
//!
//! Published listings are reachable at `/{city}-{state}/{category}/{name}`
//! where every segment is derived from current field values by the slug
//! codec ([`slug`]). The sitemap advertises exactly those paths; the
//! resolver ([`services::listing_service`]) recomputes them per request.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;
mod slug;
mod state;

use tracing_subscriber::EnvFilter;

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let state = AppState {
        pool: pool.clone(),
        config: config.clone(),
    };

    // Create admin routes (back office)
    let admin_routes = Router::new()
        // Listing moderation routes
        .route(
            "/api/v1/admin/businesses",
            get(handlers::moderation::dashboard),
        )
        .route(
            "/api/v1/admin/businesses",
            post(handlers::moderation::create_listing),
        )
        .route(
            "/api/v1/admin/businesses/{id}",
            put(handlers::moderation::update_listing),
        )
        .route(
            "/api/v1/admin/businesses/{id}",
            delete(handlers::moderation::delete_listing),
        )
        .route(
            "/api/v1/admin/businesses/{id}/status",
            post(handlers::moderation::update_status),
        )
        // Category management routes
        .route(
            "/api/v1/admin/categories",
            post(handlers::categories::create_category),
        )
        .route(
            "/api/v1/admin/categories/{id}",
            delete(handlers::categories::delete_category),
        )
        // Discount code routes
        .route(
            "/api/v1/admin/discount-codes",
            get(handlers::discount_codes::list_discount_codes),
        )
        .route(
            "/api/v1/admin/discount-codes",
            post(handlers::discount_codes::create_discount_code),
        )
        .route(
            "/api/v1/admin/discount-codes/{id}",
            patch(handlers::discount_codes::update_discount_code),
        )
        .route(
            "/api/v1/admin/discount-codes/{id}",
            delete(handlers::discount_codes::delete_discount_code),
        )
        // Site settings route
        .route(
            "/api/v1/admin/settings",
            put(handlers::settings::update_settings),
        )
        // Admin key management routes
        .route("/api/v1/admin/keys", post(handlers::admin_keys::create_admin_key))
        .route(
            "/api/v1/admin/keys/{id}",
            delete(handlers::admin_keys::revoke_admin_key),
        )
        // Apply authentication middleware to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            pool.clone(),
            middleware::auth::auth_middleware,
        ));

    // Combine public routes with the admin back office
    let app = Router::new()
        // Public routes (no authentication required)
        .route("/health", get(handlers::health::health_check))
        .route("/sitemap.xml", get(handlers::sitemap::sitemap))
        .route(
            "/api/v1/businesses",
            get(handlers::businesses::list_businesses),
        )
        .route(
            "/api/v1/categories",
            get(handlers::categories::list_categories),
        )
        .route("/api/v1/settings", get(handlers::settings::get_settings))
        .route(
            "/api/v1/submissions",
            post(handlers::submissions::submit_business),
        )
        // Canonical slug-path detail pages resolve last: static prefixes
        // above always win over the three-segment wildcard
        .route(
            "/{location}/{category}/{business}",
            get(handlers::businesses::get_business),
        )
        // Merge admin routes
        .merge(admin_routes)
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share state with all handlers via State extraction
        .with_state(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
