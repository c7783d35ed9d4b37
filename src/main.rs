//! Termas Server - Spa Booking Management System
//!
//! REST API server for the staff-facing booking administration.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use termas_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("termas_server={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Termas Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services =
        Services::new(repository.clone(), &config.schedule).expect("Failed to create services");

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        repository,
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Capacity
        .route("/capacity", get(api::capacity::get_capacity))
        .route("/capacity", put(api::capacity::update_capacity))
        // Clients
        .route("/clients", get(api::clients::list_clients))
        .route("/clients", post(api::clients::create_client))
        .route("/clients/duplicates", get(api::clients::find_duplicates))
        .route("/clients/:id", get(api::clients::get_client))
        .route("/clients/:id", put(api::clients::update_client))
        .route("/clients/:id", delete(api::clients::delete_client))
        // Products
        .route("/products", get(api::products::list_products))
        .route("/products", post(api::products::create_product))
        .route("/products/:id", get(api::products::get_product))
        .route("/products/:id", put(api::products::update_product))
        .route("/products/:id", delete(api::products::delete_product))
        .route("/products/:id/baths", get(api::products::get_product_baths))
        // Bookings
        .route("/bookings", get(api::bookings::list_bookings))
        .route("/bookings", post(api::bookings::create_booking))
        .route("/bookings/:id", get(api::bookings::get_booking))
        .route("/bookings/:id", put(api::bookings::update_booking))
        .route("/bookings/:id", delete(api::bookings::delete_booking))
        .route("/bookings/:id/logs", get(api::bookings::list_booking_logs))
        .route("/bookings/:id/logs", post(api::bookings::create_booking_log))
        // Gift vouchers
        .route("/gift-vouchers", get(api::gift_vouchers::list_vouchers))
        .route("/gift-vouchers", post(api::gift_vouchers::create_voucher))
        .route("/gift-vouchers/:id", get(api::gift_vouchers::get_voucher))
        .route("/gift-vouchers/:id", put(api::gift_vouchers::update_voucher))
        .route("/gift-vouchers/:id", delete(api::gift_vouchers::delete_voucher))
        .route("/gift-vouchers/:id/use", post(api::gift_vouchers::use_voucher))
        // Massagist availability
        .route("/availability", get(api::availability::list_availability))
        .route("/availability", post(api::availability::create_availability))
        .route("/availability/day", post(api::availability::save_day_availability))
        .route("/availability/weekday", post(api::availability::save_weekday_availability))
        .route("/availability/by-date/:date", get(api::availability::get_availability_for_day))
        .route("/availability/:id", get(api::availability::get_availability))
        .route("/availability/:id", put(api::availability::update_availability))
        .route("/availability/:id", delete(api::availability::delete_availability))
        // Booking constraints
        .route("/constraints", get(api::constraints::list_constraints))
        .route("/constraints/day", post(api::constraints::save_day_constraint))
        .route("/constraints/by-date/:date", get(api::constraints::get_constraint_for_day))
        .route("/constraints/:id", get(api::constraints::get_constraint))
        .route("/constraints/:id", delete(api::constraints::delete_constraint))
        // Daily schedule grid
        .route("/schedule/:date", get(api::schedule::get_day_schedule))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
