//! Ladle Server - Standalone recipe catalog server
//!
//! Serves the recipe CRUD API over a single MongoDB collection. The
//! connection is established once at startup and shared by all requests.

mod config;

use anyhow::Result;
use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use ladle::routes::AppState;
use ladle::{MongoDb, MongoRecipeStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ladle=info,ladle_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Starting Ladle Server on {}:{}", config.host, config.port);

    // Connect to MongoDB (pings and ensures indexes)
    let db = MongoDb::connect(&config.mongodb_uri, &config.database_name).await?;

    // Create app state with the Mongo-backed store
    let store = Arc::new(MongoRecipeStore::new(db.clone()));
    let state = Arc::new(AppState::new(store));

    // Build router
    let app = build_router(state, db);

    // Start server
    let addr = SocketAddr::new(config.host.parse()?, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: Arc<AppState>, db: MongoDb) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let health_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .with_state(db);

    Router::new()
        .merge(health_routes)
        .merge(ladle::routes::configure(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn root() -> &'static str {
    "Ladle Server"
}

async fn health_check(State(db): State<MongoDb>) -> Result<Json<serde_json::Value>, StatusCode> {
    // Check database connection
    match db.ping().await {
        Ok(()) => Ok(Json(serde_json::json!({
            "status": "healthy",
            "database": "connected",
            "version": env!("CARGO_PKG_VERSION")
        }))),
        Err(_) => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}
