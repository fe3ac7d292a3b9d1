//! API server for the Resolution todo service
//!
//! This is the main entry point. It wires the MongoDB-backed store into
//! the REST routes and serves on the configured port.

mod config;
mod error;
mod routes;
mod state;

use std::net::SocketAddr;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resolution_core::todo::MongoTodoStore;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let store = match MongoTodoStore::connect(&config.mongo_uri).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("mongodb connection failed: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!("db connected");

    let app_state = AppState::new(store);

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::todo::router())
        .with_state(app_state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("REST API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
