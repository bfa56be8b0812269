use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

mod config;
mod models;
mod routes;
mod services;
mod utils;

use config::Config;
use routes::{health::health_check, titles::generate_titles};
use services::generation::{OpenAiProvider, TitleProvider};

type Provider = Arc<dyn TitleProvider + Send + Sync>;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("title_service=info,tower_http=info")
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let provider: Provider = Arc::new(OpenAiProvider::new(&config));
    info!("Using completion model {}", config.model);

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/generate-titles", post(generate_titles))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(provider);

    let addr = format!("0.0.0.0:{}", config.port);

    info!("Title service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
