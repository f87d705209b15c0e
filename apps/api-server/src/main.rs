//! # Quillpost API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    // Refuse to start without the generation API key
    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("{}", e);
        std::io::Error::other(e)
    })?;

    let state = AppState::new(&config).map_err(|e| {
        tracing::error!("Failed to build upstream clients: {}", e);
        std::io::Error::other(e)
    })?;

    tracing::info!(
        "Starting Quillpost API Server on {}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::json_config())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
