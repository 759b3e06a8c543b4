//! # Pulse API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;

#[cfg(test)]
mod testing;

use config::AppConfig;
use pulse_infra::PostgresStore;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Pulse API server on {}:{}",
        config.host,
        config.port
    );

    let Some(db_config) = config.database.clone() else {
        tracing::error!("DATABASE_URL is not set; refusing to start");
        std::process::exit(1);
    };

    let db = match pulse_infra::connect(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize the database pool: {}", e);
            std::process::exit(1);
        }
    };
    let state = AppState::new(Arc::new(PostgresStore::new(db)));

    // The pool is lazy, so probe once at startup. A down database is
    // reported through /health rather than preventing boot.
    match state.store.ping().await {
        Ok(()) => tracing::info!("Database reachable"),
        Err(e) => tracing::warn!("Database unreachable at startup: {}", e),
    }

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .app_data(middleware::error::json_config())
            .app_data(middleware::error::query_config())
            .app_data(middleware::error::path_config())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pulse_api=debug,pulse_infra=debug"));

    let registry = tracing_subscriber::registry().with(env_filter);

    // LOG_FORMAT=json switches to line-delimited JSON output
    if std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json") {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
