//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.
//!
//! Startup is two-phase: bootstrap (create the database if absent, connect
//! the pool, run migrations) and only then serve. Bootstrap failure exits
//! the process without ever binding the listener.

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env();

    // Phase one: bootstrap. The SchemaReady token is the only way to build
    // AppState, so serving cannot start against a missing schema.
    if let Err(e) = quill_infra::database::ensure_database(&config.database).await {
        tracing::error!("failed to create database: {e}");
        std::process::exit(1);
    }

    let db = match quill_infra::database::connect(&config.database).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    let schema = match migration::bootstrap(&db).await {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("schema bootstrap failed: {e}");
            std::process::exit(1);
        }
    };

    // Phase two: serve.
    let state = AppState::new(db, schema);

    tracing::info!(
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            // The editor client is served from a different origin.
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,quill_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
