use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Connect to the database, apply migrations when enabled, and build the router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.database.run_migrations {
        models::db::migrate(&db)
            .await
            .map_err(|e| StartupError::Database(format!("migration failed: {e}")))?;
        info!("migrations applied");
    }
    Ok(routes::build_router(ServerState { db }, build_cors()))
}

/// Serve `app` on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), StartupError> {
    axum::serve(listener, app)
        .await
        .map_err(|e| StartupError::Any(e.into()))
}

/// Public entry: load config, build the app and run the HTTP server
pub async fn run() -> Result<(), StartupError> {
    dotenv().ok();
    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    info!(%addr, "starting clinic booking api");
    serve(listener, app).await
}
