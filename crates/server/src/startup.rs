use std::sync::Arc;

use axum::Router;
use common::env::ensure_parent_dir;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use service::{ResourceService, SeaOrmRepository};
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::errors::StartupError;
use crate::routes::{self, Deployable};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router serving `K` from an already migrated database.
pub fn app<K: Deployable>(db: DatabaseConnection) -> Router {
    let repo = Arc::new(SeaOrmRepository::new(db));
    let svc = Arc::new(ResourceService::<K, _>::new(repo));
    routes::build_router::<K>(svc, build_cors())
}

/// Open the store, create the table, serve until a shutdown signal, then
/// close the store.
pub async fn run<K: Deployable>(cfg: AppConfig) -> Result<(), StartupError> {
    if let Some(path) = models::db::sqlite_file_path(&cfg.database.url) {
        ensure_parent_dir(&path).await?;
    }
    let db = models::db::connect_with_config(&cfg.database).await?;
    K::migrate(&db).await?;
    info!(resource = K::COLLECTION, "schema ready");

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("cannot bind {addr}: {e}")))?;
    info!(%addr, resource = K::COLLECTION, "listening");

    axum::serve(listener, app::<K>(db.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)?;

    db.close().await.map_err(|e| StartupError::Database(e.to_string()))?;
    info!("database connection closed");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!(event = "shutdown_signal", "received Ctrl+C, draining connections"),
        _ = terminate => warn!(event = "shutdown_signal", "received SIGTERM, draining connections"),
    }
}
