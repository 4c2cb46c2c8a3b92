use std::{
    future::Future,
    net::{SocketAddr, ToSocketAddrs},
    sync::Arc,
};

use axum::Router;
use configs::{AppConfig, StorageBackend};
use service::student::{InMemoryStudentRepository, SeaOrmStudentRepository, StudentRepository};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolve `server.host:server.port`; host may be a name such as `localhost`.
fn load_bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = cfg.server.bind_addr();
    (cfg.server.host.as_str(), cfg.server.port)
        .to_socket_addrs()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {raw}: {e}")))?
        .next()
        .ok_or_else(|| StartupError::InvalidConfig(format!("bind address {raw} resolved to nothing")))
}

/// Pick the student store named by `storage.backend`.
pub async fn build_state(cfg: &AppConfig) -> Result<AppState, StartupError> {
    let repo: Arc<dyn StudentRepository> = match cfg.storage.backend {
        StorageBackend::Memory => {
            info!(backend = "memory", "student storage ready");
            Arc::new(InMemoryStudentRepository::new())
        }
        StorageBackend::Database => {
            let db = models::db::connect_and_migrate(&cfg.database)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            info!(backend = "database", "student storage ready");
            Arc::new(SeaOrmStudentRepository::new(db))
        }
    };
    Ok(AppState::new(repo))
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Build the app and serve until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr = load_bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "starting student registry");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server drained");
    Ok(())
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutting down");
    }
}
