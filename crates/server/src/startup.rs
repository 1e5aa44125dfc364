use std::sync::Arc;

use axum::Router;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use service::student::repo::{JsonFileStudentCollection, SeaOrmStudentCollection};
use service::{StudentCollection, StudentStore};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the configured backing collection. For Postgres this connects with
/// the configured timeouts and applies pending migrations.
pub async fn build_collection(cfg: &AppConfig) -> Result<Arc<dyn StudentCollection>, StartupError> {
    match cfg.backend() {
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database)
                .await
                .map_err(|e| StartupError::Storage(e.to_string()))?;
            migration::Migrator::up(&db, None)
                .await
                .map_err(|e| StartupError::Storage(format!("migrate up: {e}")))?;
            info!(backend = "postgres", "student collection ready");
            Ok(Arc::new(SeaOrmStudentCollection::new(db)))
        }
        StorageBackend::File => {
            let collection = JsonFileStudentCollection::open(&cfg.storage.data_file)
                .await
                .map_err(|e| StartupError::Storage(e.to_string()))?;
            info!(backend = "file", path = %cfg.storage.data_file.display(), "student collection ready");
            Ok(Arc::new(collection))
        }
    }
}

/// Build the application from a loaded config.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let data_dir = match cfg.backend() {
        StorageBackend::File => cfg.storage.data_dir(),
        StorageBackend::Postgres => None,
    };
    common::env::ensure_env(&cfg.web.frontend_dir, data_dir).await?;

    let store = StudentStore::new(build_collection(cfg).await?);
    Ok(routes::build_router(AppState::new(store), build_cors(), &cfg.web.frontend_dir))
}

/// Build the app from an already loaded config and run the HTTP server.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = cfg.server.bind_addr().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    info!(%addr, backend = ?cfg.backend(), "starting student records server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
