//! Server binary for the Lifeboard Game of Life service.
//!
//! Wires configuration, storage, and the HTTP API together and serves
//! until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `lifeboard-config.yaml` (or `LIFEBOARD_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Open the configured board store, running migrations for `PostgreSQL`
//! 4. Seed the id allocator from the highest stored id
//! 5. Build the simulation service and serve the API
//! 6. On shutdown, close the database pool if there is one

mod error;

use std::sync::Arc;

use lifeboard_api::{AppState, ServerConfig, start_server};
use lifeboard_core::{
    GameOfLifeService, IdAllocator, LifeboardConfig, LoggingConfig, StorageConfig, StorageKind,
};
use lifeboard_db::{
    BoardStore, FileBoardStore, MemoryBoardStore, PgBoardStore, PostgresConfig, StoreBackend,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::DaemonError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, storage, or the server fails.
#[tokio::main]
async fn main() -> Result<(), DaemonError> {
    // 1. Load configuration. Logging depends on it, so this runs first.
    let config_path = LifeboardConfig::path_from_env();
    let config = LifeboardConfig::load(&config_path)?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!(
        path = %config_path.display(),
        found = config_path.exists(),
        backend = ?config.storage.backend,
        port = config.server.port,
        "lifeboard-server starting"
    );

    // 3. Open the board store.
    let store = open_store(&config.storage).await?;

    // 4. Seed the allocator.
    let last_assigned = store.last_assigned_id().await?;
    let allocator = Arc::new(IdAllocator::seeded(last_assigned));
    info!(backend = store.name(), last_assigned, "Board store ready");

    // 5. Serve.
    let service = GameOfLifeService::new(store, allocator);
    let state = Arc::new(
        AppState::new(service)
            .with_limits(config.simulation)
            .with_error_detail(config.server.expose_error_detail),
    );
    start_server(&ServerConfig::from(&config.server), Arc::clone(&state)).await?;

    // 6. Release connections.
    if let StoreBackend::Postgres(pg) = state.service.store() {
        pg.close().await;
    }

    info!("lifeboard-server stopped");
    Ok(())
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the
/// configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Open whichever store the configuration selects.
async fn open_store(storage: &StorageConfig) -> Result<StoreBackend, DaemonError> {
    let store = match storage.backend {
        StorageKind::Memory => StoreBackend::from(MemoryBoardStore::new()),
        StorageKind::File => StoreBackend::from(FileBoardStore::open(storage.file_path.clone()).await?),
        StorageKind::Postgres => {
            let pg_config = PostgresConfig::new(&storage.postgres_url)
                .with_max_connections(storage.max_connections);
            let pg = PgBoardStore::connect(&pg_config).await?;
            pg.run_migrations().await?;
            StoreBackend::from(pg)
        }
    };
    Ok(store)
}
