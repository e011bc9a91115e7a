use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use chorewheel_gateway::{app, rosters};
use chorewheel_rotation::{db, RotationManager, Tracker};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chorewheel_gateway=info,tower_http=debug".into()),
        )
        .init();

    // load config: explicit CHOREWHEEL_CONFIG path > ~/.chorewheel/chorewheel.toml
    let config_path = std::env::var("CHOREWHEEL_CONFIG").ok();
    let config = chorewheel_core::ChorewheelConfig::load(config_path.as_deref()).unwrap_or_else(
        |e| {
            tracing::warn!("Config load failed ({}), using defaults", e);
            chorewheel_core::ChorewheelConfig::default()
        },
    );

    let bind = config.gateway.bind.clone();
    let port = config.gateway.port;
    let db_path = config.database.path.clone();

    let trackers = rosters::builtin_trackers()?;

    // Storage must be reachable and the schema in place before the first
    // request; anything else here is fatal.
    ensure_parent_dir(&db_path);
    info!(path = %db_path, "opening SQLite database");
    let conn = match open_database(&db_path, &trackers) {
        Ok(conn) => conn,
        Err(e) => {
            error!(error = %e, "database setup failed, refusing to serve");
            return Err(e);
        }
    };
    info!(trackers = trackers.len(), "database schema ready");

    let rotation = RotationManager::new(conn, trackers);
    let state = Arc::new(app::AppState::new(config, rotation));
    let router = app::build_router(state);

    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    info!("Chorewheel gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

/// Open the SQLite database and run the idempotent schema init for every
/// configured tracker.
fn open_database(path: &str, trackers: &[Tracker]) -> anyhow::Result<rusqlite::Connection> {
    let conn = rusqlite::Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    db::init_db(&conn, trackers)?;
    Ok(conn)
}

/// Ensure the parent directory for a file path exists.
fn ensure_parent_dir(path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
}
