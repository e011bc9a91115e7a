use rusqlite::Connection;

use crate::error::Result;
use crate::types::Tracker;

/// Initialise the rotation schema for every configured tracker.
///
/// Safe to call on every startup: tables are CREATE IF NOT EXISTS and the
/// current-index row is INSERT OR IGNORE, so a live rotation is never reset
/// back to zero by a restart.
pub fn init_db(conn: &Connection, trackers: &[Tracker]) -> Result<()> {
    for tracker in trackers {
        create_tracker_tables(conn, tracker.name())?;
    }
    Ok(())
}

/// Per-tracker tables: `{name}_turns` is the append-only history log,
/// `{name}_current` holds the single rotation-state row (id = 1).
///
/// The name is spliced into the SQL directly — `Tracker::new` guarantees it
/// is a lowercase identifier.
fn create_tracker_tables(conn: &Connection, name: &str) -> Result<()> {
    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {name}_turns (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            timestamp   TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS {name}_current (
            id           INTEGER PRIMARY KEY,
            currentIndex INTEGER NOT NULL
        );
        INSERT OR IGNORE INTO {name}_current (id, currentIndex) VALUES (1, 0);"
    ))?;
    Ok(())
}
