use std::sync::Mutex;

use rusqlite::Connection;
use tracing::{debug, instrument};

use crate::error::{Result, RotationError};
use crate::types::{HistoryEntry, Tracker, TrackerState};

/// History timestamp format: local time, second precision, no timezone.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Thread-safe turn service over the configured trackers.
///
/// Wraps a single SQLite connection in a `Mutex`. The lock plus the
/// transaction in `mark_done` serialize concurrent completions: two
/// simultaneous callers cannot both read the same index and double-advance
/// the rotation. The tradeoff is one write lock shared by all trackers;
/// with a handful of household members it is never contended.
pub struct RotationManager {
    db: Mutex<Connection>,
    trackers: Vec<Tracker>,
}

impl RotationManager {
    /// Wrap an already-open (and `init_db`-initialised) connection.
    pub fn new(conn: Connection, trackers: Vec<Tracker>) -> Self {
        Self {
            db: Mutex::new(conn),
            trackers,
        }
    }

    pub fn trackers(&self) -> &[Tracker] {
        &self.trackers
    }

    /// Resolve a tracker by name.
    fn tracker(&self, name: &str) -> Result<&Tracker> {
        self.trackers
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| RotationError::UnknownTracker {
                name: name.to_string(),
            })
    }

    /// Read the current index and the full history (newest first) for a
    /// tracker. No side effects.
    #[instrument(skip(self))]
    pub fn state(&self, tracker_name: &str) -> Result<TrackerState> {
        let tracker = self.tracker(tracker_name)?;
        let db = self.db.lock().unwrap();

        let current_index: usize = match db.query_row(
            &format!(
                "SELECT currentIndex FROM {}_current WHERE id = 1",
                tracker.name()
            ),
            [],
            |row| row.get(0),
        ) {
            Ok(i) => i,
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                return Err(RotationError::NotInitialized {
                    tracker: tracker.name().to_string(),
                })
            }
            Err(e) => return Err(RotationError::Database(e)),
        };

        let mut stmt = db.prepare(&format!(
            "SELECT name, timestamp FROM {}_turns ORDER BY id DESC",
            tracker.name()
        ))?;
        let rows = stmt.query_map([], row_to_entry)?;
        let history: Vec<HistoryEntry> = rows.filter_map(|r| r.ok()).collect();

        Ok(TrackerState {
            current_index,
            history,
        })
    }

    /// Record a completed turn and advance the rotation.
    ///
    /// `current_index` is the index the caller believes is current. It is
    /// bounds-checked against the roster but not re-read from storage before
    /// the PIN comparison: the client drives the rotation it last saw.
    ///
    /// On a PIN match the history append and the index advance run in a
    /// single transaction while the connection lock is held: both persist or
    /// neither does.
    #[instrument(skip(self, pin))]
    pub fn mark_done(&self, tracker_name: &str, current_index: i64, pin: &str) -> Result<()> {
        let tracker = self.tracker(tracker_name)?;
        let roster = tracker.roster();

        let invalid_index = || RotationError::InvalidIndex {
            index: current_index,
            roster_len: roster.len(),
        };
        let index = usize::try_from(current_index).map_err(|_| invalid_index())?;
        let member = roster.member_at(index).ok_or_else(invalid_index)?;

        if member.pin != pin {
            return Err(RotationError::InvalidPin);
        }

        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let next_index = (index + 1) % roster.len();

        let mut db = self.db.lock().unwrap();
        let tx = db.transaction()?;
        tx.execute(
            &format!(
                "INSERT INTO {}_turns (name, timestamp) VALUES (?1, ?2)",
                tracker.name()
            ),
            rusqlite::params![member.name, timestamp],
        )?;
        tx.execute(
            &format!(
                "UPDATE {}_current SET currentIndex = ?1 WHERE id = 1",
                tracker.name()
            ),
            rusqlite::params![next_index as i64],
        )?;
        tx.commit()?;

        debug!(
            tracker = tracker_name,
            member = %member.name,
            next_index,
            "turn marked done"
        );
        Ok(())
    }
}

/// Map a SELECT row (name, timestamp) to a `HistoryEntry`.
fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<HistoryEntry> {
    Ok(HistoryEntry {
        name: row.get(0)?,
        timestamp: row.get(1)?,
    })
}
