use thiserror::Error;

/// Errors that can occur during rotation operations.
#[derive(Debug, Error)]
pub enum RotationError {
    /// The requested tracker name is not in the configured set.
    #[error("unknown tracker: {name}")]
    UnknownTracker { name: String },

    /// The current-index row is missing for a configured tracker.
    ///
    /// This indicates a setup bug (schema init never ran), not a user error.
    #[error("tracker '{tracker}' is not initialized: current-index row missing")]
    NotInitialized { tracker: String },

    /// The caller-supplied index falls outside the roster bounds.
    #[error("index {index} is out of bounds for a roster of {roster_len}")]
    InvalidIndex { index: i64, roster_len: usize },

    /// The PIN does not match the member at the supplied index.
    #[error("Invalid PIN")]
    InvalidPin,

    /// Roster or tracker configuration is unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// A SQLite operation failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, RotationError>;
