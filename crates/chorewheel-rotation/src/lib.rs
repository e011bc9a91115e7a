pub mod db;
pub mod error;
pub mod manager;
pub mod types;

pub use error::RotationError;
pub use manager::RotationManager;
pub use types::{HistoryEntry, Member, Roster, Tracker, TrackerState};
