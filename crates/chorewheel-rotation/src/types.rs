use serde::Serialize;

use crate::error::{Result, RotationError};

/// One participating member and their shared PIN.
///
/// Deliberately does not derive `Serialize` — a PIN must never leak into an
/// HTTP response.
#[derive(Debug, Clone)]
pub struct Member {
    pub name: String,
    pub pin: String,
}

impl Member {
    pub fn new(name: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pin: pin.into(),
        }
    }
}

/// Fixed ordered list of members for one tracker.
///
/// Rosters are compiled-in configuration, validated once at construction and
/// read-only thereafter.
#[derive(Debug, Clone)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    /// Build a roster. The list must be non-empty and member names unique.
    pub fn new(members: Vec<Member>) -> Result<Self> {
        if members.is_empty() {
            return Err(RotationError::Config("roster must not be empty".into()));
        }
        for (i, member) in members.iter().enumerate() {
            if members[..i].iter().any(|m| m.name == member.name) {
                return Err(RotationError::Config(format!(
                    "duplicate roster member: {}",
                    member.name
                )));
            }
        }
        Ok(Self { members })
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Bounds-checked member lookup.
    pub fn member_at(&self, index: usize) -> Option<&Member> {
        self.members.get(index)
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

/// One independent rotation (e.g. water duty, dustbin duty).
///
/// The tracker name doubles as the table-name prefix in SQLite, so it is
/// restricted to a lowercase identifier.
#[derive(Debug, Clone)]
pub struct Tracker {
    name: String,
    roster: Roster,
}

impl Tracker {
    pub fn new(name: impl Into<String>, roster: Roster) -> Result<Self> {
        let name = name.into();
        let valid = !name.is_empty()
            && name.chars().next().is_some_and(|c| c.is_ascii_lowercase())
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !valid {
            return Err(RotationError::Config(format!(
                "tracker name '{name}' must be a lowercase identifier"
            )));
        }
        Ok(Self { name, roster })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}

/// A completed turn as recorded in the history log.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub name: String,
    /// Local time, `YYYY-MM-DD HH:MM:SS`, no timezone indicator.
    pub timestamp: String,
}

/// Snapshot of one tracker: whose turn it is plus the full history,
/// newest first.
#[derive(Debug, Clone, Serialize)]
pub struct TrackerState {
    #[serde(rename = "currentIndex")]
    pub current_index: usize,
    pub history: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_rejects_empty_list() {
        assert!(Roster::new(vec![]).is_err());
    }

    #[test]
    fn roster_rejects_duplicate_names() {
        let result = Roster::new(vec![
            Member::new("Asha", "1111"),
            Member::new("Asha", "2222"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn member_at_is_bounds_checked() {
        let roster = Roster::new(vec![Member::new("Asha", "1111")]).unwrap();
        assert_eq!(roster.member_at(0).unwrap().name, "Asha");
        assert!(roster.member_at(1).is_none());
    }

    #[test]
    fn tracker_rejects_non_identifier_names() {
        let roster = Roster::new(vec![Member::new("Asha", "1111")]).unwrap();
        assert!(Tracker::new("water", roster.clone()).is_ok());
        assert!(Tracker::new("", roster.clone()).is_err());
        assert!(Tracker::new("Water", roster.clone()).is_err());
        assert!(Tracker::new("water-tank", roster.clone()).is_err());
        assert!(Tracker::new("1water", roster).is_err());
    }

    #[test]
    fn tracker_state_serializes_camel_case() {
        let state = TrackerState {
            current_index: 2,
            history: vec![],
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains(r#""currentIndex":2"#));
        assert!(json.contains(r#""history":[]"#));
    }
}
