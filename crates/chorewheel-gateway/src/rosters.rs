//! Compiled-in deployment rosters.
//!
//! Membership and PINs are configuration data, not runtime state: edit this
//! file and redeploy to change a rotation. Rosters are validated once at
//! startup and injected into the `RotationManager`, read-only thereafter.

use chorewheel_rotation::error::Result;
use chorewheel_rotation::{Member, Roster, Tracker};

/// The two household rotations this deployment serves.
pub fn builtin_trackers() -> Result<Vec<Tracker>> {
    Ok(vec![
        Tracker::new(
            "water",
            Roster::new(vec![
                Member::new("Saiteja", "1234"),
                Member::new("Ratnesh", "2345"),
                Member::new("Rohit", "3456"),
                Member::new("Harithik", "4567"),
                Member::new("Aman", "5678"),
            ])?,
        )?,
        Tracker::new(
            "dustbin",
            Roster::new(vec![
                Member::new("Aman", "1234"),
                Member::new("Ratnesh", "2345"),
                Member::new("Saiteja", "3456"),
                Member::new("Debjith", "4567"),
                Member::new("Harithik", "5678"),
            ])?,
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_trackers_are_valid() {
        let trackers = builtin_trackers().expect("compiled-in rosters must validate");
        assert_eq!(trackers.len(), 2);
        assert_eq!(trackers[0].name(), "water");
        assert_eq!(trackers[1].name(), "dustbin");
        assert_eq!(trackers[0].roster().len(), 5);
        assert_eq!(trackers[1].roster().len(), 5);
    }
}
