// ============================
// crates/backend-lib/src/directory.rs
// ============================
//! In-memory activity directory.
use crate::error::AppError;
use dashmap::DashMap;
use mergington_common::{ActivityRecord, ActivityView};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

pub type ActivityName = String;

/// Store of all activities, keyed by name.
///
/// Signup and unregister hold the entry's write guard for the whole
/// check-then-mutate sequence, so concurrent identical requests cannot both
/// pass the membership check.
#[derive(Clone, Default)]
pub struct ActivityDirectory {
    activities: Arc<DashMap<ActivityName, ActivityRecord>>,
}

impl ActivityDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory holding the given activities
    pub fn with_activities(activities: HashMap<ActivityName, ActivityRecord>) -> Self {
        let directory = Self::new();
        directory.replace_all(activities);
        directory
    }

    /// Add or overwrite a single activity
    pub fn insert(&self, name: impl Into<ActivityName>, record: ActivityRecord) {
        self.activities.insert(name.into(), record);
    }

    /// Load the given set in place of the current one.
    ///
    /// New records are written before stale names are dropped, so a concurrent
    /// `list` sees old and new entries side by side but never an empty directory.
    pub fn replace_all(&self, activities: HashMap<ActivityName, ActivityRecord>) {
        let names: HashSet<ActivityName> = activities.keys().cloned().collect();
        for (name, record) in activities {
            self.activities.insert(name, record);
        }
        self.activities.retain(|name, _| names.contains(name));
    }

    /// Snapshot of one activity
    pub fn get(&self, name: &str) -> Option<ActivityRecord> {
        self.activities.get(name).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// All activities with their derived counters, ordered by name
    pub fn list(&self) -> BTreeMap<ActivityName, ActivityView> {
        self.activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().to_view()))
            .collect()
    }

    /// Append `participant` to the roster of `activity`.
    ///
    /// Capacity is not enforced: signup succeeds even when the activity is full.
    pub fn signup(&self, activity: &str, participant: &str) -> Result<String, AppError> {
        let mut entry = self
            .activities
            .get_mut(activity)
            .ok_or(AppError::ActivityNotFound)?;

        if entry.has_participant(participant) {
            return Err(AppError::AlreadySignedUp);
        }
        entry.participants.push(participant.to_string());

        Ok(format!("{participant} signed up for {activity}"))
    }

    /// Remove `participant` from the roster of `activity`, keeping the order of the rest
    pub fn unregister(&self, activity: &str, participant: &str) -> Result<String, AppError> {
        let mut entry = self
            .activities
            .get_mut(activity)
            .ok_or(AppError::ActivityNotFound)?;

        let position = entry
            .participants
            .iter()
            .position(|p| p == participant)
            .ok_or(AppError::NotSignedUp)?;
        entry.participants.remove(position);

        Ok(format!("{participant} unregistered from {activity}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_club() -> ActivityRecord {
        ActivityRecord::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        )
    }

    fn setup_directory() -> ActivityDirectory {
        let directory = ActivityDirectory::new();
        directory.insert("Chess Club", chess_club());
        directory.insert(
            "Programming Class",
            ActivityRecord::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        );
        directory
    }

    #[test]
    fn test_list_computes_counters() {
        let directory = setup_directory();
        let listing = directory.list();

        assert_eq!(listing.len(), 2);
        let chess = &listing["Chess Club"];
        assert_eq!(chess.current_participants, 2);
        assert_eq!(chess.available_spots, 10);
        for view in listing.values() {
            assert_eq!(view.current_participants, view.record.participants.len());
            assert_eq!(
                view.available_spots,
                i64::from(view.record.max_participants) - view.current_participants as i64
            );
        }
    }

    #[test]
    fn test_signup_appends_participant() {
        let directory = setup_directory();

        let message = directory
            .signup("Chess Club", "newstudent@mergington.edu")
            .unwrap();
        assert_eq!(message, "newstudent@mergington.edu signed up for Chess Club");

        let chess = directory.get("Chess Club").unwrap();
        assert_eq!(chess.participants.len(), 3);
        assert_eq!(chess.participants[2], "newstudent@mergington.edu");
    }

    #[test]
    fn test_duplicate_signup_is_rejected_once_registered() {
        let directory = setup_directory();

        assert!(directory.signup("Chess Club", "dup@mergington.edu").is_ok());
        let err = directory
            .signup("Chess Club", "dup@mergington.edu")
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadySignedUp));

        let chess = directory.get("Chess Club").unwrap();
        let occurrences = chess
            .participants
            .iter()
            .filter(|p| *p == "dup@mergington.edu")
            .count();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn test_unknown_activity_leaves_directory_untouched() {
        let directory = setup_directory();
        let before = directory.list();

        let err = directory
            .signup("NonExistent Club", "test@mergington.edu")
            .unwrap_err();
        assert!(matches!(err, AppError::ActivityNotFound));
        let err = directory
            .unregister("NonExistent Club", "test@mergington.edu")
            .unwrap_err();
        assert!(matches!(err, AppError::ActivityNotFound));

        assert_eq!(directory.list(), before);
    }

    #[test]
    fn test_unregister_unknown_participant() {
        let directory = setup_directory();
        let before = directory.list();

        let err = directory
            .unregister("Chess Club", "ghost@mergington.edu")
            .unwrap_err();
        assert!(matches!(err, AppError::NotSignedUp));
        assert!(err.to_string().contains("not signed up"));
        assert_eq!(directory.list(), before);
    }

    #[test]
    fn test_unregister_after_signup_restores_count() {
        let directory = setup_directory();
        let before = directory.get("Chess Club").unwrap().current_participants();

        directory.signup("Chess Club", "temp@mergington.edu").unwrap();
        let message = directory
            .unregister("Chess Club", "temp@mergington.edu")
            .unwrap();
        assert_eq!(message, "temp@mergington.edu unregistered from Chess Club");

        let after = directory.get("Chess Club").unwrap().current_participants();
        assert_eq!(after, before);
    }

    #[test]
    fn test_unregister_preserves_order() {
        let directory = ActivityDirectory::new();
        directory.insert("Art & Craft", ActivityRecord::new("Creative arts", "Mondays", 10, &[]));

        for email in ["a@mergington.edu", "b@mergington.edu", "c@mergington.edu"] {
            directory.signup("Art & Craft", email).unwrap();
        }
        directory.unregister("Art & Craft", "b@mergington.edu").unwrap();

        let record = directory.get("Art & Craft").unwrap();
        assert_eq!(record.participants, vec!["a@mergington.edu", "c@mergington.edu"]);
    }

    #[test]
    fn test_signup_does_not_enforce_capacity() {
        let directory = ActivityDirectory::new();
        directory.insert("Tiny Club", ActivityRecord::new("Small", "Mondays", 1, &["a@x.edu"]));

        directory.signup("Tiny Club", "b@x.edu").unwrap();

        let listing = directory.list();
        let view = &listing["Tiny Club"];
        assert_eq!(view.current_participants, 2);
        assert_eq!(view.available_spots, -1);
        assert_eq!(view.record.max_participants, 1);
    }

    #[test]
    fn test_replace_all_resets_state() {
        let directory = setup_directory();
        directory.signup("Chess Club", "x@mergington.edu").unwrap();

        let mut fresh = HashMap::new();
        fresh.insert("Chess Club".to_string(), chess_club());
        directory.replace_all(fresh);

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get("Chess Club").unwrap(), chess_club());
    }

    #[test]
    fn test_replace_all_drops_stale_and_overwrites_kept() {
        let directory = setup_directory();
        directory.signup("Chess Club", "x@mergington.edu").unwrap();

        let mut fresh = HashMap::new();
        fresh.insert("Chess Club".to_string(), chess_club());
        fresh.insert(
            "Debate Team".to_string(),
            ActivityRecord::new("Debate", "Fridays", 12, &[]),
        );
        directory.replace_all(fresh);

        let names: Vec<_> = directory.list().into_keys().collect();
        assert_eq!(names, vec!["Chess Club", "Debate Team"]);
        assert!(!directory
            .get("Chess Club")
            .unwrap()
            .has_participant("x@mergington.edu"));
    }

    #[test]
    fn test_replace_all_never_exposes_empty_directory() {
        let directory = setup_directory();
        let reader = directory.clone();
        let done = Arc::new(std::sync::atomic::AtomicBool::new(false));

        let watcher = {
            let done = done.clone();
            std::thread::spawn(move || {
                while !done.load(std::sync::atomic::Ordering::Acquire) {
                    assert!(!reader.list().is_empty());
                }
            })
        };

        for _ in 0..200 {
            let mut fresh = HashMap::new();
            fresh.insert("Chess Club".to_string(), chess_club());
            directory.replace_all(fresh);
        }
        done.store(true, std::sync::atomic::Ordering::Release);
        watcher.join().unwrap();
    }

    #[test]
    fn test_concurrent_identical_signups_register_once() {
        let directory = setup_directory();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let directory = directory.clone();
                std::thread::spawn(move || directory.signup("Chess Club", "race@mergington.edu"))
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(Result::is_ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(directory.get("Chess Club").unwrap().participants.len(), 3);
    }
}
