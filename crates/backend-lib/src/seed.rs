// ============================
// crates/backend-lib/src/seed.rs
// ============================
//! Startup activity set, built in or read from a JSON file.
use crate::directory::ActivityName;
use crate::error::AppError;
use mergington_common::ActivityRecord;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// The activities Mergington High School offers out of the box
pub fn default_activities() -> HashMap<ActivityName, ActivityRecord> {
    [
        (
            "Chess Club",
            ActivityRecord::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            ActivityRecord::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            ActivityRecord::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team",
            ActivityRecord::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            ActivityRecord::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Art Club",
            ActivityRecord::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            ActivityRecord::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        ),
        (
            "Math Club",
            ActivityRecord::new(
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            ActivityRecord::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ]
    .into_iter()
    .map(|(name, record)| (name.to_string(), record))
    .collect()
}

/// Parse a JSON object of activity name -> record
pub fn parse_activities(json: &str) -> Result<HashMap<ActivityName, ActivityRecord>, AppError> {
    let activities: HashMap<ActivityName, ActivityRecord> = serde_json::from_str(json)?;
    for (name, record) in &activities {
        validate_record(name, record)?;
    }
    Ok(activities)
}

/// Read and validate a seed file
pub fn load_activities(path: &Path) -> Result<HashMap<ActivityName, ActivityRecord>, AppError> {
    let content = std::fs::read_to_string(path)?;
    parse_activities(&content)
}

fn validate_record(name: &str, record: &ActivityRecord) -> Result<(), AppError> {
    if record.max_participants == 0 {
        return Err(AppError::InvalidSeed(format!(
            "{name}: max_participants must be positive"
        )));
    }

    let mut seen = HashSet::new();
    if let Some(dup) = record.participants.iter().find(|p| !seen.insert(p.as_str())) {
        return Err(AppError::InvalidSeed(format!(
            "{name}: participant {dup} listed twice"
        )));
    }

    Ok(())
}
