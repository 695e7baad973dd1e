// ================
// common/src/lib.rs
// ================
//! Common types and structures
//! shared between the Mergington activities server and its clients.
//! This module defines the JSON shapes of the HTTP API.

use serde::{Deserialize, Serialize};

/// Participant identifier (an email-like string, not validated)
pub type ParticipantId = String;

/// A single extracurricular activity as held by the directory
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    /// Free-text description
    pub description: String,
    /// Human-readable schedule, e.g. "Fridays, 3:30 PM - 5:00 PM"
    pub schedule: String,
    /// Capacity of the activity
    pub max_participants: u32,
    /// Registered participants in signup order
    #[serde(default)]
    pub participants: Vec<ParticipantId>,
}

impl ActivityRecord {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    /// Number of registered participants
    pub fn current_participants(&self) -> usize {
        self.participants.len()
    }

    /// Remaining capacity. Negative when the activity is overbooked.
    pub fn available_spots(&self) -> i64 {
        i64::from(self.max_participants) - self.current_participants() as i64
    }

    /// Check whether a participant is on the roster
    pub fn has_participant(&self, participant: &str) -> bool {
        self.participants.iter().any(|p| p == participant)
    }

    /// Snapshot this record together with its derived counters
    pub fn to_view(&self) -> ActivityView {
        ActivityView {
            current_participants: self.current_participants(),
            available_spots: self.available_spots(),
            record: self.clone(),
        }
    }
}

/// Activity as returned by `GET /activities`
///
/// The counters are computed when the view is built and never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActivityView {
    #[serde(flatten)]
    pub record: ActivityRecord,
    /// `participants.len()` at snapshot time
    pub current_participants: usize,
    /// `max_participants - current_participants` at snapshot time
    pub available_spots: i64,
}

/// Success body for signup / unregister
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body, `{"detail": "..."}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}
