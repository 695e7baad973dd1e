// ============================
// crates/backend-lib/src/lib.rs
// ============================
//! Core backend-lib functionality for the Mergington activities server.

pub mod config;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod router;
pub mod seed;

use crate::config::Settings;
use crate::directory::ActivityDirectory;
use crate::error::AppError;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Activity directory
    pub directory: ActivityDirectory,
    /// Settings
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create a new application state around an existing directory
    pub fn new(directory: ActivityDirectory, settings: Settings) -> Self {
        Self {
            directory,
            settings: Arc::new(settings),
        }
    }

    /// Create the state with the activities named by `settings.seed_file`,
    /// or the built-in set when no seed file is configured
    pub fn from_settings(settings: Settings) -> Result<Self, AppError> {
        let activities = match &settings.seed_file {
            Some(path) => seed::load_activities(path)?,
            None => seed::default_activities(),
        };
        Ok(Self::new(ActivityDirectory::with_activities(activities), settings))
    }
}
