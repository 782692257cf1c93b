//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from the `directories` crate
//!    (e.g. `~/.config/expense-tracker` on Linux)
//!
//! Every user profile gets its own data directory under `users/`.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TrackerError;
use crate::models::UserId;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Directory holding every user profile
    pub fn users_dir(&self) -> PathBuf {
        self.base_dir.join("users")
    }

    /// Data directory for a single user profile
    pub fn user_dir(&self, user: &UserId) -> PathBuf {
        self.users_dir().join(user.as_str())
    }

    /// Get the path to a user's transactions.json
    pub fn transactions_file(&self, user: &UserId) -> PathBuf {
        self.user_dir(user).join("transactions.json")
    }

    /// Get the path to a user's budgets.json (one document per month)
    pub fn budgets_file(&self, user: &UserId) -> PathBuf {
        self.user_dir(user).join("budgets.json")
    }

    /// Ensure the base directory and the user's data directory exist
    pub fn ensure_directories(&self, user: Option<&UserId>) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create base directory: {}", e)))?;

        if let Some(user) = user {
            std::fs::create_dir_all(self.user_dir(user)).map_err(|e| {
                TrackerError::Io(format!("Failed to create user directory: {}", e))
            })?;
        }

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    ProjectDirs::from("com", "expense-tracker", "expense-tracker")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TrackerError::Config("Could not determine config directory".into()))
}
