//! Path resolution for tempo configuration and data files.
//!
//! All tempo data is stored in `~/.tempo/`:
//! - `config.yaml` - Main configuration file
//! - `tempo.db` - SQLite database for tasks and session history

use std::path::PathBuf;

use crate::error::TempoError;

/// Paths to tempo configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tempo/`
    pub root: PathBuf,
    /// Config file: `~/.tempo/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.tempo/tempo.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TempoError> {
        let home = std::env::var("HOME")
            .map_err(|_| TempoError::Config("Could not determine home directory".to_string()))?;

        let root = PathBuf::from(home).join(".tempo");

        Ok(Self {
            config_file: root.join("config.yaml"),
            database: root.join("tempo.db"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("tempo.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TempoError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TempoError::Config(format!("Failed to create directory {:?}: {}", self.root, e))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".tempo"))
        })
    }
}
