//! JSON file driver store.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{PaystubError, PaystubResult};
use crate::models::Driver;

use super::repository::DriverRepository;

/// A [`DriverRepository`] backed by a single JSON file.
///
/// The file holds a JSON array of drivers with camelCase fields
/// (`id`, `firstName`, `lastName`, `address`, `ssn`). Writes replace the
/// file atomically.
#[derive(Debug, Clone)]
pub struct JsonFileDriverStore {
    path: PathBuf,
}

impl JsonFileDriverStore {
    /// Creates a store reading and writing `path`.
    ///
    /// The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, action: &str, error: impl std::fmt::Display) -> PaystubError {
        PaystubError::Storage {
            message: format!("{} {}: {}", action, self.path.display(), error),
        }
    }
}

impl DriverRepository for JsonFileDriverStore {
    fn load_all(&self) -> Vec<Driver> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No driver store yet");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Unreadable driver store, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Driver>>(&content) {
            Ok(drivers) => drivers,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Corrupt driver store, starting empty");
                Vec::new()
            }
        }
    }

    fn save_all(&self, drivers: &[Driver]) -> PaystubResult<()> {
        let json = serde_json::to_vec_pretty(drivers)
            .map_err(|e| self.storage_error("serializing", e))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.storage_error("creating directory for", e))?;

        let mut file =
            NamedTempFile::new_in(dir).map_err(|e| self.storage_error("writing", e))?;
        file.write_all(&json)
            .map_err(|e| self.storage_error("writing", e))?;
        file.persist(&self.path)
            .map_err(|e| self.storage_error("replacing", e.error))?;

        debug!(path = %self.path.display(), count = drivers.len(), "Saved driver store");
        Ok(())
    }
}
