//! The saved-driver book.

use tracing::info;

use crate::error::{PaystubError, PaystubResult};
use crate::models::{Driver, DriverInfo};

use super::repository::DriverRepository;

/// Saved driver profiles backed by a [`DriverRepository`].
///
/// The list is loaded once when the book is opened. Every change is written
/// through to the repository before it becomes visible; if the write fails
/// the book is left exactly as it was.
///
/// # Example
///
/// ```
/// use paystub_engine::models::DriverInfo;
/// use paystub_engine::storage::{DriverBook, InMemoryDriverStore};
///
/// let mut book = DriverBook::open(InMemoryDriverStore::default());
///
/// let info = DriverInfo {
///     first_name: " Ada ".to_string(),
///     last_name: "Lovelace".to_string(),
///     ..DriverInfo::default()
/// };
/// let saved = book.save_driver(&info).unwrap();
///
/// assert_eq!(saved.first_name, "Ada");
/// assert_eq!(book.drivers().len(), 1);
/// ```
#[derive(Debug)]
pub struct DriverBook<R> {
    repository: R,
    drivers: Vec<Driver>,
}

impl<R: DriverRepository> DriverBook<R> {
    /// Opens the book, loading the stored drivers.
    pub fn open(repository: R) -> Self {
        let drivers = repository.load_all();
        Self {
            repository,
            drivers,
        }
    }

    /// Saved drivers in the order they were added.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Looks a driver up by id.
    pub fn find(&self, id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|driver| driver.id == id)
    }

    /// The backing repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Saves the identity fields of `info` as a new driver profile.
    ///
    /// First and last name are required; all fields are trimmed. The pay
    /// period is not saved.
    ///
    /// # Errors
    ///
    /// Returns [`PaystubError::Validation`] when either name is blank, or
    /// [`PaystubError::Storage`] when the list could not be written. The
    /// book is unchanged in both cases.
    pub fn save_driver(&mut self, info: &DriverInfo) -> PaystubResult<Driver> {
        if info.first_name.trim().is_empty() {
            return Err(PaystubError::validation("first_name", "is required"));
        }
        if info.last_name.trim().is_empty() {
            return Err(PaystubError::validation("last_name", "is required"));
        }

        let driver = Driver::from_info(info);
        let mut updated = self.drivers.clone();
        updated.push(driver.clone());
        self.commit(updated)?;

        info!(driver_id = %driver.id, name = %driver.display_name(), "Driver saved");
        Ok(driver)
    }

    /// Deletes the driver with `id`.
    ///
    /// Callers are expected to have confirmed the deletion with the user.
    /// Returns the removed driver, or `None` if no driver had that id.
    pub fn delete_driver(&mut self, id: &str) -> PaystubResult<Option<Driver>> {
        let Some(index) = self.drivers.iter().position(|driver| driver.id == id) else {
            return Ok(None);
        };

        let mut updated = self.drivers.clone();
        let removed = updated.remove(index);
        self.commit(updated)?;

        info!(driver_id = %removed.id, remaining = self.drivers.len(), "Driver deleted");
        Ok(Some(removed))
    }

    fn commit(&mut self, updated: Vec<Driver>) -> PaystubResult<()> {
        self.repository.save_all(&updated)?;
        self.drivers = updated;
        Ok(())
    }
}
