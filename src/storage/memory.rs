//! In-memory driver store.

use std::sync::{Mutex, PoisonError};

use crate::error::PaystubResult;
use crate::models::Driver;

use super::repository::DriverRepository;

/// A [`DriverRepository`] that keeps drivers in process memory.
///
/// Useful for tests and for sessions that should not touch disk.
///
/// # Example
///
/// ```
/// use paystub_engine::models::Driver;
/// use paystub_engine::storage::{DriverRepository, InMemoryDriverStore};
///
/// let store = InMemoryDriverStore::default();
/// store.add(Driver {
///     id: "driver-1".to_string(),
///     first_name: "Ada".to_string(),
///     last_name: "Lovelace".to_string(),
///     address: String::new(),
///     ssn: String::new(),
/// }).unwrap();
///
/// assert_eq!(store.load_all().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDriverStore {
    drivers: Mutex<Vec<Driver>>,
}

impl InMemoryDriverStore {
    /// Creates a store pre-populated with `drivers`.
    pub fn with_drivers(drivers: Vec<Driver>) -> Self {
        Self {
            drivers: Mutex::new(drivers),
        }
    }
}

impl DriverRepository for InMemoryDriverStore {
    fn load_all(&self) -> Vec<Driver> {
        self.drivers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save_all(&self, drivers: &[Driver]) -> PaystubResult<()> {
        *self.drivers.lock().unwrap_or_else(PoisonError::into_inner) = drivers.to_vec();
        Ok(())
    }
}
