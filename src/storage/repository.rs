//! The driver repository abstraction.

use crate::error::PaystubResult;
use crate::models::Driver;

/// Persistent storage for saved driver profiles.
///
/// Stores deal in whole lists: [`load_all`](Self::load_all) returns every
/// profile in insertion order and [`save_all`](Self::save_all) replaces the
/// stored list. Loading never fails; unreadable data is treated as empty.
pub trait DriverRepository {
    /// Returns all stored drivers, or an empty list if nothing usable is stored.
    fn load_all(&self) -> Vec<Driver>;

    /// Replaces the stored list with `drivers`.
    fn save_all(&self, drivers: &[Driver]) -> PaystubResult<()>;

    /// Appends one driver and persists the result.
    fn add(&self, driver: Driver) -> PaystubResult<()> {
        let mut drivers = self.load_all();
        drivers.push(driver);
        self.save_all(&drivers)
    }

    /// Removes the driver with `id` and persists the result.
    ///
    /// Returns whether a driver was removed.
    fn remove(&self, id: &str) -> PaystubResult<bool> {
        let mut drivers = self.load_all();
        let before = drivers.len();
        drivers.retain(|driver| driver.id != id);
        let removed = drivers.len() != before;
        if removed {
            self.save_all(&drivers)?;
        }
        Ok(removed)
    }
}
