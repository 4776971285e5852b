//! Saved driver profiles.
//!
//! [`DriverBook`] is the service the rest of the crate talks to. It sits on a
//! [`DriverRepository`], of which two ship here: [`JsonFileDriverStore`] for
//! on-disk persistence and [`InMemoryDriverStore`] for tests and ephemeral
//! sessions.

mod drivers;
mod json_file;
mod memory;
mod repository;

pub use drivers::DriverBook;
pub use json_file::JsonFileDriverStore;
pub use memory::InMemoryDriverStore;
pub use repository::DriverRepository;
