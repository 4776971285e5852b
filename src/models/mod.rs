//! Core data models for the paystub engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod categories;
mod driver;
mod line_item;
mod paystub;

pub use calculation_result::PaystubCalculation;
pub use categories::{IncentiveRates, Incentives, RouteRates, Routes, StatDelivery, StatRate};
pub use driver::{Driver, DriverInfo, parse_iso_date};
pub use line_item::{
    Category, CategoryFields, CustomItem, LineField, LineItemCategory, NamedLine,
};
pub use paystub::{DEFAULT_NOTES, PaystubRecord, PdfOptions};
