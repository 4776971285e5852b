//! Paystub Engine for independent courier drivers
//!
//! This crate computes itemized paystub totals (routes, incentives and STAT
//! delivery mileage), renders a fixed-layout paystub document, exports it as
//! a single-page Letter PDF with an optional check printing area, keeps a
//! book of saved drivers, and talks to a remote paystub REST service.
//!
//! # Example
//!
//! ```
//! use paystub_engine::calculation::calculate_totals;
//! use paystub_engine::models::PaystubRecord;
//! use paystub_engine::render::{render_document, render_html, Surface};
//!
//! let mut record = PaystubRecord::default();
//! record.routes.quantities.six_hour_routes = 1;
//! record.stat_delivery.quantities.miles = 25.0;
//!
//! let calc = calculate_totals(&record);
//! assert_eq!(calc.grand_total, 150.0);
//!
//! let html = render_html(&render_document(&record, &calc), Surface::Preview);
//! assert!(html.contains("$150.00"));
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod render;
pub mod storage;
