//! Totals calculation for the paystub engine.
//!
//! This module turns itemized entries into category subtotals and a grand
//! total. Every function here is pure; nothing is rounded until display.

mod category_total;
mod grand_total;
mod totals;

pub use category_total::compute_category_total;
pub use grand_total::compute_grand_total;
pub use totals::calculate_totals;
