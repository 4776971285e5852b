//! Locale-independent date display.

use crate::models::parse_iso_date;

/// Formats an ISO date string as `MM/DD/YYYY`.
///
/// Returns `None` for an empty string. Text that is not a recognisable
/// date is returned as entered rather than dropped.
///
/// # Examples
///
/// ```
/// use paystub_engine::render::format_date;
///
/// assert_eq!(format_date("2026-03-14").as_deref(), Some("03/14/2026"));
/// assert_eq!(format_date(""), None);
/// ```
pub fn format_date(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match parse_iso_date(trimmed) {
        Some(date) => Some(date.format("%m/%d/%Y").to_string()),
        None => Some(trimmed.to_string()),
    }
}
