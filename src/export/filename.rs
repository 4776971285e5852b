//! Conventional export filenames.

use chrono::NaiveDate;

use crate::models::DriverInfo;

/// Builds `paystub_<first>_<last>_<YYYY-MM-DD>.pdf`.
///
/// Runs of whitespace in the name become a single `_` and path separators
/// become `_`, so the name always stays inside the target directory. The
/// date is the pay-period end when it parses, otherwise `today`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use paystub_engine::export::export_filename;
/// use paystub_engine::models::DriverInfo;
///
/// let info = DriverInfo {
///     first_name: "Mary Ann".to_string(),
///     last_name: "Smith".to_string(),
///     pay_period_end: "2024-01-07".to_string(),
///     ..DriverInfo::default()
/// };
/// let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
///
/// assert_eq!(export_filename(&info, today), "paystub_Mary_Ann_Smith_2024-01-07.pdf");
/// ```
pub fn export_filename(info: &DriverInfo, today: NaiveDate) -> String {
    let name = sanitize_name(&format!("{}_{}", info.first_name, info.last_name));
    let date = info.pay_period_end_date().unwrap_or(today);
    format!("paystub_{}_{}.pdf", name, date.format("%Y-%m-%d"))
}

/// Replaces each run of whitespace with a single `_` and each `/` or `\`
/// with `_`.
pub(crate) fn sanitize_name(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch == '/' || ch == '\\' {
            out.push('_');
            in_run = false;
        } else if ch.is_whitespace() {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}
