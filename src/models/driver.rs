//! Driver models.
//!
//! This module defines [`DriverInfo`], the identity and pay-period fields
//! entered for one paystub, and [`Driver`], a saved driver profile.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity and pay-period fields for one paystub.
///
/// Dates are kept as the ISO 8601 strings the form produced; an empty
/// string means the bound was not specified.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DriverInfo {
    /// The driver's first name.
    pub first_name: String,
    /// The driver's last name.
    pub last_name: String,
    /// The driver's mailing address.
    pub address: String,
    /// Last four digits of the SSN (0-4 characters, not validated).
    pub ssn: String,
    /// First day of the pay period (`YYYY-MM-DD`), or empty.
    pub pay_period_start: String,
    /// Last day of the pay period (`YYYY-MM-DD`), or empty.
    pub pay_period_end: String,
}

impl DriverInfo {
    /// Fills the form from a saved driver.
    ///
    /// Identity fields are copied; the pay period is cleared because a
    /// saved profile never carries one.
    ///
    /// # Example
    ///
    /// ```
    /// use paystub_engine::models::{Driver, DriverInfo};
    ///
    /// let driver = Driver {
    ///     id: "driver-1".to_string(),
    ///     first_name: "Ada".to_string(),
    ///     last_name: "Lovelace".to_string(),
    ///     address: "12 Analytical Way".to_string(),
    ///     ssn: "1815".to_string(),
    /// };
    ///
    /// let info = DriverInfo::from_driver(&driver);
    /// assert_eq!(info.first_name, "Ada");
    /// assert!(info.pay_period_end.is_empty());
    /// ```
    pub fn from_driver(driver: &Driver) -> Self {
        Self {
            first_name: driver.first_name.clone(),
            last_name: driver.last_name.clone(),
            address: driver.address.clone(),
            ssn: driver.ssn.clone(),
            pay_period_start: String::new(),
            pay_period_end: String::new(),
        }
    }

    /// `first_name + " " + last_name`, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// True when both first and last name contain non-whitespace text.
    pub fn has_name(&self) -> bool {
        !self.first_name.trim().is_empty() && !self.last_name.trim().is_empty()
    }

    /// The parsed pay-period start, if present and valid.
    pub fn pay_period_start_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.pay_period_start)
    }

    /// The parsed pay-period end, if present and valid.
    pub fn pay_period_end_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.pay_period_end)
    }
}

/// Parses an ISO 8601 calendar date or an RFC 3339 timestamp.
///
/// Timestamps keep their own calendar date; no timezone conversion is done.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// A saved driver profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    /// Unique identifier (`driver-<uuid>`).
    pub id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Mailing address, possibly empty.
    #[serde(default)]
    pub address: String,
    /// Last four SSN digits, possibly empty.
    #[serde(default)]
    pub ssn: String,
}

impl Driver {
    /// Builds a new profile from form fields, trimming each one.
    pub fn from_info(info: &DriverInfo) -> Self {
        Self {
            id: format!("driver-{}", Uuid::new_v4()),
            first_name: info.first_name.trim().to_string(),
            last_name: info.last_name.trim().to_string(),
            address: info.address.trim().to_string(),
            ssn: info.ssn.trim().to_string(),
        }
    }

    /// The name shown in driver pickers.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
