//! The paystub record and PDF export options.

use serde::{Deserialize, Serialize};

use crate::error::{PaystubError, PaystubResult};

use super::categories::{Incentives, Routes, StatDelivery};
use super::driver::DriverInfo;
use super::line_item::Category;

/// Notes printed on a new paystub unless configured otherwise.
pub const DEFAULT_NOTES: &str =
    "This payment is for services rendered as an independent contractor. No taxes have been withheld.";

/// Everything entered for one pay period.
///
/// # Example
///
/// ```
/// use paystub_engine::models::PaystubRecord;
///
/// let mut record = PaystubRecord::default();
/// record.routes.quantities.four_hour_routes = 2;
/// record.stat_delivery.quantities.miles = 12.5;
///
/// assert_eq!(record.routes.rates.four_hour_rate, 80.0);
/// assert!(record.notes.starts_with("This payment"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaystubRecord {
    /// Driver identity and pay period.
    pub driver_info: DriverInfo,
    /// Routes completed.
    pub routes: Category<Routes>,
    /// Incentives and bonuses.
    pub incentives: Category<Incentives>,
    /// STAT delivery mileage.
    pub stat_delivery: Category<StatDelivery>,
    /// Free-form notes; newline separated.
    #[serde(default)]
    pub notes: String,
}

impl Default for PaystubRecord {
    fn default() -> Self {
        Self {
            driver_info: DriverInfo::default(),
            routes: Category::default(),
            incentives: Category::default(),
            stat_delivery: Category::default(),
            notes: DEFAULT_NOTES.to_string(),
        }
    }
}

/// Rendering-only options for PDF export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfOptions {
    /// Whether to reserve a check printing area below the paystub.
    pub include_check_space: bool,
    /// Height of the check area in inches.
    pub check_space_height: f64,
}

impl PdfOptions {
    /// Heights accepted for the check area, in inches.
    pub const ALLOWED_HEIGHTS: [f64; 7] = [1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0];

    /// Default check area height in inches.
    pub const DEFAULT_CHECK_SPACE_HEIGHT: f64 = 2.0;

    /// Options with a check area of the given height.
    pub fn with_check_space(height: f64) -> Self {
        Self {
            include_check_space: true,
            check_space_height: height,
        }
    }

    /// Rejects heights outside 1-4 inches or off the half-inch grid.
    ///
    /// The height is only checked when the check area is enabled.
    pub fn validate(&self) -> PaystubResult<()> {
        if !self.include_check_space {
            return Ok(());
        }
        if Self::ALLOWED_HEIGHTS.contains(&self.check_space_height) {
            Ok(())
        } else {
            Err(PaystubError::validation(
                "check_space_height",
                format!(
                    "must be between 1 and 4 inches in 0.5 inch steps, got {}",
                    self.check_space_height
                ),
            ))
        }
    }
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            include_check_space: false,
            check_space_height: Self::DEFAULT_CHECK_SPACE_HEIGHT,
        }
    }
}
