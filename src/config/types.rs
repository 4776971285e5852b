//! Configuration types for the paystub generator.
//!
//! This module contains the strongly-typed structures deserialized from
//! `generator.yaml` and `rates.yaml`.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The organization printed in the paystub header.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationConfig {
    /// Organization name, used as the logo alt text.
    pub name: String,
    /// Path or URL of the logo image.
    pub logo_path: String,
}

/// Remote service settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the paystub service, e.g. `https://localhost:7154/api`.
    pub base_url: String,
}

/// Driver store settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the saved-driver JSON file.
    pub drivers_path: String,
}

/// Default PDF export options.
#[derive(Debug, Clone, Deserialize)]
pub struct PdfConfig {
    /// Reserve a check printing area by default.
    #[serde(default)]
    pub include_check_space: bool,
    /// Default check area height in inches.
    pub check_space_height: f64,
}

/// The `generator.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Header branding.
    pub organization: OrganizationConfig,
    /// Remote service settings.
    pub api: ApiConfig,
    /// Driver store settings.
    pub storage: StorageConfig,
    /// Default PDF options.
    pub pdf: PdfConfig,
    /// Notes pre-filled on a new paystub.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Default route rates.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRateConfig {
    /// Dollars per 4-hour route.
    pub four_hour: Decimal,
    /// Dollars per 6-hour route.
    pub six_hour: Decimal,
}

/// Default incentive rates.
#[derive(Debug, Clone, Deserialize)]
pub struct IncentiveRateConfig {
    /// Dollars per pick-up.
    pub pick_up: Decimal,
    /// Dollars per gas reimbursement.
    pub gas: Decimal,
    /// Dollars per rush-hour delivery.
    pub rush_hour: Decimal,
    /// Dollars per late-night delivery.
    pub late_night: Decimal,
    /// Dollars per high-quantity delivery.
    pub high_quantity: Decimal,
}

/// Default STAT delivery rate.
#[derive(Debug, Clone, Deserialize)]
pub struct StatRateConfig {
    /// Dollars per mile.
    pub mile: Decimal,
}

/// The `rates.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Route rates.
    pub routes: RouteRateConfig,
    /// Incentive rates.
    pub incentives: IncentiveRateConfig,
    /// STAT delivery rate.
    pub stat_delivery: StatRateConfig,
}
