//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading generator
//! settings and default rates from YAML files.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::api::resolve_base_url;
use crate::error::{PaystubError, PaystubResult};
use crate::models::{
    Category, IncentiveRates, PaystubRecord, PdfOptions, RouteRates, StatRate, DEFAULT_NOTES,
};
use crate::render::Branding;

use super::types::{GeneratorConfig, RatesConfig};

/// Loads and provides access to generator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/mdse/
/// ├── generator.yaml   # Branding, API, storage and PDF defaults
/// └── rates.yaml       # Default rates per category
/// ```
///
/// # Example
///
/// ```no_run
/// use paystub_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/mdse").unwrap();
///
/// let record = loader.default_record().unwrap();
/// println!("4-hour route rate: {}", record.routes.rates.four_hour_rate);
/// println!("API: {}", loader.api_base_url());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    dir: PathBuf,
    generator: GeneratorConfig,
    rates: RatesConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/mdse")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Either file is missing ([`PaystubError::ConfigNotFound`])
    /// - Either file contains invalid YAML or misses a required field
    /// - The default check area height is not an allowed height
    ///   (both [`PaystubError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> PaystubResult<Self> {
        let dir = path.as_ref();

        let generator_path = dir.join("generator.yaml");
        let generator = Self::load_yaml::<GeneratorConfig>(&generator_path)?;

        let rates_path = dir.join("rates.yaml");
        let rates = Self::load_yaml::<RatesConfig>(&rates_path)?;

        let pdf = PdfOptions {
            include_check_space: true,
            check_space_height: generator.pdf.check_space_height,
        };
        pdf.validate()
            .map_err(|e| PaystubError::ConfigParseError {
                path: generator_path.display().to_string(),
                message: e.to_string(),
            })?;

        info!(
            path = %dir.display(),
            organization = %generator.organization.name,
            "Loaded generator configuration"
        );

        Ok(Self {
            dir: dir.to_path_buf(),
            generator,
            rates,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PaystubResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PaystubError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PaystubError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// The parsed `generator.yaml`.
    pub fn generator(&self) -> &GeneratorConfig {
        &self.generator
    }

    /// The parsed `rates.yaml`.
    pub fn rates(&self) -> &RatesConfig {
        &self.rates
    }

    /// Header branding.
    pub fn branding(&self) -> Branding {
        Branding {
            name: self.generator.organization.name.clone(),
            logo_path: self.generator.organization.logo_path.clone(),
        }
    }

    /// Default PDF export options.
    pub fn pdf_options(&self) -> PdfOptions {
        PdfOptions {
            include_check_space: self.generator.pdf.include_check_space,
            check_space_height: self.generator.pdf.check_space_height,
        }
    }

    /// Base URL for the remote service; `PAYSTUB_API_URL` takes precedence.
    pub fn api_base_url(&self) -> String {
        resolve_base_url(Some(&self.generator.api.base_url))
    }

    /// Driver store path. Relative paths are resolved against the
    /// configuration directory.
    pub fn drivers_path(&self) -> PathBuf {
        let configured = Path::new(&self.generator.storage.drivers_path);
        if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            self.dir.join(configured)
        }
    }

    /// A blank paystub carrying the configured rates and notes.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paystub_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/mdse")?;
    /// let record = loader.default_record()?;
    /// assert_eq!(record.routes.quantities.four_hour_routes, 0);
    /// # Ok::<(), paystub_engine::error::PaystubError>(())
    /// ```
    pub fn default_record(&self) -> PaystubResult<PaystubRecord> {
        let rates = &self.rates;
        Ok(PaystubRecord {
            routes: Category::with_rates(RouteRates {
                four_hour_rate: self.rate("routes.four_hour", rates.routes.four_hour)?,
                six_hour_rate: self.rate("routes.six_hour", rates.routes.six_hour)?,
            }),
            incentives: Category::with_rates(IncentiveRates {
                pick_up_rate: self.rate("incentives.pick_up", rates.incentives.pick_up)?,
                gas_rate: self.rate("incentives.gas", rates.incentives.gas)?,
                rush_hour_rate: self.rate("incentives.rush_hour", rates.incentives.rush_hour)?,
                late_night_rate: self.rate("incentives.late_night", rates.incentives.late_night)?,
                high_quantity_rate: self
                    .rate("incentives.high_quantity", rates.incentives.high_quantity)?,
            }),
            stat_delivery: Category::with_rates(StatRate {
                mile_rate: self.rate("stat_delivery.mile", rates.stat_delivery.mile)?,
            }),
            notes: self
                .generator
                .notes
                .clone()
                .unwrap_or_else(|| DEFAULT_NOTES.to_string()),
            ..PaystubRecord::default()
        })
    }

    fn rate(&self, key: &str, value: Decimal) -> PaystubResult<f64> {
        value.to_f64().ok_or_else(|| PaystubError::ConfigParseError {
            path: self.dir.join("rates.yaml").display().to_string(),
            message: format!("rate '{}' is not representable: {}", key, value),
        })
    }
}
