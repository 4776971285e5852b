//! Configuration loading for the paystub generator.
//!
//! This module loads organization branding, remote service settings, the
//! driver store location, PDF defaults and default rates from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use paystub_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/mdse").unwrap();
//! println!("Organization: {}", config.branding().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ApiConfig, GeneratorConfig, IncentiveRateConfig, OrganizationConfig, PdfConfig, RatesConfig,
    RouteRateConfig, StatRateConfig, StorageConfig,
};
