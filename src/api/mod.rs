//! Client for the remote paystub REST service.
//!
//! The service offers server-side totals, PDF generation and named templates.
//! The client here is a pass-through: it sends [`ApiPaystubData`] built from a
//! local [`PaystubRecord`](crate::models::PaystubRecord) and returns the typed
//! responses. It holds no state beyond its HTTP connection pool.
//!
//! # Example
//!
//! ```no_run
//! use paystub_engine::api::{download_pdf, ApiPaystubData, PaystubApiClient};
//! use paystub_engine::models::PaystubRecord;
//!
//! # async fn run() -> paystub_engine::error::PaystubResult<()> {
//! let client = PaystubApiClient::from_env();
//! let data = ApiPaystubData::from(&PaystubRecord::default());
//!
//! let health = client.health_check().await?;
//! println!("{} is {}", health.service, health.status);
//!
//! let saved = download_pdf(&client, &data, "./out", None).await?;
//! println!("Saved {}", saved.display());
//! # Ok(())
//! # }
//! ```

mod client;
mod request;
mod response;

pub use client::{
    default_download_filename, download_pdf, resolve_base_url, PaystubApiClient, API_URL_ENV,
    DEFAULT_API_BASE_URL,
};
pub use request::{ApiCreateTemplateRequest, ApiDriverInfo, ApiPaystubData};
pub use response::{ApiPaystubResponse, ApiPaystubTemplate, HealthStatus};
