//! HTTP client for the remote paystub service.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::{PaystubError, PaystubResult};
use crate::export::{sanitize_name, write_atomically};
use crate::models::PaystubCalculation;

use super::request::{ApiCreateTemplateRequest, ApiPaystubData};
use super::response::{error_message, ApiPaystubResponse, ApiPaystubTemplate, HealthStatus};

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://localhost:7154/api";

/// Environment variable that overrides the configured base URL.
pub const API_URL_ENV: &str = "PAYSTUB_API_URL";

/// Picks the base URL: `PAYSTUB_API_URL` if set and non-empty, then
/// `configured`, then [`DEFAULT_API_BASE_URL`].
pub fn resolve_base_url(configured: Option<&str>) -> String {
    std::env::var(API_URL_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// A thin client for the remote paystub service.
///
/// Every call is independent and is made exactly once. Non-success
/// responses and transport failures come back as [`PaystubError::Api`].
/// Cloning is cheap; clones share the connection pool.
///
/// # Example
///
/// ```no_run
/// use paystub_engine::api::{ApiPaystubData, PaystubApiClient};
/// use paystub_engine::models::PaystubRecord;
///
/// # async fn run() -> paystub_engine::error::PaystubResult<()> {
/// let client = PaystubApiClient::new("https://localhost:7154/api");
/// let record = PaystubRecord::default();
///
/// let totals = client.calculate_totals(&ApiPaystubData::from(&record)).await?;
/// println!("Server grand total: {}", totals.grand_total);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PaystubApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PaystubApiClient {
    /// Creates a client for `base_url` (e.g. `https://host/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Creates a client from `PAYSTUB_API_URL`, or the default base URL.
    pub fn from_env() -> Self {
        Self::new(resolve_base_url(None))
    }

    /// The base URL requests are made against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /Paystub/generate`: totals plus the server's copy of the data.
    pub async fn generate_paystub(&self, data: &ApiPaystubData) -> PaystubResult<ApiPaystubResponse> {
        let builder = self.request(Method::POST, "/Paystub/generate").json(data);
        self.fetch_json(builder, "/Paystub/generate").await
    }

    /// `POST /Paystub/generate-pdf`: the server-rendered PDF bytes.
    pub async fn generate_paystub_pdf(&self, data: &ApiPaystubData) -> PaystubResult<Vec<u8>> {
        let endpoint = "/Paystub/generate-pdf";
        let response = self
            .send(self.request(Method::POST, endpoint).json(data), endpoint)
            .await?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| body_error(status, endpoint, e))?;
        info!(endpoint, bytes = bytes.len(), "Received server PDF");
        Ok(bytes.to_vec())
    }

    /// `POST /Paystub/calculate`: server-computed totals.
    pub async fn calculate_totals(&self, data: &ApiPaystubData) -> PaystubResult<PaystubCalculation> {
        let builder = self.request(Method::POST, "/Paystub/calculate").json(data);
        self.fetch_json(builder, "/Paystub/calculate").await
    }

    /// `GET /Paystub/templates`.
    pub async fn get_templates(&self) -> PaystubResult<Vec<ApiPaystubTemplate>> {
        let builder = self.request(Method::GET, "/Paystub/templates");
        self.fetch_json(builder, "/Paystub/templates").await
    }

    /// `GET /Paystub/templates/{id}`.
    pub async fn get_template(&self, id: &str) -> PaystubResult<ApiPaystubTemplate> {
        let endpoint = format!("/Paystub/templates/{}", id);
        let builder = self.request(Method::GET, &endpoint);
        self.fetch_json(builder, &endpoint).await
    }

    /// `POST /Paystub/templates`: stores a template and returns it with its id.
    pub async fn save_template(
        &self,
        request: &ApiCreateTemplateRequest,
    ) -> PaystubResult<ApiPaystubTemplate> {
        let builder = self.request(Method::POST, "/Paystub/templates").json(request);
        self.fetch_json(builder, "/Paystub/templates").await
    }

    /// `DELETE /Paystub/templates/{id}`. Any response body is ignored.
    pub async fn delete_template(&self, id: &str) -> PaystubResult<()> {
        let endpoint = format!("/Paystub/templates/{}", id);
        self.send(self.request(Method::DELETE, &endpoint), &endpoint)
            .await?;
        Ok(())
    }

    /// `GET /Paystub/health`.
    pub async fn health_check(&self) -> PaystubResult<HealthStatus> {
        let builder = self.request(Method::GET, "/Paystub/health");
        self.fetch_json(builder, "/Paystub/health").await
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, endpoint))
            .header(CONTENT_TYPE, "application/json")
    }

    async fn send(&self, builder: RequestBuilder, endpoint: &str) -> PaystubResult<Response> {
        let response = builder.send().await.map_err(|e| {
            warn!(endpoint, error = %e, "Paystub service unreachable");
            PaystubError::Api {
                status: None,
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(endpoint, status = status.as_u16(), "Paystub service responded");
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = error_message(status.as_u16(), &body);
        warn!(endpoint, status = status.as_u16(), message = %message, "Paystub service returned an error");
        Err(PaystubError::Api {
            status: Some(status.as_u16()),
            message,
        })
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        endpoint: &str,
    ) -> PaystubResult<T> {
        let response = self.send(builder, endpoint).await?;
        let status = response.status().as_u16();
        response
            .json::<T>()
            .await
            .map_err(|e| body_error(status, endpoint, e))
    }
}

fn body_error(status: u16, endpoint: &str, error: reqwest::Error) -> PaystubError {
    warn!(endpoint, status, error = %error, "Unreadable response from paystub service");
    PaystubError::Api {
        status: Some(status),
        message: error.to_string(),
    }
}

/// Filename used by [`download_pdf`] when the caller gives none:
/// `paystub_<name>_<YYYY-MM-DD>.pdf`, with `driver` for a blank name.
pub fn default_download_filename(name: &str, today: NaiveDate) -> String {
    let name = sanitize_name(name);
    let name = if name.is_empty() { "driver" } else { name.as_str() };
    format!("paystub_{}_{}.pdf", name, today.format("%Y-%m-%d"))
}

/// Fetches the server-rendered PDF for `data` and writes it into `dir`.
///
/// Returns the path written. A failed request writes nothing, and the file
/// is written through a temporary sibling so it never appears half written.
pub async fn download_pdf(
    client: &PaystubApiClient,
    data: &ApiPaystubData,
    dir: impl AsRef<Path>,
    filename: Option<&str>,
) -> PaystubResult<PathBuf> {
    let bytes = client.generate_paystub_pdf(data).await?;

    let filename = match filename {
        Some(name) => name.to_string(),
        None => default_download_filename(&data.driver_info.name, Local::now().date_naive()),
    };
    let dir = dir.as_ref().to_path_buf();
    let path = dir.join(filename);

    let target = path.clone();
    let len = bytes.len();
    tokio::task::spawn_blocking(move || write_atomically(&dir, &target, &bytes))
        .await
        .map_err(|e| e.to_string())
        .and_then(|written| written.map_err(|e| e.to_string()))
        .map_err(|message| {
            warn!(path = %path.display(), error = %message, "Failed to save downloaded PDF");
            PaystubError::Storage {
                message: format!("writing {}: {}", path.display(), message),
            }
        })?;

    info!(path = %path.display(), bytes = len, "Downloaded paystub PDF");
    Ok(path)
}
