//! Response bodies from the remote paystub service.

use serde::{Deserialize, Serialize};

use crate::models::PaystubCalculation;

use super::request::ApiPaystubData;

/// Result of `POST /Paystub/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPaystubResponse {
    /// The paystub as the server stored it.
    pub data: ApiPaystubData,
    /// Server-computed totals.
    pub calculations: PaystubCalculation,
    /// Server timestamp, passed through as received.
    pub generated_at: String,
}

/// A saved template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPaystubTemplate {
    /// Server-assigned id.
    pub id: String,
    /// Template name.
    pub name: String,
    /// Creation timestamp, passed through as received.
    pub created_at: String,
    /// The stored paystub.
    pub data: ApiPaystubData,
}

/// Result of `GET /Paystub/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Service status, e.g. `Healthy`.
    pub status: String,
    /// Server timestamp.
    pub timestamp: String,
    /// Service name.
    pub service: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Message for a non-success response.
///
/// Uses the `error` field of a JSON body when there is one, otherwise
/// `HTTP error! status: <code>`.
pub(crate) fn error_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {}", status))
}
