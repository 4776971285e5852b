//! Error types for the paystub engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure path in the engine. None of them are fatal: each one
//! hands control back to the caller with prior state left untouched.

use thiserror::Error;

/// The user-facing message for any failure while producing a PDF.
pub const PDF_GENERATION_FAILED: &str = "Failed to generate PDF. Please try again.";

/// The main error type for the paystub engine.
///
/// # Example
///
/// ```
/// use paystub_engine::error::PaystubError;
///
/// let error = PaystubError::ConfigNotFound {
///     path: "/missing/generator.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/generator.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PaystubError {
    /// Input was rejected before any state changed (e.g. a driver without a name).
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The driver store could not be written.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },

    /// Rendering, rasterization or PDF assembly failed.
    ///
    /// The display text is always [`PDF_GENERATION_FAILED`]; `reason` is kept
    /// for logging only.
    #[error("Failed to generate PDF. Please try again.")]
    PdfGeneration {
        /// The underlying cause.
        reason: String,
    },

    /// The remote paystub service returned an error or could not be reached.
    #[error("{message}")]
    Api {
        /// The HTTP status, if a response was received.
        status: Option<u16>,
        /// The server-provided or generic error message.
        message: String,
    },
}

impl PaystubError {
    /// Creates a validation error for `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a PDF generation error with an underlying reason.
    pub fn pdf_generation(reason: impl Into<String>) -> Self {
        Self::PdfGeneration {
            reason: reason.into(),
        }
    }
}

/// A type alias for Results that return PaystubError.
pub type PaystubResult<T> = Result<T, PaystubError>;
