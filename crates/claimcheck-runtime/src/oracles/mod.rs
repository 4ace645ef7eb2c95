//! Oracle abstractions for claimcheck-runtime.
//!
//! An oracle is a third-party HTTP service treated as a black box. This
//! module defines one trait per oracle role and ships the production
//! adapters:
//!
//! - [`HuggingFaceClassifier`]: zero-shot "real"/"fake" classification
//! - [`GoogleFactCheck`]: Google Fact Check Tools claim search
//! - [`NewsApi`]: NewsAPI search with the Google News fallback
//!
//! ## Failure contract
//!
//! Oracle methods are infallible. Transport errors, error statuses and
//! malformed payloads are folded into the `Failure`/`Failed` variant of the
//! returned outcome and logged at `warn`. Nothing escapes the adapter.
//!
//! ## Security
//!
//! Adapters hold their key as an [`ApiCredential`]; see [`secrets`].

use async_trait::async_trait;
use claimcheck_core::{Claim, ClassificationOutcome, FactCheckOutcome, NewsOutcome};
use std::time::Duration;
use thiserror::Error;

mod classifier;
mod factcheck;
mod news;
pub mod secrets;

pub use classifier::{HuggingFaceClassifier, DEFAULT_CLASSIFIER_URL};
pub use factcheck::{GoogleFactCheck, DEFAULT_FACT_CHECK_URL};
pub use news::{NewsApi, DEFAULT_NEWS_URL};
pub use secrets::{
    ApiCredential, CredentialSource, CredentialStatus, OracleCredentials,
    GOOGLE_FACTCHECK_API_KEY_ENV, HF_API_TOKEN_ENV, NEWS_API_KEY_ENV,
};

/// Errors raised inside an adapter before being folded into an outcome.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    ParseError(String),

    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for OracleError {
    fn from(e: reqwest::Error) -> Self {
        // Query strings carry API keys
        let e = e.without_url();
        if e.is_timeout() {
            OracleError::Timeout
        } else if e.is_decode() {
            OracleError::ParseError(e.to_string())
        } else {
            OracleError::HttpError(e.to_string())
        }
    }
}

/// Build the HTTP client shared by one checker's adapters.
///
/// With `timeout = None` the transport default applies.
pub fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, OracleError> {
    let mut builder = reqwest::Client::builder()
        .user_agent(concat!("claimcheck/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| OracleError::HttpError(e.to_string()))
}

/// Classifies a claim as real or fake.
#[async_trait]
pub trait VerdictOracle: Send + Sync {
    async fn classify(&self, claim: &Claim) -> ClassificationOutcome;

    /// Oracle name for logs.
    fn name(&self) -> &str;
}

/// Looks a claim up in a fact-check aggregation service.
#[async_trait]
pub trait FactCheckOracle: Send + Sync {
    async fn search(&self, claim: &Claim) -> FactCheckOutcome;

    fn name(&self) -> &str;
}

/// Looks a claim up in a news search service, with fallback.
#[async_trait]
pub trait NewsOracle: Send + Sync {
    async fn search(&self, claim: &Claim) -> NewsOutcome;

    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_without_timeout() {
        assert!(build_http_client(None).is_ok());
    }

    #[test]
    fn test_build_client_with_timeout() {
        assert!(build_http_client(Some(Duration::from_secs(5))).is_ok());
    }

    #[test]
    fn test_api_error_display() {
        let err = OracleError::ApiError {
            status: 503,
            message: "model loading".to_string(),
        };
        assert_eq!(err.to_string(), "API error 503: model loading");
    }
}
