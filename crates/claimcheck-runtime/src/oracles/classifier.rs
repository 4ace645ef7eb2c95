//! Hugging Face zero-shot classification oracle.
//!
//! Sends the claim with candidate labels `["real", "fake"]` and expects
//! `{"labels": [...], "scores": [...]}` back, most confident first.

use async_trait::async_trait;
use claimcheck_core::{Claim, ClassificationOutcome, Label};
use serde::{Deserialize, Serialize};

use super::{secrets::ApiCredential, OracleError, VerdictOracle};

/// Default inference endpoint.
pub const DEFAULT_CLASSIFIER_URL: &str =
    "https://api-inference.huggingface.co/models/valhalla/distilbart-mnli-12-1";

/// Zero-shot classifier on the Hugging Face inference API.
pub struct HuggingFaceClassifier {
    credential: ApiCredential,
    endpoint: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for HuggingFaceClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceClassifier")
            .field("credential", &self.credential)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl HuggingFaceClassifier {
    pub fn new(client: reqwest::Client, credential: ApiCredential) -> Self {
        Self {
            credential,
            endpoint: DEFAULT_CLASSIFIER_URL.to_string(),
            client,
        }
    }

    /// Point at a different model or a mock server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn request(&self, claim: &Claim) -> Result<ClassificationOutcome, OracleError> {
        let request = ZeroShotRequest {
            inputs: claim.as_str(),
            parameters: ZeroShotParameters {
                candidate_labels: &Label::CANDIDATES,
            },
        };

        tracing::debug!(endpoint = %self.endpoint, "Querying classification oracle");

        // Only expose the credential here, at the point of use
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.credential.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(OracleError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: ZeroShotResponse =
            serde_json::from_str(&body).map_err(|e| OracleError::ParseError(e.to_string()))?;

        if let Some(error) = parsed.error {
            return Ok(ClassificationOutcome::failure(error));
        }

        Ok(ClassificationOutcome::from_parts(parsed.labels, parsed.scores))
    }
}

#[derive(Debug, Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters<'a>,
}

#[derive(Debug, Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
struct ZeroShotResponse {
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    scores: Vec<f64>,
    #[serde(default)]
    error: Option<String>,
}

#[async_trait]
impl VerdictOracle for HuggingFaceClassifier {
    async fn classify(&self, claim: &Claim) -> ClassificationOutcome {
        match self.request(claim).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(oracle = self.name(), error = %e, "Classification oracle failed");
                let message = match e {
                    OracleError::ApiError { status, message } => {
                        format!("HF API Error {}: {}", status, message)
                    }
                    other => other.to_string(),
                };
                ClassificationOutcome::failure(message)
            }
        }
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}
