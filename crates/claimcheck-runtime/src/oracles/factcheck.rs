//! Google Fact Check Tools oracle.
//!
//! `GET claims:search?query=<claim>&key=<key>`. Each matched claim yields one
//! citation built from its first `claimReview` entry. The HTTP status is not
//! inspected: an error body simply has no `claims` and counts as no results.

use async_trait::async_trait;
use claimcheck_core::{
    Citation, CitationBuilder, CitationOrigin, Claim, FactCheckOutcome, MAX_CITATIONS_PER_ORACLE,
};
use serde::Deserialize;

use super::{secrets::ApiCredential, FactCheckOracle, OracleError};

/// Default claim search endpoint.
pub const DEFAULT_FACT_CHECK_URL: &str =
    "https://factchecktools.googleapis.com/v1alpha1/claims:search";

/// Google Fact Check Tools claim search.
pub struct GoogleFactCheck {
    credential: ApiCredential,
    endpoint: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for GoogleFactCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleFactCheck")
            .field("credential", &self.credential)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl GoogleFactCheck {
    pub fn new(client: reqwest::Client, credential: ApiCredential) -> Self {
        Self {
            credential,
            endpoint: DEFAULT_FACT_CHECK_URL.to_string(),
            client,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn request(&self, claim: &Claim) -> Result<Vec<Citation>, OracleError> {
        tracing::debug!(endpoint = %self.endpoint, "Querying fact-check oracle");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", claim.as_str()), ("key", self.credential.expose())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let parsed: FactCheckResponse =
            serde_json::from_str(&body).map_err(|e| OracleError::ParseError(e.to_string()))?;

        if parsed.claims.is_none() && !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Fact-check oracle returned an error body");
        }

        Ok(citations_from(parsed))
    }
}

fn citations_from(response: FactCheckResponse) -> Vec<Citation> {
    response
        .claims
        .unwrap_or_default()
        .into_iter()
        .take(MAX_CITATIONS_PER_ORACLE)
        .map(|entry| {
            let review = entry.claim_review.unwrap_or_default().into_iter().next();
            let (url, publisher) = match review {
                Some(review) => (review.url, review.publisher.and_then(|p| p.name)),
                None => (None, None),
            };
            CitationBuilder::new(CitationOrigin::FactCheck)
                .text(entry.text)
                .url(url)
                .source(publisher)
                .build()
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct FactCheckResponse {
    #[serde(default)]
    claims: Option<Vec<ClaimEntry>>,
}

#[derive(Debug, Deserialize)]
struct ClaimEntry {
    #[serde(default)]
    text: Option<String>,
    #[serde(default, rename = "claimReview")]
    claim_review: Option<Vec<ClaimReview>>,
}

#[derive(Debug, Deserialize)]
struct ClaimReview {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    publisher: Option<Publisher>,
}

#[derive(Debug, Deserialize)]
struct Publisher {
    #[serde(default)]
    name: Option<String>,
}

#[async_trait]
impl FactCheckOracle for GoogleFactCheck {
    async fn search(&self, claim: &Claim) -> FactCheckOutcome {
        match self.request(claim).await {
            Ok(citations) => {
                tracing::debug!(count = citations.len(), "Fact-check oracle answered");
                FactCheckOutcome::claims(citations)
            }
            Err(e) => {
                tracing::warn!(oracle = self.name(), error = %e, "Fact-check oracle failed");
                FactCheckOutcome::failed(e.to_string())
            }
        }
    }

    fn name(&self) -> &str {
        "google-factcheck"
    }
}
