//! The checker runs one claim through every oracle.
//!
//! Execution order is fixed and strictly sequential:
//! 1. Classification oracle → verdict (through the failure policy)
//! 2. Fact-check oracle
//! 3. News oracle (with its fallback ladder)
//! 4. Aggregation (deterministic, in `claimcheck-core`)
//!
//! No state is shared between checks; every call to [`Checker::check`] is
//! independent.

use std::sync::Arc;
use thiserror::Error;

use claimcheck_core::{interpret, CheckReport, Claim, FailurePolicy};

use crate::config::{ConfigError, RuntimeConfig};
use crate::oracles::{
    build_http_client, FactCheckOracle, GoogleFactCheck, HuggingFaceClassifier, NewsApi,
    NewsOracle, OracleCredentials, VerdictOracle,
};

/// Errors from building a checker.
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("Oracle not configured: {0}")]
    OracleNotConfigured(&'static str),
}

/// Runs claims through the classification, fact-check and news oracles.
pub struct Checker {
    classifier: Arc<dyn VerdictOracle>,
    fact_check: Arc<dyn FactCheckOracle>,
    news: Arc<dyn NewsOracle>,
    failure_policy: FailurePolicy,
}

impl Checker {
    /// Build the production checker.
    ///
    /// Credentials are resolved by the caller so a missing key is reported
    /// before anything is constructed.
    pub fn from_config(
        config: &RuntimeConfig,
        credentials: OracleCredentials,
    ) -> Result<Self, RuntimeError> {
        config.validate()?;

        let client = build_http_client(config.timeout)
            .map_err(|e| RuntimeError::HttpClient(e.to_string()))?;

        let OracleCredentials {
            classifier,
            fact_check,
            news,
        } = credentials;

        CheckerBuilder::new()
            .classifier(Arc::new(
                HuggingFaceClassifier::new(client.clone(), classifier)
                    .with_endpoint(config.classifier_url()),
            ))
            .fact_check(Arc::new(
                GoogleFactCheck::new(client.clone(), fact_check)
                    .with_endpoint(config.fact_check_url()),
            ))
            .news(Arc::new(
                NewsApi::new(client, news).with_endpoint(config.news_url()),
            ))
            .failure_policy(config.failure_policy)
            .build()
    }

    /// Check one claim.
    ///
    /// Never fails: oracle problems are already folded into the outcomes,
    /// and the evidence set always holds at least one citation.
    pub async fn check(&self, claim: &Claim) -> CheckReport {
        tracing::info!(
            classifier = self.classifier.name(),
            fact_check = self.fact_check.name(),
            news = self.news.name(),
            "Checking claim"
        );

        let classification = self.classifier.classify(claim).await;
        let verdict = interpret(&classification, self.failure_policy);

        let fact_check = self.fact_check.search(claim).await;
        let news = self.news.search(claim).await;

        let report = CheckReport::assemble(claim.clone(), verdict, &fact_check, &news);

        tracing::info!(
            label = %report.verdict.label,
            confidence = report.verdict.confidence,
            degraded = report.verdict.degraded,
            citations = report.evidence.len(),
            news_tier = ?report.news_tier,
            "Check complete"
        );

        report
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }
}

/// Builder for [`Checker`].
pub struct CheckerBuilder {
    classifier: Option<Arc<dyn VerdictOracle>>,
    fact_check: Option<Arc<dyn FactCheckOracle>>,
    news: Option<Arc<dyn NewsOracle>>,
    failure_policy: FailurePolicy,
}

impl CheckerBuilder {
    pub fn new() -> Self {
        Self {
            classifier: None,
            fact_check: None,
            news: None,
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn classifier(mut self, oracle: Arc<dyn VerdictOracle>) -> Self {
        self.classifier = Some(oracle);
        self
    }

    pub fn fact_check(mut self, oracle: Arc<dyn FactCheckOracle>) -> Self {
        self.fact_check = Some(oracle);
        self
    }

    pub fn news(mut self, oracle: Arc<dyn NewsOracle>) -> Self {
        self.news = Some(oracle);
        self
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Build the checker. All three oracles are required.
    pub fn build(self) -> Result<Checker, RuntimeError> {
        Ok(Checker {
            classifier: self
                .classifier
                .ok_or(RuntimeError::OracleNotConfigured("classifier"))?,
            fact_check: self
                .fact_check
                .ok_or(RuntimeError::OracleNotConfigured("fact_check"))?,
            news: self.news.ok_or(RuntimeError::OracleNotConfigured("news"))?,
            failure_policy: self.failure_policy,
        })
    }
}

impl Default for CheckerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
