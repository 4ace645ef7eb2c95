//! NewsAPI oracle with the Google News fallback.
//!
//! Degradation ladder, in order:
//! 1. Non-empty `articles` → up to 3 article citations
//! 2. Anything else that parses (empty list, error body) → one Google News
//!    search link for the claim
//! 3. Transport error or unparseable body → failed, no citations

use async_trait::async_trait;
use claimcheck_core::{
    Citation, CitationBuilder, CitationOrigin, Claim, NewsOutcome, MAX_CITATIONS_PER_ORACLE,
};
use serde::Deserialize;

use super::{secrets::ApiCredential, NewsOracle, OracleError};

/// Default search endpoint.
pub const DEFAULT_NEWS_URL: &str = "https://newsapi.org/v2/everything";

/// NewsAPI `everything` search.
pub struct NewsApi {
    credential: ApiCredential,
    endpoint: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for NewsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApi")
            .field("credential", &self.credential)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl NewsApi {
    pub fn new(client: reqwest::Client, credential: ApiCredential) -> Self {
        Self {
            credential,
            endpoint: DEFAULT_NEWS_URL.to_string(),
            client,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn request(&self, claim: &Claim) -> Result<Vec<Citation>, OracleError> {
        tracing::debug!(endpoint = %self.endpoint, "Querying news oracle");

        let page_size = MAX_CITATIONS_PER_ORACLE.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", claim.as_str()),
                ("apiKey", self.credential.expose()),
                ("language", "en"),
                ("sortBy", "relevancy"),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await?;

        let body = response.text().await?;
        let parsed: NewsResponse =
            serde_json::from_str(&body).map_err(|e| OracleError::ParseError(e.to_string()))?;

        if parsed.status.as_deref() == Some("error") {
            tracing::warn!(
                code = parsed.code.as_deref().unwrap_or("unknown"),
                message = parsed.message.as_deref().unwrap_or(""),
                "News oracle returned an error body"
            );
        }

        Ok(citations_from(parsed))
    }
}

fn citations_from(response: NewsResponse) -> Vec<Citation> {
    response
        .articles
        .unwrap_or_default()
        .into_iter()
        .take(MAX_CITATIONS_PER_ORACLE)
        .map(|article| {
            CitationBuilder::new(CitationOrigin::News)
                .text(article.title)
                .url(article.url)
                .source(article.source.and_then(|s| s.name))
                .build()
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Option<Vec<Article>>,
}

#[derive(Debug, Deserialize)]
struct Article {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    source: Option<ArticleSource>,
}

#[derive(Debug, Deserialize)]
struct ArticleSource {
    #[serde(default)]
    name: Option<String>,
}

#[async_trait]
impl NewsOracle for NewsApi {
    async fn search(&self, claim: &Claim) -> NewsOutcome {
        match self.request(claim).await {
            Ok(articles) => {
                if articles.is_empty() {
                    tracing::info!("News oracle found no articles, using Google News search link");
                }
                NewsOutcome::from_articles(claim.as_str(), articles)
            }
            Err(e) => {
                tracing::warn!(oracle = self.name(), error = %e, "News oracle failed");
                NewsOutcome::failed(e.to_string())
            }
        }
    }

    fn name(&self) -> &str {
        "newsapi"
    }
}
