//! Citations and the evidence set shown to the user.
//!
//! A citation is the triple (display text, URL, source name). Insertion
//! order is the display order: fact-check citations come before news
//! citations. Nothing is deduplicated.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Default display text when an oracle omits a title or claim text.
pub const MISSING_TEXT: &str = "N/A";

/// Default URL when an oracle omits a link.
pub const MISSING_URL: &str = "#";

/// Default source name when an oracle omits a publisher.
pub const MISSING_SOURCE: &str = "Unknown";

/// Base of the Google News search URL used by both fallbacks.
pub const GOOGLE_NEWS_SEARCH_BASE: &str = "https://news.google.com/search?q=";

/// Source name used by both fallbacks.
pub const GOOGLE_NEWS_SOURCE: &str = "Google News";

/// Title of the stand-in produced when the news oracle finds nothing.
pub const SEARCH_LINK_TITLE: &str = "Google News Search";

/// Title of the placeholder appended when every oracle came up empty.
pub const PLACEHOLDER_TITLE: &str = "Search on Google News";

/// Build the Google News search URL for a claim.
///
/// Only spaces are rewritten (to `+`); everything else is passed through.
pub fn google_news_search_url(claim: &str) -> String {
    format!("{}{}", GOOGLE_NEWS_SEARCH_BASE, claim.replace(' ', "+"))
}

/// Where a citation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationOrigin {
    /// A claim review from the fact-check oracle
    FactCheck,
    /// An article from the news oracle
    News,
    /// The news oracle's search-link stand-in
    NewsSearchLink,
    /// The aggregator's never-empty guarantee
    Placeholder,
}

impl CitationOrigin {
    /// Short tag used in log lines.
    pub fn tag(&self) -> &'static str {
        match self {
            CitationOrigin::FactCheck => "FACTCHECK",
            CitationOrigin::News => "NEWSAPI",
            CitationOrigin::NewsSearchLink => "FALLBACK",
            CitationOrigin::Placeholder => "PLACEHOLDER",
        }
    }
}

/// One piece of displayed evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Claim text or article title
    pub text: String,

    /// Link to the review or article
    pub url: String,

    /// Publisher or outlet name
    pub source: String,

    pub origin: CitationOrigin,
}

impl Citation {
    /// The news oracle's stand-in when it returned no articles.
    pub fn search_link(claim: &str) -> Self {
        Self {
            text: SEARCH_LINK_TITLE.to_string(),
            url: google_news_search_url(claim),
            source: GOOGLE_NEWS_SOURCE.to_string(),
            origin: CitationOrigin::NewsSearchLink,
        }
    }

    /// The aggregator's placeholder when no oracle produced anything.
    pub fn placeholder(claim: &str) -> Self {
        Self {
            text: PLACEHOLDER_TITLE.to_string(),
            url: google_news_search_url(claim),
            source: GOOGLE_NEWS_SOURCE.to_string(),
            origin: CitationOrigin::Placeholder,
        }
    }

    /// The `(text, url, source)` triple.
    pub fn triple(&self) -> (&str, &str, &str) {
        (&self.text, &self.url, &self.source)
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} ({})", self.source, self.text, self.url)
    }
}

/// Builder that fills in the documented defaults for missing fields.
///
/// Oracle payloads are loose: any of the three fields may be absent or
/// null. Adapters pass through whatever they found and let the builder
/// substitute `"N/A"`, `"#"` and `"Unknown"`.
pub struct CitationBuilder {
    origin: CitationOrigin,
    text: Option<String>,
    url: Option<String>,
    source: Option<String>,
}

impl CitationBuilder {
    pub fn new(origin: CitationOrigin) -> Self {
        Self {
            origin,
            text: None,
            url: None,
            source: None,
        }
    }

    pub fn text(mut self, text: Option<String>) -> Self {
        self.text = text;
        self
    }

    pub fn url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }

    pub fn source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }

    pub fn build(self) -> Citation {
        Citation {
            text: self.text.unwrap_or_else(|| MISSING_TEXT.to_string()),
            url: self.url.unwrap_or_else(|| MISSING_URL.to_string()),
            source: self.source.unwrap_or_else(|| MISSING_SOURCE.to_string()),
            origin: self.origin,
        }
    }
}

/// Raised when an evidence set would hold no citations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Evidence set must hold at least one citation")]
pub struct EmptyEvidence;

/// The merged, ordered, never-empty list of citations.
///
/// Built by [`crate::Aggregator`]. Deserializing goes through
/// [`TryFrom<Vec<Citation>>`], which rejects an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Citation>", into = "Vec<Citation>")]
pub struct EvidenceSet {
    citations: Vec<Citation>,
}

impl EvidenceSet {
    pub(crate) fn from_citations(citations: Vec<Citation>) -> Self {
        debug_assert!(!citations.is_empty());
        Self { citations }
    }

    pub fn citations(&self) -> &[Citation] {
        &self.citations
    }

    pub fn len(&self) -> usize {
        self.citations.len()
    }

    /// Never true for a set obtained through the public API.
    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Citation> {
        self.citations.iter()
    }

    /// Count citations with the given origin.
    pub fn count_origin(&self, origin: CitationOrigin) -> usize {
        self.citations.iter().filter(|c| c.origin == origin).count()
    }
}

impl TryFrom<Vec<Citation>> for EvidenceSet {
    type Error = EmptyEvidence;

    fn try_from(citations: Vec<Citation>) -> Result<Self, Self::Error> {
        if citations.is_empty() {
            return Err(EmptyEvidence);
        }
        Ok(Self { citations })
    }
}

impl From<EvidenceSet> for Vec<Citation> {
    fn from(set: EvidenceSet) -> Self {
        set.citations
    }
}

impl<'a> IntoIterator for &'a EvidenceSet {
    type Item = &'a Citation;
    type IntoIter = std::slice::Iter<'a, Citation>;

    fn into_iter(self) -> Self::IntoIter {
        self.citations.iter()
    }
}
