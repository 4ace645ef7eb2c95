//! Typed results of the evidence oracles.
//!
//! Oracle failures never propagate as errors. Adapters fold transport and
//! parse problems into a `Failed` variant, which contributes no citations.

use serde::{Deserialize, Serialize};

use crate::evidence::Citation;

/// Result of a fact-check search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FactCheckOutcome {
    /// Matched claims in response order. Empty when the response had no
    /// `claims` entry.
    Claims { citations: Vec<Citation> },

    /// Transport or parse error.
    Failed { message: String },
}

impl FactCheckOutcome {
    pub fn claims(citations: Vec<Citation>) -> Self {
        Self::Claims { citations }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Citations contributed to the evidence set.
    pub fn citations(&self) -> &[Citation] {
        match self {
            Self::Claims { citations } => citations,
            Self::Failed { .. } => &[],
        }
    }
}

/// Which rung of the news degradation ladder fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsTier {
    Articles,
    SearchLink,
    Failed,
}

/// Result of a news search after the degradation ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NewsOutcome {
    /// The primary search returned articles.
    Articles { citations: Vec<Citation> },

    /// The primary search returned nothing; a search link stands in.
    SearchLink { citation: Citation },

    /// Transport or parse error.
    Failed { message: String },
}

impl NewsOutcome {
    /// Apply the first two rungs of the ladder to a parsed response.
    pub fn from_articles(claim: &str, articles: Vec<Citation>) -> Self {
        if articles.is_empty() {
            Self::SearchLink {
                citation: Citation::search_link(claim),
            }
        } else {
            Self::Articles {
                citations: articles,
            }
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn tier(&self) -> NewsTier {
        match self {
            Self::Articles { .. } => NewsTier::Articles,
            Self::SearchLink { .. } => NewsTier::SearchLink,
            Self::Failed { .. } => NewsTier::Failed,
        }
    }

    /// Citations contributed to the evidence set.
    pub fn citations(&self) -> &[Citation] {
        match self {
            Self::Articles { citations } => citations,
            Self::SearchLink { citation } => std::slice::from_ref(citation),
            Self::Failed { .. } => &[],
        }
    }
}
