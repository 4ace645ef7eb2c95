//! The result of one end-to-end check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregator::Aggregator;
use crate::evidence::EvidenceSet;
use crate::outcome::{FactCheckOutcome, NewsOutcome, NewsTier};
use crate::types::{Claim, Verdict};

/// Summary of how the fact-check oracle fared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FactCheckStatus {
    Matched { count: usize },
    NoResults,
    Failed { message: String },
}

impl From<&FactCheckOutcome> for FactCheckStatus {
    fn from(outcome: &FactCheckOutcome) -> Self {
        match outcome {
            FactCheckOutcome::Claims { citations } if citations.is_empty() => Self::NoResults,
            FactCheckOutcome::Claims { citations } => Self::Matched {
                count: citations.len(),
            },
            FactCheckOutcome::Failed { message } => Self::Failed {
                message: message.clone(),
            },
        }
    }
}

/// Everything shown to the user for one claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub claim: Claim,
    pub verdict: Verdict,
    pub evidence: EvidenceSet,
    pub fact_check: FactCheckStatus,
    pub news_tier: NewsTier,

    /// Error from the news oracle, when the ladder bottomed out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_error: Option<String>,

    pub checked_at: DateTime<Utc>,
}

impl CheckReport {
    /// Aggregate the oracle outcomes and stamp the report.
    pub fn assemble(
        claim: Claim,
        verdict: Verdict,
        fact_check: &FactCheckOutcome,
        news: &NewsOutcome,
    ) -> Self {
        let evidence = Aggregator::new().aggregate(claim.as_str(), fact_check, news);
        let news_error = match news {
            NewsOutcome::Failed { message } => Some(message.clone()),
            _ => None,
        };

        Self {
            claim,
            verdict,
            evidence,
            fact_check: fact_check.into(),
            news_tier: news.tier(),
            news_error,
            checked_at: Utc::now(),
        }
    }
}
