//! Interpreting zero-shot classification results.
//!
//! The rules, in order:
//! 1. A failed call goes through the [`FailurePolicy`]
//! 2. Otherwise the top label (lower-cased) and top score are used
//! 3. A top label outside `real`/`fake` is re-derived from the score (>= 0.5 is real)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::{Label, Verdict};

/// What the classification oracle returned, parsed into explicit cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ClassificationOutcome {
    /// Labels ordered most-confident first, with parallel scores.
    Success { labels: Vec<String>, scores: Vec<f64> },

    /// Non-success status, transport error or malformed payload.
    Failure { message: String },
}

impl ClassificationOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Build a success outcome, rejecting payloads with no usable top entry.
    pub fn from_parts(labels: Vec<String>, scores: Vec<f64>) -> Self {
        if labels.is_empty() || scores.is_empty() {
            return Self::failure("classification response has no labels or scores");
        }
        Self::Success { labels, scores }
    }
}

/// How a failed classification call is turned into a verdict.
///
/// `TreatAsFake` reproduces the historical behaviour where absence of
/// signal reads as evidence of falsehood. It is almost certainly a bug,
/// so every verdict produced by it is marked degraded and logged.
/// `Undetermined` reports `uncertain` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    #[default]
    TreatAsFake,
    Undetermined,
}

impl FailurePolicy {
    fn label(&self) -> Label {
        match self {
            FailurePolicy::TreatAsFake => Label::Fake,
            FailurePolicy::Undetermined => Label::Uncertain,
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::TreatAsFake => write!(f, "treat_as_fake"),
            FailurePolicy::Undetermined => write!(f, "undetermined"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "treat_as_fake" | "fake" => Ok(FailurePolicy::TreatAsFake),
            "undetermined" | "uncertain" => Ok(FailurePolicy::Undetermined),
            other => Err(format!(
                "unknown failure policy '{}': expected treat_as_fake or undetermined",
                other
            )),
        }
    }
}

/// Turn a classification outcome into a verdict.
pub fn interpret(outcome: &ClassificationOutcome, policy: FailurePolicy) -> Verdict {
    match outcome {
        ClassificationOutcome::Success { labels, scores } => {
            let (Some(top_label), Some(&top_score)) = (labels.first(), scores.first()) else {
                return degrade("classification response has no labels or scores", policy);
            };

            let label = Label::from_candidate(top_label).unwrap_or_else(|| {
                tracing::debug!(
                    label = %top_label,
                    score = top_score,
                    "Top label outside candidate set, deriving from score"
                );
                Label::from_score(top_score)
            });

            Verdict::new(label, top_score)
        }
        ClassificationOutcome::Failure { message } => degrade(message, policy),
    }
}

fn degrade(message: &str, policy: FailurePolicy) -> Verdict {
    let label = policy.label();
    tracing::warn!(
        policy = %policy,
        label = %label,
        error = %message,
        "Classifier unavailable, verdict is a policy default with zero confidence"
    );
    Verdict::degraded(label, message)
}
