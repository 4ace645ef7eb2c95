//! Core types for Claimcheck.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when accepting user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Claim is empty: enter a news headline or claim")]
    Empty,
}

/// A free-text claim or headline supplied by the user.
///
/// The only validation is presence: the text must contain something other
/// than whitespace. The original text is kept as-is and is what gets sent to
/// the oracles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Claim(String);

impl Claim {
    /// Accept a claim, rejecting blank input.
    pub fn new(text: impl Into<String>) -> Result<Self, ClaimError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ClaimError::Empty);
        }
        Ok(Self(text))
    }

    /// The claim text exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Claim {
    type Error = ClaimError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<Claim> for String {
    fn from(claim: Claim) -> Self {
        claim.0
    }
}

impl AsRef<str> for Claim {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Verdict label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Real,
    Fake,
    Uncertain,
}

impl Label {
    /// Candidate labels sent to the classification oracle.
    pub const CANDIDATES: [&'static str; 2] = ["real", "fake"];

    /// Parse one of the candidate labels (case-insensitive).
    ///
    /// Returns `None` for anything outside `real`/`fake`; `uncertain` is never
    /// produced by the oracle, only by the failure policy.
    pub fn from_candidate(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "real" => Some(Label::Real),
            "fake" => Some(Label::Fake),
            _ => None,
        }
    }

    /// Derive a label from the top score alone.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.5 {
            Label::Real
        } else {
            Label::Fake
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Real => "real",
            Label::Fake => "fake",
            Label::Uncertain => "uncertain",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The classifier's answer for one claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub label: Label,

    /// Confidence in [0.0, 1.0]
    pub confidence: f64,

    /// True when the verdict came from the failure policy, not the oracle
    #[serde(default)]
    pub degraded: bool,

    /// Why the oracle result could not be used (degraded verdicts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl Verdict {
    /// A verdict backed by an oracle answer. Confidence is clamped to [0, 1].
    pub fn new(label: Label, confidence: f64) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self {
            label,
            confidence,
            degraded: false,
            failure: None,
        }
    }

    /// A zero-confidence verdict produced because the oracle failed.
    pub fn degraded(label: Label, failure: impl Into<String>) -> Self {
        Self {
            label,
            confidence: 0.0,
            degraded: true,
            failure: Some(failure.into()),
        }
    }

    /// The `(label, confidence)` pair.
    pub fn pair(&self) -> (Label, f64) {
        (self.label, self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_rejects_blank() {
        assert_eq!(Claim::new(""), Err(ClaimError::Empty));
        assert_eq!(Claim::new("   \n\t"), Err(ClaimError::Empty));
    }

    #[test]
    fn test_claim_keeps_original_text() {
        let claim = Claim::new("  the sky is green ").unwrap();
        assert_eq!(claim.as_str(), "  the sky is green ");
    }

    #[test]
    fn test_blank_claim_does_not_parse() {
        assert!(serde_json::from_str::<Claim>("\"  \"").is_err());
        let claim: Claim = serde_json::from_str("\"water is wet\"").unwrap();
        assert_eq!(claim.as_str(), "water is wet");
    }

    #[test]
    fn test_label_from_candidate() {
        assert_eq!(Label::from_candidate("REAL"), Some(Label::Real));
        assert_eq!(Label::from_candidate("Fake"), Some(Label::Fake));
        assert_eq!(Label::from_candidate("uncertain"), None);
        assert_eq!(Label::from_candidate("satire"), None);
    }

    #[test]
    fn test_label_from_score_threshold() {
        assert_eq!(Label::from_score(0.5), Label::Real);
        assert_eq!(Label::from_score(0.49), Label::Fake);
    }

    #[test]
    fn test_verdict_clamps_confidence() {
        assert_eq!(Verdict::new(Label::Real, 1.7).confidence, 1.0);
        assert_eq!(Verdict::new(Label::Fake, -0.2).confidence, 0.0);
        assert_eq!(Verdict::new(Label::Fake, f64::NAN).confidence, 0.0);
    }

    #[test]
    fn test_label_serializes_lowercase() {
        let json = serde_json::to_string(&Label::Uncertain).unwrap();
        assert_eq!(json, "\"uncertain\"");
    }
}
