//! # claimcheck-core
//!
//! Deterministic half of Claimcheck: everything that happens after the
//! oracles have answered.
//!
//! This crate answers:
//! - What verdict does a classification result amount to?
//! - Which citations are shown, and in what order?
//!
//! ## Key Guarantees
//!
//! 1. **No I/O**: oracle calls live in `claimcheck-runtime`
//! 2. **Never empty**: every evidence set holds between 1 and 6 citations
//! 3. **Ordered**: fact-check citations always precede news citations
//!
//! ## Example
//!
//! ```rust
//! use claimcheck_core::{Aggregator, FactCheckOutcome, NewsOutcome};
//!
//! let claim = "the sky is green";
//! let evidence = Aggregator::new().aggregate(
//!     claim,
//!     &FactCheckOutcome::failed("offline"),
//!     &NewsOutcome::from_articles(claim, vec![]),
//! );
//! assert_eq!(evidence.len(), 1);
//! ```

pub mod aggregator;
pub mod classification;
pub mod evidence;
pub mod outcome;
pub mod report;
pub mod types;

// Re-export main types at crate root
pub use aggregator::{Aggregator, MAX_CITATIONS_PER_ORACLE};
pub use classification::{interpret, ClassificationOutcome, FailurePolicy};
pub use evidence::{
    google_news_search_url, Citation, CitationBuilder, CitationOrigin, EmptyEvidence,
    EvidenceSet,
};
pub use outcome::{FactCheckOutcome, NewsOutcome, NewsTier};
pub use report::{CheckReport, FactCheckStatus};
pub use types::{Claim, ClaimError, Label, Verdict};
