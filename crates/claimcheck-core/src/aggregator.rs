//! Aggregator: merges oracle citations into the evidence set.
//!
//! Merge rules, applied in this order:
//! 1. Fact-check citations first, at most 3, in response order
//! 2. News citations next, at most 3, from whichever ladder rung fired
//! 3. If nothing was collected, exactly one placeholder search link
//!
//! Rule 3 is unconditional: an evidence set is never empty.

use crate::evidence::{Citation, EvidenceSet};
use crate::outcome::{FactCheckOutcome, NewsOutcome};

/// Maximum citations taken from any single oracle.
pub const MAX_CITATIONS_PER_ORACLE: usize = 3;

/// The Aggregator builds the evidence set for one claim.
pub struct Aggregator {
    per_oracle: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            per_oracle: MAX_CITATIONS_PER_ORACLE,
        }
    }

    /// Merge both oracle outcomes into a never-empty evidence set.
    pub fn aggregate(
        &self,
        claim: &str,
        fact_check: &FactCheckOutcome,
        news: &NewsOutcome,
    ) -> EvidenceSet {
        let mut citations: Vec<Citation> = Vec::with_capacity(self.per_oracle * 2);

        citations.extend(fact_check.citations().iter().take(self.per_oracle).cloned());
        citations.extend(news.citations().iter().take(self.per_oracle).cloned());

        if citations.is_empty() {
            tracing::info!("No oracle produced a citation, adding placeholder search link");
            citations.push(Citation::placeholder(claim));
        }

        for citation in &citations {
            tracing::info!(
                origin = citation.origin.tag(),
                source = %citation.source,
                url = %citation.url,
                "Citation collected"
            );
        }

        EvidenceSet::from_citations(citations)
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::{CitationBuilder, CitationOrigin};
    use proptest::prelude::*;

    fn fact(i: usize) -> Citation {
        CitationBuilder::new(CitationOrigin::FactCheck)
            .text(Some(format!("claim {}", i)))
            .url(Some(format!("https://factcheck.example/{}", i)))
            .source(Some("Snopes".to_string()))
            .build()
    }

    fn article(i: usize) -> Citation {
        CitationBuilder::new(CitationOrigin::News)
            .text(Some(format!("article {}", i)))
            .url(Some(format!("https://news.example/{}", i)))
            .source(Some("Reuters".to_string()))
            .build()
    }

    #[test]
    fn test_sky_is_green_scenario() {
        let claim = "the sky is green";
        let fact_check = FactCheckOutcome::claims(vec![fact(0), fact(1)]);
        let news = NewsOutcome::from_articles(claim, vec![]);

        let set = Aggregator::new().aggregate(claim, &fact_check, &news);

        assert_eq!(set.len(), 3);
        assert_eq!(set.citations()[0], fact(0));
        assert_eq!(set.citations()[1], fact(1));
        assert_eq!(set.citations()[2].origin, CitationOrigin::NewsSearchLink);
        assert_eq!(
            set.citations()[2].url,
            "https://news.google.com/search?q=the+sky+is+green"
        );
    }

    #[test]
    fn test_placeholder_when_everything_fails() {
        let claim = "vaccines contain microchips";
        let set = Aggregator::new().aggregate(
            claim,
            &FactCheckOutcome::failed("timeout"),
            &NewsOutcome::failed("connection reset"),
        );

        assert_eq!(set.len(), 1);
        let only = &set.citations()[0];
        assert_eq!(only.origin, CitationOrigin::Placeholder);
        assert_eq!(
            only.triple(),
            (
                "Search on Google News",
                "https://news.google.com/search?q=vaccines+contain+microchips",
                "Google News"
            )
        );
    }

    #[test]
    fn test_no_placeholder_when_fact_check_has_results() {
        let set = Aggregator::new().aggregate(
            "x",
            &FactCheckOutcome::claims(vec![fact(0)]),
            &NewsOutcome::failed("down"),
        );
        assert_eq!(set.len(), 1);
        assert_eq!(set.count_origin(CitationOrigin::Placeholder), 0);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let set = Aggregator::new().aggregate(
            "x",
            &FactCheckOutcome::claims(vec![fact(0), fact(0)]),
            &NewsOutcome::from_articles("x", vec![article(0)]),
        );
        assert_eq!(set.len(), 3);
        assert_eq!(set.citations()[0], set.citations()[1]);
    }

    fn news_strategy() -> impl Strategy<Value = NewsOutcome> {
        prop_oneof![
            (0usize..6).prop_map(|n| NewsOutcome::from_articles("q", (0..n).map(article).collect())),
            Just(NewsOutcome::failed("error")),
        ]
    }

    fn fact_check_strategy() -> impl Strategy<Value = FactCheckOutcome> {
        prop_oneof![
            (0usize..8).prop_map(|n| FactCheckOutcome::claims((0..n).map(fact).collect())),
            Just(FactCheckOutcome::failed("error")),
        ]
    }

    proptest! {
        #[test]
        fn prop_evidence_set_is_bounded(
            claim in ".{0,40}",
            fact_check in fact_check_strategy(),
            news in news_strategy(),
        ) {
            let set = Aggregator::new().aggregate(&claim, &fact_check, &news);
            prop_assert!(set.len() >= 1);
            prop_assert!(set.len() <= 6);
        }

        #[test]
        fn prop_fact_checks_come_first_in_order(
            n in 1usize..8,
            news in news_strategy(),
        ) {
            let fact_check = FactCheckOutcome::claims((0..n).map(fact).collect());
            let set = Aggregator::new().aggregate("q", &fact_check, &news);

            let expected = n.min(MAX_CITATIONS_PER_ORACLE);
            prop_assert_eq!(set.count_origin(CitationOrigin::FactCheck), expected);
            for (i, citation) in set.citations().iter().take(expected).enumerate() {
                prop_assert_eq!(citation, &fact(i));
            }
            prop_assert!(set
                .citations()
                .iter()
                .skip(expected)
                .all(|c| c.origin != CitationOrigin::FactCheck));
        }
    }
}
