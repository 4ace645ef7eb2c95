//! Terminal rendering of a check report.

use claimcheck_core::{CheckReport, Label, Verdict};
use claimcheck_runtime::{CredentialStatus, RuntimeConfig};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Render the verdict banner and numbered source list.
pub fn report(report: &CheckReport, color: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", banner(&report.verdict, color));
    if report.verdict.degraded {
        if let Some(failure) = &report.verdict.failure {
            let _ = writeln!(out, "  (classifier unavailable: {})", failure);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Verified Sources");
    for (idx, citation) in report.evidence.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} → {} ({})",
            idx + 1,
            citation.source,
            citation.text,
            citation.url
        );
    }

    out
}

fn banner(verdict: &Verdict, color: bool) -> String {
    let text = format!(
        " Prediction: {}   Confidence: {:.2} ",
        verdict.label.as_str().to_uppercase(),
        verdict.confidence
    );
    if !color {
        return text;
    }
    match verdict.label {
        Label::Fake => text.white().on_red().bold().to_string(),
        Label::Real => text.white().on_green().bold().to_string(),
        Label::Uncertain => text.white().on_bright_black().bold().to_string(),
    }
}

/// Render the effective configuration without exposing secrets.
pub fn config(config: &RuntimeConfig, statuses: &[CredentialStatus]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Credentials");
    for status in statuses {
        let found = match status.source {
            Some(source) => format!("set ({})", source),
            None => "MISSING".to_string(),
        };
        let _ = writeln!(out, "  {:<26} {:<26} {}", status.name, status.env_var, found);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Endpoints");
    let _ = writeln!(out, "  classifier  {}", config.classifier_url());
    let _ = writeln!(out, "  fact_check  {}", config.fact_check_url());
    let _ = writeln!(out, "  news        {}", config.news_url());

    let _ = writeln!(out);
    let timeout = config
        .timeout
        .map(|t| format!("{:?}", t))
        .unwrap_or_else(|| "transport default".to_string());
    let _ = writeln!(out, "Timeout         {}", timeout);
    let _ = writeln!(out, "Failure policy  {}", config.failure_policy);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimcheck_core::{Claim, FactCheckOutcome, NewsOutcome};
    use claimcheck_runtime::CredentialSource;

    fn sample(verdict: Verdict) -> CheckReport {
        CheckReport::assemble(
            Claim::new("the sky is green").unwrap(),
            verdict,
            &FactCheckOutcome::failed("offline"),
            &NewsOutcome::from_articles("the sky is green", vec![]),
        )
    }

    #[test]
    fn test_report_plain() {
        let out = report(&sample(Verdict::new(Label::Real, 0.9)), false);
        assert!(out.contains("Prediction: REAL"));
        assert!(out.contains("Confidence: 0.90"));
        assert!(out.contains(
            "1. Google News → Google News Search (https://news.google.com/search?q=the+sky+is+green)"
        ));
    }

    #[test]
    fn test_degraded_verdict_is_explained() {
        let out = report(&sample(Verdict::degraded(Label::Fake, "HF API Error 503: x")), false);
        assert!(out.contains("Prediction: FAKE"));
        assert!(out.contains("classifier unavailable: HF API Error 503: x"));
    }

    #[test]
    fn test_config_marks_missing_credentials() {
        let statuses = vec![
            CredentialStatus {
                name: "Hugging Face API token",
                env_var: "HF_API_TOKEN",
                source: None,
            },
            CredentialStatus {
                name: "NewsAPI key",
                env_var: "NEWS_API_KEY",
                source: Some(CredentialSource::Environment),
            },
        ];
        let out = config(&RuntimeConfig::default(), &statuses);
        assert!(out.contains("MISSING"));
        assert!(out.contains("set (environment)"));
        assert!(out.contains("transport default"));
        assert!(out.contains("treat_as_fake"));
    }
}
