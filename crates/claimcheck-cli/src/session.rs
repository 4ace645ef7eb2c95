//! Interactive session: one independent check per input line.

use claimcheck_core::Claim;
use claimcheck_runtime::Checker;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::render;

const PROMPT: &str = "claim> ";
const QUIT: &str = ":q";

/// How reports are written.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub color: bool,
}

/// Run checks until EOF or `:q`.
///
/// A bad line never ends the session; the problem is printed and the next
/// line is read. Bytes that are not UTF-8 are decoded lossily.
pub async fn run<R, W>(checker: &Checker, mut input: R, out: &mut W, output: Output) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();
    let mut checked = 0usize;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            writeln!(out)?;
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim() == QUIT {
            break;
        }

        let claim = match Claim::new(line) {
            Ok(claim) => claim,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        let report = checker.check(&claim).await;
        checked += 1;

        if output.json {
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            writeln!(out, "{}", render::report(&report, output.color))?;
        }
    }

    tracing::debug!(checked, "Interactive session ended");
    Ok(checked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use claimcheck_core::{ClassificationOutcome, FactCheckOutcome, NewsOutcome};
    use claimcheck_runtime::{CheckerBuilder, FactCheckOracle, NewsOracle, VerdictOracle};
    use std::sync::Arc;

    struct Offline;

    #[async_trait]
    impl VerdictOracle for Offline {
        async fn classify(&self, _claim: &Claim) -> ClassificationOutcome {
            ClassificationOutcome::failure("offline")
        }

        fn name(&self) -> &str {
            "offline"
        }
    }

    #[async_trait]
    impl FactCheckOracle for Offline {
        async fn search(&self, _claim: &Claim) -> FactCheckOutcome {
            FactCheckOutcome::failed("offline")
        }

        fn name(&self) -> &str {
            "offline"
        }
    }

    #[async_trait]
    impl NewsOracle for Offline {
        async fn search(&self, _claim: &Claim) -> NewsOutcome {
            NewsOutcome::failed("offline")
        }

        fn name(&self) -> &str {
            "offline"
        }
    }

    fn offline_checker() -> Checker {
        CheckerBuilder::new()
            .classifier(Arc::new(Offline))
            .fact_check(Arc::new(Offline))
            .news(Arc::new(Offline))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_session_checks_each_line() {
        let input: &[u8] = b"the sky is green\n\nwater is wet\n";
        let mut out = Vec::new();

        let checked = run(
            &offline_checker(),
            input,
            &mut out,
            Output { json: false, color: false },
        )
        .await
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(checked, 2);
        assert!(text.contains("Claim is empty"));
        assert!(text.contains("https://news.google.com/search?q=the+sky+is+green"));
        assert!(text.contains("https://news.google.com/search?q=water+is+wet"));
    }

    #[tokio::test]
    async fn test_session_stops_on_quit() {
        let input: &[u8] = b":q\nnever checked\n";
        let mut out = Vec::new();

        let checked = run(
            &offline_checker(),
            input,
            &mut out,
            Output { json: true, color: false },
        )
        .await
        .unwrap();

        assert_eq!(checked, 0);
    }

    #[tokio::test]
    async fn test_session_json_output() {
        let input: &[u8] = b"moon is cheese\n";
        let mut out = Vec::new();

        run(
            &offline_checker(),
            input,
            &mut out,
            Output { json: true, color: false },
        )
        .await
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let json_line = text
            .lines()
            .find_map(|l| l.strip_prefix(PROMPT).filter(|rest| rest.starts_with('{')))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(json_line).unwrap();
        assert_eq!(value["verdict"]["label"], "fake");
        assert_eq!(value["evidence"][0]["origin"], "placeholder");
    }

    #[tokio::test]
    async fn test_session_survives_invalid_utf8() {
        let input: &[u8] = b"\xff\xfe bad\nwater is wet\n";
        let mut out = Vec::new();

        let checked = run(
            &offline_checker(),
            input,
            &mut out,
            Output { json: false, color: false },
        )
        .await
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(checked, 2);
        assert!(text.contains("https://news.google.com/search?q=water+is+wet"));
    }

    #[tokio::test]
    async fn test_session_handles_crlf_and_missing_newline() {
        let input: &[u8] = b"the moon\r\n:q";
        let mut out = Vec::new();

        let checked = run(
            &offline_checker(),
            input,
            &mut out,
            Output { json: false, color: false },
        )
        .await
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(checked, 1);
        assert!(text.contains("https://news.google.com/search?q=the+moon)"));
    }
}
