//! # claimcheck-runtime
//!
//! Talks to the outside world for Claimcheck.
//!
//! This crate provides the HTTP adapters for the three oracles (zero-shot
//! classification, fact-check search, news search), secure credential
//! loading, runtime configuration, and the [`Checker`] that runs one claim
//! end to end.
//!
//! The decisions themselves (verdict interpretation, citation ordering, the
//! never-empty guarantee) live in `claimcheck-core` and are deterministic.
//!
//! ## Example
//!
//! ```rust,ignore
//! use claimcheck_runtime::{Checker, OracleCredentials, RuntimeConfig};
//! use claimcheck_core::Claim;
//!
//! let config = RuntimeConfig::default();
//! let credentials = OracleCredentials::resolve(&config)?;
//! let checker = Checker::from_config(&config, credentials)?;
//!
//! let report = checker.check(&Claim::new("the sky is green")?).await;
//! println!("{} ({:.2})", report.verdict.label, report.verdict.confidence);
//! ```

pub mod checker;
pub mod config;
pub mod oracles;

pub use checker::{Checker, CheckerBuilder, RuntimeError};
pub use config::{ConfigError, OracleSection, RuntimeConfig};
pub use oracles::{
    build_http_client, ApiCredential, CredentialSource, CredentialStatus, FactCheckOracle,
    GoogleFactCheck, HuggingFaceClassifier, NewsApi, NewsOracle, OracleCredentials, OracleError,
    VerdictOracle,
};
