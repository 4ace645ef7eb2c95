//! Runtime configuration.
//!
//! Every field is optional. An absent config file is the same as an empty
//! one: default endpoints, transport-default timeout, `treat_as_fake` policy,
//! and all secrets from the environment.
//!
//! ```yaml
//! failure_policy: undetermined
//! timeout: 20s
//! classifier:
//!   base_url: https://api-inference.huggingface.co/models/facebook/bart-large-mnli
//! news:
//!   api_key: "..."   # falls back to NEWS_API_KEY
//! ```

use claimcheck_core::FailurePolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::oracles::{DEFAULT_CLASSIFIER_URL, DEFAULT_FACT_CHECK_URL, DEFAULT_NEWS_URL};

/// Errors from loading configuration or credentials.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid {oracle} base_url '{url}': must start with http:// or https://")]
    InvalidUrl { oracle: &'static str, url: String },

    #[error("Missing API keys: set {} in the environment or .env file", .missing.join(", "))]
    MissingCredentials { missing: Vec<String> },
}

/// Per-oracle settings.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OracleSection {
    /// Inline secret; the environment variable is used when absent
    pub api_key: Option<String>,

    /// Endpoint override
    pub base_url: Option<String>,
}

impl fmt::Debug for OracleSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OracleSection")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Configuration for a [`crate::Checker`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    pub classifier: OracleSection,
    pub fact_check: OracleSection,
    pub news: OracleSection,

    /// Per-request timeout; `None` keeps the transport default
    #[serde(with = "optional_duration", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,

    pub failure_policy: FailurePolicy,
}

mod optional_duration {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => serializer.serialize_str(&humantime::format_duration(*d).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|s| humantime::parse_duration(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

impl RuntimeConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check endpoint overrides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (oracle, section) in [
            ("classifier", &self.classifier),
            ("fact_check", &self.fact_check),
            ("news", &self.news),
        ] {
            if let Some(url) = &section.base_url {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ConfigError::InvalidUrl {
                        oracle,
                        url: url.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn classifier_url(&self) -> &str {
        self.classifier.base_url.as_deref().unwrap_or(DEFAULT_CLASSIFIER_URL)
    }

    pub fn fact_check_url(&self) -> &str {
        self.fact_check.base_url.as_deref().unwrap_or(DEFAULT_FACT_CHECK_URL)
    }

    pub fn news_url(&self) -> &str {
        self.news.base_url.as_deref().unwrap_or(DEFAULT_NEWS_URL)
    }

    /// Builder-style override of the failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}
