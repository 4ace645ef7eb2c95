//! Secure credential handling for the oracles.
//!
//! Every oracle key is wrapped in an [`ApiCredential`]:
//!
//! - **No accidental logging**: values never appear in Debug/Display output
//! - **Zeroed on drop** via `secrecy`
//! - **Explicit exposure**: `.expose()` at the point of use only
//!
//! Credentials are resolved once, into an [`OracleCredentials`] value that is
//! handed to the adapters at construction. Nothing re-reads the environment
//! per call.
//!
//! ## Usage
//!
//! ```ignore
//! let credentials = OracleCredentials::resolve(&config)?;
//! request.bearer_auth(credentials.classifier.expose());
//! ```

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use crate::config::{ConfigError, OracleSection, RuntimeConfig};

/// Environment variable holding the classification oracle bearer token.
pub const HF_API_TOKEN_ENV: &str = "HF_API_TOKEN";

/// Environment variable holding the fact-check oracle key.
pub const GOOGLE_FACTCHECK_API_KEY_ENV: &str = "GOOGLE_FACTCHECK_API_KEY";

/// Environment variable holding the news oracle key.
pub const NEWS_API_KEY_ENV: &str = "NEWS_API_KEY";

/// Where a credential was loaded from.
///
/// Useful for debugging configuration issues without exposing the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from the config file
    Config,
    /// Loaded from environment variable (including `.env`)
    Environment,
    /// Provided programmatically
    Programmatic,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Config => write!(f, "config"),
            CredentialSource::Environment => write!(f, "environment"),
            CredentialSource::Programmatic => write!(f, "programmatic"),
        }
    }
}

/// A securely-stored API credential.
///
/// Debug and Display print `[REDACTED]` in place of the value.
pub struct ApiCredential {
    value: SecretString,
    source: CredentialSource,
    name: &'static str,
}

impl ApiCredential {
    /// Wrap a value. It cannot be accidentally logged after this point.
    pub fn new(value: impl Into<String>, source: CredentialSource, name: &'static str) -> Self {
        Self {
            value: SecretString::from(value.into()),
            source,
            name,
        }
    }

    /// Resolve from an inline config value, falling back to an environment
    /// lookup. Blank values count as missing.
    ///
    /// `lookup` is normally `|k| std::env::var(k).ok()`; tests pass a map.
    pub fn from_config_or_lookup<F>(
        inline: Option<&str>,
        env_var: &str,
        name: &'static str,
        lookup: &F,
    ) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = inline.filter(|v| !v.trim().is_empty()) {
            return Some(Self::new(value, CredentialSource::Config, name));
        }

        lookup(env_var)
            .filter(|v| !v.trim().is_empty())
            .map(|v| Self::new(v, CredentialSource::Environment, name))
    }

    /// Expose the value for an API call.
    ///
    /// Call only where the value is put on the wire; never store the result.
    pub fn expose(&self) -> &str {
        self.value.expose_secret()
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredential")
            .field("value", &"[REDACTED]")
            .field("source", &self.source)
            .field("name", &self.name)
            .finish()
    }
}

impl fmt::Display for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {} [REDACTED]", self.name, self.source)
    }
}

/// One oracle credential slot: what it is called and where it is looked up.
struct CredentialSpec {
    env_var: &'static str,
    name: &'static str,
}

const CLASSIFIER_SPEC: CredentialSpec = CredentialSpec {
    env_var: HF_API_TOKEN_ENV,
    name: "Hugging Face API token",
};

const FACT_CHECK_SPEC: CredentialSpec = CredentialSpec {
    env_var: GOOGLE_FACTCHECK_API_KEY_ENV,
    name: "Google Fact Check API key",
};

const NEWS_SPEC: CredentialSpec = CredentialSpec {
    env_var: NEWS_API_KEY_ENV,
    name: "NewsAPI key",
};

/// Whether one credential slot resolves, without exposing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialStatus {
    pub name: &'static str,
    pub env_var: &'static str,
    pub source: Option<CredentialSource>,
}

/// The three oracle credentials, all required.
#[derive(Debug)]
pub struct OracleCredentials {
    pub classifier: ApiCredential,
    pub fact_check: ApiCredential,
    pub news: ApiCredential,
}

impl OracleCredentials {
    /// Resolve from config, falling back to the process environment.
    pub fn resolve(config: &RuntimeConfig) -> Result<Self, ConfigError> {
        Self::resolve_with(config, |key| std::env::var(key).ok())
    }

    /// Resolve with a custom environment lookup.
    ///
    /// Fails with every missing variable named, so the user can fix them in
    /// one go.
    pub fn resolve_with<F>(config: &RuntimeConfig, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let classifier = load(&config.classifier, &CLASSIFIER_SPEC, &lookup);
        let fact_check = load(&config.fact_check, &FACT_CHECK_SPEC, &lookup);
        let news = load(&config.news, &NEWS_SPEC, &lookup);

        match (classifier, fact_check, news) {
            (Some(classifier), Some(fact_check), Some(news)) => Ok(Self {
                classifier,
                fact_check,
                news,
            }),
            (classifier, fact_check, news) => {
                let missing = [
                    (classifier.is_none(), CLASSIFIER_SPEC.env_var),
                    (fact_check.is_none(), FACT_CHECK_SPEC.env_var),
                    (news.is_none(), NEWS_SPEC.env_var),
                ]
                .into_iter()
                .filter(|(absent, _)| *absent)
                .map(|(_, env_var)| env_var.to_string())
                .collect();
                Err(ConfigError::MissingCredentials { missing })
            }
        }
    }

    /// Report where each credential would come from.
    pub fn describe_with<F>(config: &RuntimeConfig, lookup: F) -> Vec<CredentialStatus>
    where
        F: Fn(&str) -> Option<String>,
    {
        [
            (&config.classifier, &CLASSIFIER_SPEC),
            (&config.fact_check, &FACT_CHECK_SPEC),
            (&config.news, &NEWS_SPEC),
        ]
        .into_iter()
        .map(|(section, spec)| CredentialStatus {
            name: spec.name,
            env_var: spec.env_var,
            source: load(section, spec, &lookup).map(|c| c.source()),
        })
        .collect()
    }

    /// [`Self::describe_with`] against the process environment.
    pub fn describe(config: &RuntimeConfig) -> Vec<CredentialStatus> {
        Self::describe_with(config, |key| std::env::var(key).ok())
    }
}

fn load<F>(section: &OracleSection, spec: &CredentialSpec, lookup: &F) -> Option<ApiCredential>
where
    F: Fn(&str) -> Option<String>,
{
    ApiCredential::from_config_or_lookup(section.api_key.as_deref(), spec.env_var, spec.name, lookup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_credential_redacted_in_debug() {
        let secret = "hf_super_secret_token_12345";
        let cred = ApiCredential::new(secret, CredentialSource::Programmatic, "Test token");

        let debug = format!("{:?}", cred);
        assert!(!debug.contains(secret), "Secret exposed in Debug!");
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_credential_redacted_in_display() {
        let secret = "hf_super_secret_token_12345";
        let cred = ApiCredential::new(secret, CredentialSource::Config, "Test token");

        let display = format!("{}", cred);
        assert!(!display.contains(secret), "Secret exposed in Display!");
        assert!(display.contains("[REDACTED]"));
        assert!(display.contains("Test token"));
        assert!(display.contains("config"));
    }

    #[test]
    fn test_credential_expose() {
        let cred = ApiCredential::new("k", CredentialSource::Programmatic, "Test");
        assert_eq!(cred.expose(), "k");
    }

    #[test]
    fn test_inline_config_wins_over_env() {
        let lookup = env(&[("TOKEN", "env-value")]);
        let cred =
            ApiCredential::from_config_or_lookup(Some("config-value"), "TOKEN", "Test", &lookup)
                .unwrap();
        assert_eq!(cred.expose(), "config-value");
        assert_eq!(cred.source(), CredentialSource::Config);
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let lookup = env(&[("TOKEN", "  ")]);
        assert!(ApiCredential::from_config_or_lookup(Some(""), "TOKEN", "Test", &lookup).is_none());
    }

    #[test]
    fn test_resolve_all_from_env() {
        let lookup = env(&[
            (HF_API_TOKEN_ENV, "hf"),
            (GOOGLE_FACTCHECK_API_KEY_ENV, "gfc"),
            (NEWS_API_KEY_ENV, "news"),
        ]);
        let creds = OracleCredentials::resolve_with(&RuntimeConfig::default(), lookup).unwrap();
        assert_eq!(creds.classifier.expose(), "hf");
        assert_eq!(creds.fact_check.expose(), "gfc");
        assert_eq!(creds.news.expose(), "news");
        assert_eq!(creds.news.source(), CredentialSource::Environment);
        assert_eq!(creds.classifier.name(), "Hugging Face API token");
    }

    #[test]
    fn test_resolve_names_every_missing_variable() {
        let lookup = env(&[(GOOGLE_FACTCHECK_API_KEY_ENV, "gfc")]);
        let err = OracleCredentials::resolve_with(&RuntimeConfig::default(), lookup).unwrap_err();

        match &err {
            ConfigError::MissingCredentials { missing } => {
                assert_eq!(missing, &vec![HF_API_TOKEN_ENV.to_string(), NEWS_API_KEY_ENV.to_string()]);
            }
            other => panic!("Expected MissingCredentials, got {other:?}"),
        }
        assert!(err.to_string().contains(HF_API_TOKEN_ENV));
        assert!(err.to_string().contains(NEWS_API_KEY_ENV));
    }

    #[test]
    fn test_describe_does_not_expose_values() {
        let lookup = env(&[(NEWS_API_KEY_ENV, "news-secret")]);
        let statuses = OracleCredentials::describe_with(&RuntimeConfig::default(), lookup);

        assert_eq!(statuses.len(), 3);
        assert_eq!(statuses[0].source, None);
        assert_eq!(statuses[2].source, Some(CredentialSource::Environment));
        assert!(!format!("{:?}", statuses).contains("news-secret"));
    }
}
