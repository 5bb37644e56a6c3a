//! # Configuration
//!
//! The client never reads the process environment itself. Instead a [`ClientConfig`] is
//! built once (usually by [`ClientConfig::from_env`] in `main`) and passed in at
//! construction.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `ENV` | `TEST` or `PROD` select those environments; anything else is dev | dev |
//! | `COFFEE_ORDER_BASE_URL` | Overrides the environment's base URL | per environment |
//! | `COFFEE_ORDER_CURRENCY` | Currency code used when displaying totals | `CZK` |

use rest_framework::Url;
use std::fmt::{self, Display};
use thiserror::Error;

pub const ENV_VAR: &str = "ENV";
pub const BASE_URL_VAR: &str = "COFFEE_ORDER_BASE_URL";
pub const CURRENCY_VAR: &str = "COFFEE_ORDER_CURRENCY";
pub const DEFAULT_CURRENCY: &str = "CZK";

// All three point at the same backend for now.
const DEV_BASE_URL: &str = "http://127.0.0.1:8000/";
const TEST_BASE_URL: &str = "http://127.0.0.1:8000/";
const PROD_BASE_URL: &str = "http://127.0.0.1:8000/";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid base URL {0}")]
    InvalidBaseUrl(String),

    #[error("Unknown environment: {0} (expected dev, test or prod)")]
    UnknownEnvironment(String),
}

/// Deployment environment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnvironment {
    #[default]
    Dev,
    Test,
    Prod,
}

impl AppEnvironment {
    /// Maps the raw `ENV` value: unset → Dev, `"TEST"` → Test, `"PROD"` → Prod,
    /// anything else → Dev. Matching is exact.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("TEST") => AppEnvironment::Test,
            Some("PROD") => AppEnvironment::Prod,
            _ => AppEnvironment::Dev,
        }
    }

    /// Strict, case-insensitive parse for command-line use.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "dev" => Ok(AppEnvironment::Dev),
            "test" => Ok(AppEnvironment::Test),
            "prod" => Ok(AppEnvironment::Prod),
            _ => Err(ConfigError::UnknownEnvironment(value.to_string())),
        }
    }

    pub fn default_base_url(self) -> &'static str {
        match self {
            AppEnvironment::Dev => DEV_BASE_URL,
            AppEnvironment::Test => TEST_BASE_URL,
            AppEnvironment::Prod => PROD_BASE_URL,
        }
    }
}

impl Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppEnvironment::Dev => "dev",
            AppEnvironment::Test => "test",
            AppEnvironment::Prod => "prod",
        };
        f.write_str(name)
    }
}

/// Everything the client needs to know about where and how to talk to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub environment: AppEnvironment,
    pub base_url: Url,
    pub currency: String,
}

impl ClientConfig {
    /// Config for an environment with its default base URL.
    pub fn for_environment(environment: AppEnvironment) -> Result<Self, ConfigError> {
        Ok(Self {
            environment,
            base_url: parse_base_url(environment.default_base_url())?,
            currency: DEFAULT_CURRENCY.to_string(),
        })
    }

    /// Replaces the base URL, normalising it to end with `/`.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(raw)?;
        Ok(self)
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Reads `ENV`, `COFFEE_ORDER_BASE_URL` and `COFFEE_ORDER_CURRENCY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = AppEnvironment::from_env_value(lookup(ENV_VAR).as_deref());
        let mut config = Self::for_environment(environment)?;
        if let Some(raw) = lookup(BASE_URL_VAR) {
            config = config.with_base_url(&raw)?;
        }
        if let Some(currency) = lookup(CURRENCY_VAR) {
            config = config.with_currency(currency);
        }
        Ok(config)
    }
}

/// Parses a base URL and appends a trailing `/` so relative paths are appended, not
/// substituted for the last segment.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url =
        Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl(format!("{}: {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl(format!(
            "{}: cannot be used as a base",
            raw
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_environment_selection() {
        assert_eq!(AppEnvironment::from_env_value(None), AppEnvironment::Dev);
        assert_eq!(AppEnvironment::from_env_value(Some("TEST")), AppEnvironment::Test);
        assert_eq!(AppEnvironment::from_env_value(Some("PROD")), AppEnvironment::Prod);
        assert_eq!(AppEnvironment::from_env_value(Some("prod")), AppEnvironment::Dev);
        assert_eq!(AppEnvironment::from_env_value(Some("STAGING")), AppEnvironment::Dev);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!(AppEnvironment::parse("Prod"), Ok(AppEnvironment::Prod));
        assert!(matches!(
            AppEnvironment::parse("staging"),
            Err(ConfigError::UnknownEnvironment(_))
        ));
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.environment, AppEnvironment::Dev);
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8000/");
        assert_eq!(config.currency, "CZK");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("ENV", "PROD"),
            ("COFFEE_ORDER_BASE_URL", "https://coffee.example.com/v2"),
            ("COFFEE_ORDER_CURRENCY", "EUR"),
        ]))
        .unwrap();

        assert_eq!(config.environment, AppEnvironment::Prod);
        assert_eq!(config.base_url.as_str(), "https://coffee.example.com/v2/");
        assert_eq!(config.currency, "EUR");
    }

    #[test]
    fn test_invalid_base_url() {
        let result =
            ClientConfig::from_lookup(lookup_from(&[("COFFEE_ORDER_BASE_URL", "not a url")]));
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(_))));

        let result = ClientConfig::for_environment(AppEnvironment::Dev)
            .unwrap()
            .with_base_url("mailto:barista@example.com");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(_))));
    }
}
