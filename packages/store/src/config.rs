//! # Application configuration
//!
//! [`AppConfig`] carries everything the client needs to know about its
//! environment: where the REST backend lives, which domain tenant subdomains
//! hang off, the request timeout, and which sign-in strategy the build offers.
//!
//! ## Sources
//!
//! A browser bundle has no process environment, so [`AppConfig::from_env`]
//! reads **build-time** variables through `option_env!`. Native runs can also
//! load a TOML file through [`AppConfig::from_toml`]:
//!
//! ```toml
//! api_base_url = "https://api.hr.example.com"
//! app_domain = "hr.example.com"
//! app_base_url = "https://hr.example.com"
//! request_timeout_secs = 50
//!
//! [auth]
//! strategy = "identity"
//! identity_authorize_url = "https://login.example.com/authorize?client_id=abc"
//! ```
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `HR_API_BASE_URL` | `api_base_url` | `http://localhost:8080` |
//! | `HR_APP_DOMAIN` | `app_domain` | `localhost:3000` |
//! | `HR_APP_BASE_URL` | `app_base_url` | `http://localhost:3000` |
//! | `HR_REQUEST_TIMEOUT_SECS` | `request_timeout_secs` | `50` |
//! | `HR_AUTH_STRATEGY` | `auth.strategy` | `local` |
//! | `HR_IDENTITY_AUTHORIZE_URL` | `auth.identity_authorize_url` | none |

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Which sign-in flow the application offers. Only one is active per build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStrategy {
    /// Email + password against the backend.
    #[default]
    Local,
    /// Third-party identity provider, exchanged for a backend token.
    Identity,
}

impl std::str::FromStr for AuthStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "identity" => Ok(Self::Identity),
            other => Err(ConfigError::InvalidValue {
                key: "HR_AUTH_STRATEGY",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub strategy: AuthStrategy,
    /// Provider authorize URL the sign-in button redirects to (identity strategy).
    #[serde(default)]
    pub identity_authorize_url: Option<String>,
}

/// Top-level client configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_app_domain")]
    pub app_domain: String,
    #[serde(default = "default_app_base_url")]
    pub app_base_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub auth: AuthConfig,
}

fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_app_domain() -> String {
    "localhost:3000".to_string()
}

fn default_app_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_request_timeout() -> u64 {
    50
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            app_domain: default_app_domain(),
            app_base_url: default_app_base_url(),
            request_timeout_secs: default_request_timeout(),
            auth: AuthConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build from the variables baked in at compile time.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            "HR_API_BASE_URL" => option_env!("HR_API_BASE_URL"),
            "HR_APP_DOMAIN" => option_env!("HR_APP_DOMAIN"),
            "HR_APP_BASE_URL" => option_env!("HR_APP_BASE_URL"),
            "HR_REQUEST_TIMEOUT_SECS" => option_env!("HR_REQUEST_TIMEOUT_SECS"),
            "HR_AUTH_STRATEGY" => option_env!("HR_AUTH_STRATEGY"),
            "HR_IDENTITY_AUTHORIZE_URL" => option_env!("HR_IDENTITY_AUTHORIZE_URL"),
            _ => None,
        })
    }

    /// Build from an arbitrary key lookup, falling back to defaults for
    /// anything missing.
    pub fn from_lookup<'a>(
        lookup: impl Fn(&str) -> Option<&'a str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = lookup("HR_API_BASE_URL") {
            config.api_base_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = lookup("HR_APP_DOMAIN") {
            config.app_domain = v.to_string();
        }
        if let Some(v) = lookup("HR_APP_BASE_URL") {
            config.app_base_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = lookup("HR_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = v.parse().map_err(|_| ConfigError::InvalidValue {
                key: "HR_REQUEST_TIMEOUT_SECS",
                value: v.to_string(),
            })?;
        }
        if let Some(v) = lookup("HR_AUTH_STRATEGY") {
            config.auth.strategy = v.parse()?;
        }
        if let Some(v) = lookup("HR_IDENTITY_AUTHORIZE_URL") {
            config.auth.identity_authorize_url = Some(v.to_string());
        }

        Ok(config)
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(50));
        assert_eq!(config.auth.strategy, AuthStrategy::Local);
        assert!(config.auth.identity_authorize_url.is_none());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_toml_overrides() {
        let config = AppConfig::from_toml(
            r#"
            api_base_url = "https://api.hr.example.com"
            app_domain = "hr.example.com"

            [auth]
            strategy = "identity"
            identity_authorize_url = "https://login.example.com/authorize"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://api.hr.example.com");
        assert_eq!(config.app_domain, "hr.example.com");
        assert_eq!(config.request_timeout_secs, 50);
        assert_eq!(config.auth.strategy, AuthStrategy::Identity);
    }

    #[test]
    fn test_lookup_overrides_and_trims_slash() {
        let config = AppConfig::from_lookup(|key| match key {
            "HR_API_BASE_URL" => Some("https://api.example.com/"),
            "HR_REQUEST_TIMEOUT_SECS" => Some("10"),
            "HR_AUTH_STRATEGY" => Some("Identity"),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.auth.strategy, AuthStrategy::Identity);
    }

    #[test]
    fn test_lookup_rejects_bad_values() {
        let err = AppConfig::from_lookup(|key| match key {
            "HR_REQUEST_TIMEOUT_SECS" => Some("soon"),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "HR_REQUEST_TIMEOUT_SECS", .. }
        ));

        assert!(AppConfig::from_lookup(|key| match key {
            "HR_AUTH_STRATEGY" => Some("magic-link"),
            _ => None,
        })
        .is_err());
    }
}
