//! Site settings read from the process environment.
//!
//! Leptos' own options (address, reload port, asset dirs) still come from
//! `[package.metadata.leptos]` through `get_configuration`.

use std::time::Duration;

use thiserror::Error;

use crate::contributions::CONTRIBUTIONS_API_URL;
use crate::email::EMAILJS_API_URL;

const DEFAULT_CACHE_TTL_SECS: u64 = 600;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
    #[error("{missing} must be set when {present} is set")]
    Incomplete {
        missing: &'static str,
        present: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub contributions_api_url: String,
    pub contributions_cache_ttl: Duration,
    /// `None` disables the contact form's delivery.
    pub email: Option<EmailConfig>,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let contributions_api_url =
            get("CONTRIBUTIONS_API_URL").unwrap_or_else(|| CONTRIBUTIONS_API_URL.to_string());
        let ttl_secs = match get("CONTRIBUTIONS_CACHE_TTL_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid {
                    key: "CONTRIBUTIONS_CACHE_TTL_SECS",
                    value,
                })?,
            None => DEFAULT_CACHE_TTL_SECS,
        };

        const EMAIL_KEYS: [&str; 3] = [
            "EMAILJS_SERVICE_ID",
            "EMAILJS_TEMPLATE_ID",
            "EMAILJS_PUBLIC_KEY",
        ];
        let email = match EMAIL_KEYS.map(get) {
            [None, None, None] => None,
            [Some(service_id), Some(template_id), Some(public_key)] => Some(EmailConfig {
                endpoint: get("EMAILJS_API_URL").unwrap_or_else(|| EMAILJS_API_URL.to_string()),
                service_id,
                template_id,
                public_key,
                private_key: get("EMAILJS_PRIVATE_KEY"),
            }),
            values => {
                let present = EMAIL_KEYS
                    .iter()
                    .zip(values.iter())
                    .find_map(|(k, v)| v.as_ref().map(|_| *k))
                    .unwrap_or(EMAIL_KEYS[0]);
                let missing = EMAIL_KEYS
                    .iter()
                    .zip(values.iter())
                    .find_map(|(k, v)| v.is_none().then_some(*k))
                    .unwrap_or(EMAIL_KEYS[0]);
                return Err(ConfigError::Incomplete { missing, present });
            }
        };

        Ok(Self {
            contributions_api_url,
            contributions_cache_ttl: Duration::from_secs(ttl_secs),
            email,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let env = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        SiteConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.contributions_api_url, CONTRIBUTIONS_API_URL);
        assert_eq!(config.contributions_cache_ttl, Duration::from_secs(600));
        assert_eq!(config.email, None);
    }

    #[test]
    fn test_full_email_config() {
        let config = config_from(&[
            ("EMAILJS_SERVICE_ID", "service_1"),
            ("EMAILJS_TEMPLATE_ID", "template_1"),
            ("EMAILJS_PUBLIC_KEY", "pk"),
            ("CONTRIBUTIONS_CACHE_TTL_SECS", "30"),
        ])
        .unwrap();
        let email = config.email.expect("email should be configured");
        assert_eq!(email.endpoint, EMAILJS_API_URL);
        assert_eq!(email.service_id, "service_1");
        assert_eq!(email.private_key, None);
        assert_eq!(config.contributions_cache_ttl, Duration::from_secs(30));
    }

    #[test]
    fn test_partial_email_config() {
        let err = config_from(&[
            ("EMAILJS_SERVICE_ID", "service_1"),
            ("EMAILJS_PUBLIC_KEY", "pk"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Incomplete {
                missing: "EMAILJS_TEMPLATE_ID",
                present: "EMAILJS_SERVICE_ID",
            }
        );
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config_from(&[("EMAILJS_SERVICE_ID", "  "), ("CONTRIBUTIONS_API_URL", "")])
            .unwrap();
        assert_eq!(config.email, None);
        assert_eq!(config.contributions_api_url, CONTRIBUTIONS_API_URL);
    }

    #[test]
    fn test_invalid_ttl() {
        let err = config_from(&[("CONTRIBUTIONS_CACHE_TTL_SECS", "soon")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "CONTRIBUTIONS_CACHE_TTL_SECS",
                ..
            }
        ));
    }
}
