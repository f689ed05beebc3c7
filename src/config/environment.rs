// ABOUTME: Environment configuration for ports, CORS and external provider credentials
// ABOUTME: Every credential is optional; a missing key makes that provider unavailable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! Environment-based configuration

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::info;

use crate::constants::{defaults, env_vars};

/// Connection settings for one external provider
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// Credential; `None` means the provider is not configured
    pub api_key: Option<String>,
    /// API base URL without trailing slash
    pub base_url: String,
    /// Model or voice identifier
    pub model: String,
}

impl ProviderSettings {
    /// Settings for a provider at `base_url`
    #[must_use]
    pub fn new(api_key: Option<String>, base_url: &str, model: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_owned(),
            model: model.to_owned(),
        }
    }

    /// Whether a credential is present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

// Keep credentials out of logs
impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// External providers, in the roles the pipelines use them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvidersConfig {
    /// Primary text provider and primary image provider
    pub openai: ProviderSettings,
    /// Secondary text provider
    pub gemini: ProviderSettings,
    /// Secondary image provider; `model` is the model version hash
    pub replicate: ProviderSettings,
    /// Speech provider; `model` is the voice id
    pub elevenlabs: ProviderSettings,
    /// Per-request timeout for outbound calls; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl ProvidersConfig {
    /// Configuration with no credentials at all (every pipeline falls back)
    #[must_use]
    pub fn unconfigured() -> Self {
        Self::from_lookup(|_| None)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let or_default = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_owned());

        Self {
            openai: ProviderSettings::new(
                var(env_vars::OPENAI_API_KEY),
                &or_default(env_vars::OPENAI_BASE_URL, defaults::OPENAI_BASE_URL),
                &or_default(env_vars::OPENAI_MODEL, defaults::OPENAI_MODEL),
            ),
            gemini: ProviderSettings::new(
                var(env_vars::GEMINI_API_KEY),
                &or_default(env_vars::GEMINI_BASE_URL, defaults::GEMINI_BASE_URL),
                &or_default(env_vars::GEMINI_MODEL, defaults::GEMINI_MODEL),
            ),
            replicate: ProviderSettings::new(
                var(env_vars::REPLICATE_API_TOKEN),
                &or_default(env_vars::REPLICATE_BASE_URL, defaults::REPLICATE_BASE_URL),
                defaults::REPLICATE_MODEL_VERSION,
            ),
            elevenlabs: ProviderSettings::new(
                var(env_vars::ELEVENLABS_API_KEY),
                &or_default(env_vars::ELEVENLABS_BASE_URL, defaults::ELEVENLABS_BASE_URL),
                &or_default(env_vars::ELEVENLABS_VOICE_ID, defaults::ELEVENLABS_VOICE_ID),
            ),
            request_timeout: var(env_vars::PROVIDER_TIMEOUT_SECS)
                .and_then(|secs| secs.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

/// CORS settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// `*` or a comma-separated list of origins
    pub allowed_origins: String,
}

/// Top-level server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// CORS policy
    pub cors: CorsConfig,
    /// External providers
    pub providers: ProvidersConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is present but not a valid port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let http_port = match lookup(env_vars::HTTP_PORT) {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("Invalid {} value: {port}", env_vars::HTTP_PORT))?,
            None => defaults::HTTP_PORT,
        };

        Ok(Self {
            http_port,
            host: lookup(env_vars::HOST).unwrap_or_else(|| defaults::HOST.to_owned()),
            cors: CorsConfig {
                allowed_origins: lookup(env_vars::CORS_ALLOWED_ORIGINS)
                    .unwrap_or_else(|| defaults::CORS_ALLOWED_ORIGINS.to_owned()),
            },
            providers: ProvidersConfig::from_lookup(&lookup),
        })
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        let status = |settings: &ProviderSettings| {
            if settings.is_configured() {
                "Enabled"
            } else {
                "Disabled"
            }
        };
        format!(
            "FitMind Server Configuration:\n\
             - Listen: {}:{}\n\
             - CORS Origins: {}\n\
             - OpenAI (text, images): {}\n\
             - Gemini (text): {}\n\
             - Replicate (images): {}\n\
             - ElevenLabs (speech): {}\n\
             - Provider Timeout: {}",
            self.host,
            self.http_port,
            self.cors.allowed_origins,
            status(&self.providers.openai),
            status(&self.providers.gemini),
            status(&self.providers.replicate),
            status(&self.providers.elevenlabs),
            self.providers
                .request_timeout
                .map_or_else(|| "none".to_owned(), |t| format!("{}s", t.as_secs())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.http_port, defaults::HTTP_PORT);
        assert_eq!(config.cors.allowed_origins, "*");
        assert!(!config.providers.openai.is_configured());
        assert!(!config.providers.gemini.is_configured());
        assert_eq!(config.providers.gemini.model, defaults::GEMINI_MODEL);
        assert!(config.providers.request_timeout.is_none());
    }

    #[test]
    fn test_empty_credential_counts_as_absent() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (env_vars::OPENAI_API_KEY, "  "),
            (env_vars::GEMINI_API_KEY, "g-key"),
        ]))
        .unwrap();
        assert!(!config.providers.openai.is_configured());
        assert_eq!(config.providers.gemini.api_key.as_deref(), Some("g-key"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = ServerConfig::from_lookup(lookup_from(&[(
            env_vars::OPENAI_BASE_URL,
            "http://localhost:9000/v1/",
        )]))
        .unwrap();
        assert_eq!(config.providers.openai.base_url, "http://localhost:9000/v1");
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(ServerConfig::from_lookup(lookup_from(&[(env_vars::HTTP_PORT, "http")])).is_err());
    }

    #[test]
    fn test_timeout_zero_disables_deadline() {
        let config = ServerConfig::from_lookup(lookup_from(&[(
            env_vars::PROVIDER_TIMEOUT_SECS,
            "0",
        )]))
        .unwrap();
        assert!(config.providers.request_timeout.is_none());

        let config = ServerConfig::from_lookup(lookup_from(&[(
            env_vars::PROVIDER_TIMEOUT_SECS,
            "45",
        )]))
        .unwrap();
        assert_eq!(
            config.providers.request_timeout,
            Some(Duration::from_secs(45))
        );
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let settings = ProviderSettings::new(Some("sk-secret".to_owned()), "http://x", "m");
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("REDACTED"));
    }
}
