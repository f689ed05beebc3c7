// ABOUTME: Tests for loading server configuration from the process environment
// ABOUTME: Serialized because every test mutates shared environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use fitmind::config::ServerConfig;
use fitmind::constants::env_vars;
use serial_test::serial;

const ALL_VARS: [&str; 16] = [
    env_vars::HTTP_PORT,
    env_vars::HOST,
    env_vars::CORS_ALLOWED_ORIGINS,
    env_vars::PROVIDER_TIMEOUT_SECS,
    env_vars::OPENAI_API_KEY,
    env_vars::OPENAI_BASE_URL,
    env_vars::OPENAI_MODEL,
    env_vars::GEMINI_API_KEY,
    env_vars::GEMINI_BASE_URL,
    env_vars::GEMINI_MODEL,
    env_vars::REPLICATE_API_TOKEN,
    env_vars::REPLICATE_BASE_URL,
    env_vars::ELEVENLABS_API_KEY,
    env_vars::ELEVENLABS_BASE_URL,
    env_vars::ELEVENLABS_VOICE_ID,
    "ENVIRONMENT",
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8081);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.cors.allowed_origins, "*");
    assert!(!config.providers.openai.is_configured());
    assert_eq!(config.providers.openai.model, "gpt-3.5-turbo");
    assert_eq!(config.providers.elevenlabs.model, "21m00Tcm4TlvDq8ikWAM");
    assert_eq!(config.providers.request_timeout, None);
}

#[test]
#[serial]
fn test_from_env_reads_credentials_and_overrides() {
    clear_env();
    env::set_var(env_vars::HTTP_PORT, "9090");
    env::set_var(env_vars::OPENAI_API_KEY, "sk-env");
    env::set_var(env_vars::GEMINI_MODEL, "gemini-1.5-flash");
    env::set_var(env_vars::PROVIDER_TIMEOUT_SECS, "30");
    env::set_var(env_vars::ELEVENLABS_API_KEY, "");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 9090);
    assert_eq!(config.providers.openai.api_key.as_deref(), Some("sk-env"));
    assert_eq!(config.providers.gemini.model, "gemini-1.5-flash");
    assert_eq!(
        config.providers.request_timeout,
        Some(Duration::from_secs(30))
    );
    assert!(!config.providers.elevenlabs.is_configured());

    clear_env();
}

#[test]
#[serial]
fn test_zero_timeout_means_none() {
    clear_env();
    env::set_var(env_vars::PROVIDER_TIMEOUT_SECS, "0");
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.providers.request_timeout, None);
    clear_env();
}

#[test]
#[serial]
fn test_invalid_port_is_an_error() {
    clear_env();
    env::set_var(env_vars::HTTP_PORT, "not-a-port");
    assert!(ServerConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_summary_hides_credentials() {
    clear_env();
    env::set_var(env_vars::OPENAI_API_KEY, "sk-very-secret");
    let config = ServerConfig::from_env().unwrap();
    let summary = config.summary();
    assert!(summary.contains("OpenAI (text, images): Enabled"));
    assert!(summary.contains("Gemini (text): Disabled"));
    assert!(!summary.contains("sk-very-secret"));
    clear_env();
}
