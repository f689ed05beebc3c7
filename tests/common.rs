// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Quiet logging, sample profiles and server configs pointed at mock providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitmind`

use std::collections::HashMap;
use std::sync::{Arc, Once};

use fitmind::config::ServerConfig;
use fitmind::models::UserProfile;
use fitmind::resources::ServerResources;
use serde_json::{json, Value};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// The profile from the end-to-end example
pub fn alice_json() -> Value {
    json!({
        "name": "Alice",
        "age": 30,
        "height": 165,
        "weight": 60,
        "fitnessGoal": "weight-loss",
        "fitnessLevel": "beginner",
        "workoutLocation": "home",
        "dietaryPreference": "vegetarian"
    })
}

/// [`alice_json`] as a typed profile
pub fn alice_profile() -> UserProfile {
    serde_json::from_value(alice_json()).expect("valid profile")
}

/// Configuration from explicit variables only, ignoring the process environment
pub fn config_with(vars: &[(&str, &str)]) -> ServerConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned()).expect("valid test config")
}

/// Configuration with no provider credentials
pub fn unconfigured() -> ServerConfig {
    config_with(&[])
}

/// Resources wired from `config`
pub fn resources(config: ServerConfig) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(config))
}

/// Full router over `config`
pub fn router(config: ServerConfig) -> axum::Router {
    fitmind::routes::router(&resources(config))
}
