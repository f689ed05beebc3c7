// ABOUTME: Shared HTTP client construction for outbound provider calls
// ABOUTME: One pooled client per server, with an optional per-request timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::warn;

/// Connection timeout applied whenever a request timeout is configured
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Build the HTTP client every provider adapter shares
///
/// With `timeout = None` requests wait as long as the provider takes, so a
/// hung provider stalls only the attempt it belongs to.
#[must_use]
pub fn build_client(timeout: Option<Duration>) -> Client {
    let builder = match timeout {
        Some(timeout) => ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout)),
        None => ClientBuilder::new(),
    };

    builder.build().unwrap_or_else(|e| {
        warn!("Failed to build configured HTTP client, using defaults: {e}");
        Client::new()
    })
}
