// ABOUTME: Configuration management module for server and provider settings
// ABOUTME: Environment-only configuration; absent credentials degrade to fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors
//! Configuration module for the `FitMind` server
//!
//! - **Environment**: Server, CORS and provider settings from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, ProviderSettings, ProvidersConfig, ServerConfig};
