// ABOUTME: Main library entry point for the FitMind coaching API
// ABOUTME: Plan generation with provider fallback, images, speech, PDF export and client state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

#![deny(unsafe_code)]

//! # `FitMind`
//!
//! Personalized workout and nutrition plans from a user profile. Plan text
//! comes from the first AI provider that answers with usable JSON; any
//! section it leaves out is filled from deterministic templates, and with no
//! provider configured the templates produce the whole plan.
//!
//! ## Architecture
//!
//! - **Generation**: ordered [`generation::PlanSource`] chain ending in the
//!   template generator
//! - **LLM**: `OpenAI` and Gemini chat adapters behind [`llm::LlmProvider`]
//! - **Images / Speech**: optional providers with placeholder and
//!   local-synthesis fallbacks
//! - **Progress**: client-side state over a [`progress::KeyValueStore`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitmind::config::ServerConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! println!("FitMind configured with port: HTTP={}", config.http_port);
//! # Ok(())
//! # }
//! ```

/// Environment configuration
pub mod config;

/// Application constants: env var names, defaults, limits, storage keys
pub mod constants;

/// Unified error handling
pub mod errors;

/// Plan generation chain and provider output reconciliation
pub mod generation;

/// Shared outbound HTTP client construction
pub mod http_client;

/// Image generation with placeholder fallback
pub mod images;

/// Text-generation provider SPI and adapters
pub mod llm;

/// Tracing subscriber setup
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// PDF rendering of plans
pub mod pdf;

/// Client-local persistence, progress and daily quote
pub mod progress;

/// Shared server state
pub mod resources;

/// HTTP routes
pub mod routes;

/// Text-to-speech and playback
pub mod speech;

/// Deterministic template plan generator
pub mod templates;

/// Data model shared with clients
pub use fitmind_core::models;
