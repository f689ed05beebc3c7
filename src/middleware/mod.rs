// ABOUTME: HTTP middleware for CORS and request tracing
// ABOUTME: Request ID generation and per-request spans for structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use tracing::{with_request_tracing, REQUEST_ID_HEADER};
