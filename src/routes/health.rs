// ABOUTME: Health check route for service monitoring
// ABOUTME: Reports liveness with the current timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> Router {
        async fn health_handler() -> Json<Value> {
            Json(json!({
                "status": "healthy",
                "timestamp": Utc::now().to_rfc3339()
            }))
        }

        Router::new().route("/health", get(health_handler))
    }
}
