// ABOUTME: Route module organization for the FitMind HTTP API
// ABOUTME: Domain routers merged under shared CORS and request tracing layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! Route module for the `FitMind` server
//!
//! Each domain module holds route definitions and thin handlers that delegate
//! to the services in [`ServerResources`].

/// PDF export routes
pub mod export;
/// Health check routes
pub mod health;
/// Image generation routes
pub mod images;
/// Plan generation routes
pub mod plans;
/// Text-to-speech routes
pub mod speech;

pub use export::ExportRoutes;
pub use health::HealthRoutes;
pub use images::ImageRoutes;
pub use plans::PlanRoutes;
pub use speech::SpeechRoutes;

use std::sync::Arc;

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::{Json, Router};
use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::middleware::{setup_cors, with_request_tracing};
use crate::resources::ServerResources;

/// JSON body extractor whose rejection is a 400 `{"error": ...}` body
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid_input(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Complete API router
pub fn router(resources: &Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);
    let routes = Router::new()
        .merge(HealthRoutes::routes())
        .merge(PlanRoutes::routes(Arc::clone(resources)))
        .merge(ImageRoutes::routes(Arc::clone(resources)))
        .merge(SpeechRoutes::routes(Arc::clone(resources)))
        .merge(ExportRoutes::routes())
        .layer(cors);
    with_request_tracing(routes)
}
