// ABOUTME: Image generation route for exercises and meals
// ABOUTME: Always answers with a URL, falling back to a placeholder image
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::JsonBody;
use crate::errors::AppError;
use crate::images::ImageKind;
use crate::resources::ServerResources;

/// `POST /api/generate-image` body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest {
    /// Exercise or dish name
    #[serde(default)]
    pub item_name: Option<String>,
    /// Item category
    #[serde(default, rename = "type")]
    pub kind: Option<ImageKind>,
}

/// `POST /api/generate-image` response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResponse {
    /// Generated or placeholder image
    pub image_url: String,
}

/// Image routes implementation
pub struct ImageRoutes;

impl ImageRoutes {
    /// Create the image generation route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/generate-image", post(Self::handle_generate))
            .with_state(resources)
    }

    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        JsonBody(request): JsonBody<GenerateImageRequest>,
    ) -> Result<Json<GenerateImageResponse>, AppError> {
        let (Some(item_name), Some(kind)) = (
            request.item_name.filter(|name| !name.trim().is_empty()),
            request.kind,
        ) else {
            return Err(AppError::invalid_input("Missing itemName or type"));
        };

        let image_url = resources.images.generate(&item_name, kind).await;
        Ok(Json(GenerateImageResponse { image_url }))
    }
}
