// ABOUTME: OpenAI images provider (DALL-E) returning a hosted image URL
// ABOUTME: One square standard-quality image per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::ImageProvider;
use crate::config::ProviderSettings;
use crate::constants::{defaults, service_names};
use crate::errors::AppError;
use crate::llm::body_preview;

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
    quality: &'a str,
    response_format: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

/// `OpenAI` image generation
pub struct OpenAiImageProvider {
    client: Client,
    settings: ProviderSettings,
}

impl OpenAiImageProvider {
    /// Provider sharing the `OpenAI` credential and base URL
    #[must_use]
    pub const fn new(settings: ProviderSettings, client: Client) -> Self {
        Self { client, settings }
    }
}

#[async_trait]
impl ImageProvider for OpenAiImageProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn is_configured(&self) -> bool {
        self.settings.is_configured()
    }

    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let api_key = self.settings.api_key.as_deref().ok_or_else(|| {
            AppError::external_unavailable(service_names::OPENAI, "API key not configured")
        })?;

        let response = self
            .client
            .post(format!("{}/images/generations", self.settings.base_url))
            .bearer_auth(api_key)
            .json(&ImageRequest {
                model: defaults::OPENAI_IMAGE_MODEL,
                prompt,
                n: 1,
                size: "1024x1024",
                quality: "standard",
                response_format: "url",
            })
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(
                    service_names::OPENAI,
                    format!("Request failed: {}", e.without_url()),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(
                service_names::OPENAI,
                format!("Image API error ({status}): {}", body_preview(&body)),
            ));
        }

        let parsed: ImageResponse = response.json().await.map_err(|e| {
            AppError::external_service(
                service_names::OPENAI,
                format!("Failed to parse image response: {e}"),
            )
        })?;

        parsed
            .data
            .into_iter()
            .find_map(|image| image.url)
            .ok_or_else(|| {
                AppError::external_service(service_names::OPENAI, "No image URL returned")
            })
    }
}

