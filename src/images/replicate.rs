// ABOUTME: Replicate Stable Diffusion provider using a synchronous prediction
// ABOUTME: Sends Prefer: wait so the prediction output comes back in the create response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::ImageProvider;
use crate::config::ProviderSettings;
use crate::constants::service_names;
use crate::errors::AppError;
use crate::llm::body_preview;

#[derive(Debug, Serialize)]
struct PredictionRequest<'a> {
    version: &'a str,
    input: PredictionInput<'a>,
}

#[derive(Debug, Serialize)]
struct PredictionInput<'a> {
    prompt: &'a str,
    width: u32,
    height: u32,
    num_outputs: u32,
    scheduler: &'a str,
    num_inference_steps: u32,
    guidance_scale: f32,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    output: Value,
    #[serde(default)]
    error: Option<Value>,
}

/// Pull a URL out of a prediction `output` that may be a string or a list
fn first_url(output: &Value) -> Option<String> {
    match output {
        Value::String(url) if !url.is_empty() => Some(url.clone()),
        Value::Array(items) => items.iter().find_map(first_url),
        _ => None,
    }
}

/// Replicate predictions API
pub struct ReplicateImageProvider {
    client: Client,
    settings: ProviderSettings,
}

impl ReplicateImageProvider {
    /// Provider for the configured model version
    #[must_use]
    pub const fn new(settings: ProviderSettings, client: Client) -> Self {
        Self { client, settings }
    }
}

#[async_trait]
impl ImageProvider for ReplicateImageProvider {
    fn name(&self) -> &'static str {
        "replicate"
    }

    fn is_configured(&self) -> bool {
        self.settings.is_configured()
    }

    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let token = self.settings.api_key.as_deref().ok_or_else(|| {
            AppError::external_unavailable(service_names::REPLICATE, "API token not configured")
        })?;

        let request = PredictionRequest {
            version: &self.settings.model,
            input: PredictionInput {
                prompt,
                width: 1024,
                height: 1024,
                num_outputs: 1,
                scheduler: "DPMSolverMultistep",
                num_inference_steps: 20,
                guidance_scale: 7.5,
            },
        };

        let response = self
            .client
            .post(format!("{}/predictions", self.settings.base_url))
            .bearer_auth(token)
            .header("Prefer", "wait")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(
                    service_names::REPLICATE,
                    format!("Request failed: {}", e.without_url()),
                )
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::external_service(
                service_names::REPLICATE,
                format!("Failed to read response: {e}"),
            )
        })?;

        if !status.is_success() {
            return Err(AppError::external_service(
                service_names::REPLICATE,
                format!("Prediction error ({status}): {}", body_preview(&body)),
            ));
        }

        let prediction: Prediction = serde_json::from_str(&body).map_err(|e| {
            AppError::external_service(
                service_names::REPLICATE,
                format!("Failed to parse prediction: {e}"),
            )
        })?;
        debug!(status = ?prediction.status, "Replicate prediction returned");

        if let Some(error) = prediction.error.filter(|e| !e.is_null()) {
            return Err(AppError::external_service(
                service_names::REPLICATE,
                format!("Prediction failed: {error}"),
            ));
        }

        first_url(&prediction.output).ok_or_else(|| {
            AppError::external_service(
                service_names::REPLICATE,
                format!(
                    "Prediction finished without output (status {})",
                    prediction.status.as_deref().unwrap_or("unknown")
                ),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_as_list_or_string() {
        assert_eq!(
            first_url(&json!(["https://r.example/1.png", "https://r.example/2.png"])),
            Some("https://r.example/1.png".to_owned())
        );
        assert_eq!(
            first_url(&json!("https://r.example/only.png")),
            Some("https://r.example/only.png".to_owned())
        );
        assert_eq!(first_url(&Value::Null), None);
        assert_eq!(first_url(&json!([])), None);
    }
}
