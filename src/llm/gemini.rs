// ABOUTME: Google Gemini provider used as the secondary plan generator
// ABOUTME: Calls generateContent with the API key in the x-goog-api-key header
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! # Gemini Provider
//!
//! Implementation of the `LlmProvider` trait for Google's Gemini models via
//! the Generative Language API. System messages are sent as
//! `system_instruction`; everything else becomes a user turn.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::{body_preview, ChatMessage, ChatRequest, ChatResponse, LlmProvider, MessageRole};
use crate::config::ProviderSettings;
use crate::constants::service_names;
use crate::errors::{AppError, ErrorCode};

const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
pub struct GeminiProvider {
    client: Client,
    settings: ProviderSettings,
}

impl GeminiProvider {
    /// Create a provider from settings and a shared HTTP client
    #[must_use]
    pub const fn new(settings: ProviderSettings, client: Client) -> Self {
        Self { client, settings }
    }

    fn build_url(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.settings.base_url)
    }

    fn text_content(message: &ChatMessage) -> GeminiContent {
        GeminiContent {
            role: match message.role {
                MessageRole::System => None,
                MessageRole::User => Some("user".to_owned()),
            },
            parts: vec![ContentPart {
                text: message.content.clone(),
            }],
        }
    }

    fn build_gemini_request(request: &ChatRequest) -> GeminiRequest {
        let system_instruction = request
            .messages
            .iter()
            .find(|m| m.role == MessageRole::System)
            .map(Self::text_content);
        let contents = request
            .messages
            .iter()
            .filter(|m| m.role != MessageRole::System)
            .map(Self::text_content)
            .collect();

        let generation_config = (request.temperature.is_some() || request.max_tokens.is_some())
            .then_some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            });

        GeminiRequest {
            contents,
            system_instruction,
            generation_config,
        }
    }

    /// Concatenate the text parts of the first candidate
    fn extract_content(response: &GeminiResponse) -> Result<String, AppError> {
        let text: String = response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AppError::external_service(
                service_names::GEMINI,
                "No content in Gemini response",
            ));
        }
        Ok(text)
    }

    fn map_api_error(status: u16, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| body_preview(response_text), |e| e.message);

        match status {
            401 | 403 => AppError::new(
                ErrorCode::ExternalAuthFailed,
                format!("Gemini authentication failed: {message}"),
            ),
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                format!("Gemini quota exceeded: {message}"),
            ),
            _ => AppError::external_service(
                service_names::GEMINI,
                format!("API error ({status}): {message}"),
            ),
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn is_configured(&self) -> bool {
        self.settings.is_configured()
    }

    #[instrument(skip(self, request), fields(provider = "gemini"))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let api_key = self.settings.api_key.as_deref().ok_or_else(|| {
            AppError::external_unavailable(service_names::GEMINI, "API key not configured")
        })?;
        let model = self.settings.model.as_str();

        debug!(model, "Sending request to Gemini API");

        let response = self
            .client
            .post(self.build_url(model))
            .header(API_KEY_HEADER, api_key)
            .json(&Self::build_gemini_request(request))
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                AppError::external_service(service_names::GEMINI, format!("Request failed: {e}"))
                    .with_source(e)
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            AppError::external_service(
                service_names::GEMINI,
                format!("Failed to read response: {e}"),
            )
        })?;

        if !status.is_success() {
            warn!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                AppError::external_service(
                    service_names::GEMINI,
                    format!("Failed to parse Gemini response: {e}"),
                )
            })?;

        if let Some(error) = gemini_response.error.as_ref() {
            return Err(AppError::external_service(
                service_names::GEMINI,
                error.message.clone(),
            ));
        }

        let content = Self::extract_content(&gemini_response)?;
        let finish_reason = gemini_response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.finish_reason.clone());

        Ok(ChatResponse {
            content,
            model: model.to_owned(),
            finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ChatMessage;

    #[test]
    fn test_system_message_becomes_system_instruction() {
        let request = ChatRequest::new(vec![
            ChatMessage::system("coach"),
            ChatMessage::user("plan please"),
        ])
        .with_temperature(0.7);

        let body = serde_json::to_value(GeminiProvider::build_gemini_request(&request)).unwrap();
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "coach");
        assert_eq!(body["contents"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["contents"][0]["role"], "user");
        assert!(body["generationConfig"]["temperature"].is_number());
    }

    #[tokio::test]
    async fn test_transport_error_does_not_leak_api_key() {
        let settings = ProviderSettings::new(
            Some("SECRET-GEMINI-KEY".to_owned()),
            "http://127.0.0.1:1/v1beta",
            "gemini-pro",
        );
        let provider = GeminiProvider::new(settings, Client::new());
        let request = ChatRequest::new(vec![ChatMessage::user("plan please")]);

        let err = provider.complete(&request).await.unwrap_err();
        assert!(err.message.starts_with("Gemini: Request failed"));
        assert!(!err.message.contains("SECRET-GEMINI-KEY"));
        assert!(!err.to_string().contains("SECRET-GEMINI-KEY"));
    }

    #[test]
    fn test_quota_error_maps_to_rate_limited() {
        let err = GeminiProvider::map_api_error(
            429,
            r#"{"error":{"message":"Resource has been exhausted"}}"#,
        );
        assert_eq!(err.code, ErrorCode::ExternalRateLimited);
        assert!(err.message.contains("exhausted"));
    }
}
