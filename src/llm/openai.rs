// ABOUTME: OpenAI chat completions provider used as the primary plan generator
// ABOUTME: Bearer-authenticated POST to /chat/completions with non-streaming responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! # `OpenAI` Provider
//!
//! Works against any endpoint that speaks the `OpenAI` chat completions
//! protocol; the base URL comes from `OPENAI_BASE_URL`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::{body_preview, ChatMessage, ChatRequest, ChatResponse, LlmProvider};
use crate::config::ProviderSettings;
use crate::constants::service_names;
use crate::errors::{AppError, ErrorCode};

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: &'static str,
    content: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str(),
            content: msg.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// `OpenAI` chat completions provider
pub struct OpenAiProvider {
    client: Client,
    settings: ProviderSettings,
}

impl OpenAiProvider {
    /// Create a provider from settings and a shared HTTP client
    #[must_use]
    pub const fn new(settings: ProviderSettings, client: Client) -> Self {
        Self { client, settings }
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.settings.base_url)
    }

    /// Map a non-success response to an error, preferring the API's own message
    fn parse_error_response(status: StatusCode, body: &str) -> AppError {
        let message = serde_json::from_str::<OpenAiErrorResponse>(body).map_or_else(
            |_| format!("API error ({status}): {}", body_preview(body)),
            |parsed| parsed.error.message,
        );

        match status.as_u16() {
            401 | 403 => AppError::new(
                ErrorCode::ExternalAuthFailed,
                format!("{} authentication failed: {message}", service_names::OPENAI),
            ),
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                format!("{} rate limit exceeded: {message}", service_names::OPENAI),
            ),
            _ => AppError::external_service(service_names::OPENAI, message),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn is_configured(&self) -> bool {
        self.settings.is_configured()
    }

    #[instrument(skip(self, request), fields(provider = "openai"))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let api_key = self.settings.api_key.as_deref().ok_or_else(|| {
            AppError::external_unavailable(service_names::OPENAI, "API key not configured")
        })?;
        let model = self.settings.model.as_str();

        let openai_request = OpenAiRequest {
            model: model.to_owned(),
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(
            model,
            messages = openai_request.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(api_key)
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                AppError::external_service(service_names::OPENAI, format!("Request failed: {e}"))
                    .with_source(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::external_service(
                service_names::OPENAI,
                format!("Failed to read response: {e}"),
            )
        })?;

        if !status.is_success() {
            warn!(status = %status, "OpenAI API error");
            return Err(Self::parse_error_response(status, &body));
        }

        let parsed: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::external_service(
                service_names::OPENAI,
                format!("Failed to parse response: {e}"),
            )
        })?;

        let choice = parsed.choices.into_iter().next();
        let finish_reason = choice.as_ref().and_then(|c| c.finish_reason.clone());
        let content = choice
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                AppError::external_service(service_names::OPENAI, "No content received")
            })?;

        Ok(ChatResponse {
            content,
            model: parsed.model.unwrap_or_else(|| model.to_owned()),
            finish_reason,
        })
    }
}
