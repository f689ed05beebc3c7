// ABOUTME: Plan source backed by a chat completion provider
// ABOUTME: Renders the plan prompt, extracts the JSON object and reconciles it into a draft
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use fitmind_core::models::UserProfile;

use super::{PlanDraft, PlanSource};
use crate::constants::limits;
use crate::errors::AppError;
use crate::llm::prompts::{build_plan_prompt, system_prompt, JSON_ONLY_SUFFIX};
use crate::llm::{extract_json_object, ChatMessage, ChatRequest, LlmProvider};

/// How the JSON instruction reaches the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// System role message plus sampling limits
    SystemRole,
    /// Single user turn ending with an explicit JSON-only instruction
    JsonSuffix,
}

/// Adapts an [`LlmProvider`] to the [`PlanSource`] contract
pub struct LlmPlanSource {
    provider: Arc<dyn LlmProvider>,
    style: PromptStyle,
}

impl LlmPlanSource {
    /// Wrap a provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, style: PromptStyle) -> Self {
        Self { provider, style }
    }

    fn build_request(&self, profile: &UserProfile) -> ChatRequest {
        let prompt = build_plan_prompt(profile);
        match self.style {
            PromptStyle::SystemRole => ChatRequest::new(vec![
                ChatMessage::system(system_prompt()),
                ChatMessage::user(prompt),
            ])
            .with_max_tokens(limits::PLAN_MAX_TOKENS)
            .with_temperature(limits::PLAN_TEMPERATURE),
            PromptStyle::JsonSuffix => {
                ChatRequest::new(vec![ChatMessage::user(prompt + JSON_ONLY_SUFFIX)])
            }
        }
    }
}

#[async_trait]
impl PlanSource for LlmPlanSource {
    fn name(&self) -> &str {
        self.provider.name()
    }

    async fn produce(&self, profile: &UserProfile) -> Result<Option<PlanDraft>, AppError> {
        if !self.provider.is_configured() {
            return Ok(None);
        }

        let response = self.provider.complete(&self.build_request(profile)).await?;
        debug!(
            provider = self.provider.name(),
            model = %response.model,
            chars = response.content.len(),
            "Received plan completion"
        );

        let object = extract_json_object(&response.content)?;
        PlanDraft::from_json_object(&object).map(Some)
    }
}
