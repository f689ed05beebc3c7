// ABOUTME: Illustration pipeline for exercises and meals with a guaranteed placeholder fallback
// ABOUTME: Defines the image provider contract, prompts and the ordered fallback service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! # Image Generation
//!
//! Same fallback shape as plan generation: each [`ImageProvider`] either
//! returns a URL, reports itself unconfigured, or fails; the placeholder URL
//! at the end of the chain needs no credential and cannot fail.

mod openai;
mod replicate;

pub use openai::OpenAiImageProvider;
pub use replicate::ReplicateImageProvider;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::ProvidersConfig;
use crate::errors::AppError;

/// What an illustration depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    /// A person performing an exercise
    Exercise,
    /// A plated dish
    Meal,
}

impl ImageKind {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exercise => "exercise",
            Self::Meal => "meal",
        }
    }

    /// Placeholder background color (hex, no `#`)
    #[must_use]
    pub const fn placeholder_color(&self) -> &'static str {
        match self {
            Self::Exercise => "3B82F6",
            Self::Meal => "10B981",
        }
    }

    const fn placeholder_label(&self) -> &'static str {
        match self {
            Self::Exercise => "Exercise",
            Self::Meal => "Recipe",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Natural-language prompt describing the illustration
#[must_use]
pub fn image_prompt(item_name: &str, kind: ImageKind) -> String {
    match kind {
        ImageKind::Exercise => format!(
            "A high-quality, realistic image of a person performing {item_name} exercise in a gym \
             or fitness setting. Professional fitness photography style, good lighting, proper \
             form demonstration, clean background. Focus on the exercise technique and movement."
        ),
        ImageKind::Meal => format!(
            "A high-quality, appetizing food photography image of {item_name}. Professional food \
             styling, good lighting, restaurant quality presentation, clean background. The dish \
             should look delicious and well-prepared."
        ),
    }
}

/// Deterministic placeholder URL embedding the item name and a kind color
#[must_use]
pub fn placeholder_url(item_name: &str, kind: ImageKind) -> String {
    format!(
        "https://via.placeholder.com/400x300/{}/FFFFFF?text={}+{}",
        kind.placeholder_color(),
        urlencoding::encode(item_name),
        kind.placeholder_label()
    )
}

/// An external image generation service
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Identifier used in logs
    fn name(&self) -> &'static str;

    /// Whether a credential is configured
    fn is_configured(&self) -> bool;

    /// Generate an image and return its URL
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status or a
    /// response without an image URL.
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

/// Ordered image providers ending in the placeholder
pub struct ImageService {
    providers: Vec<Arc<dyn ImageProvider>>,
}

impl ImageService {
    /// Service over an explicit provider order
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn ImageProvider>>) -> Self {
        Self { providers }
    }

    /// Standard chain: `OpenAI` images, then Replicate, then placeholder
    #[must_use]
    pub fn from_config(providers: &ProvidersConfig, client: &Client) -> Self {
        Self::new(vec![
            Arc::new(OpenAiImageProvider::new(
                providers.openai.clone(),
                client.clone(),
            )),
            Arc::new(ReplicateImageProvider::new(
                providers.replicate.clone(),
                client.clone(),
            )),
        ])
    }

    /// URL of an illustration for the item; always succeeds
    #[instrument(skip(self), fields(kind = %kind))]
    pub async fn generate(&self, item_name: &str, kind: ImageKind) -> String {
        let prompt = image_prompt(item_name, kind);

        for provider in &self.providers {
            if !provider.is_configured() {
                debug!(provider = provider.name(), "Image provider not configured, skipping");
                continue;
            }
            match provider.generate(&prompt).await {
                Ok(url) => {
                    info!(provider = provider.name(), "Image generated");
                    return url;
                }
                Err(e) => {
                    warn!(provider = provider.name(), error = %e, "Image provider failed, trying next");
                }
            }
        }

        placeholder_url(item_name, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider {
        configured: bool,
        result: Result<&'static str, &'static str>,
    }

    #[async_trait]
    impl ImageProvider for FixedProvider {
        fn name(&self) -> &'static str {
            "fixed"
        }
        fn is_configured(&self) -> bool {
            self.configured
        }
        async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
            self.result
                .map(str::to_owned)
                .map_err(|msg| AppError::external_service("fixed", msg))
        }
    }

    #[test]
    fn test_placeholder_urls() {
        assert_eq!(
            placeholder_url("Push-ups", ImageKind::Exercise),
            "https://via.placeholder.com/400x300/3B82F6/FFFFFF?text=Push-ups+Exercise"
        );
        assert_eq!(
            placeholder_url("Quinoa Buddha Bowl", ImageKind::Meal),
            "https://via.placeholder.com/400x300/10B981/FFFFFF?text=Quinoa%20Buddha%20Bowl+Recipe"
        );
    }

    #[test]
    fn test_prompts_mention_item() {
        assert!(image_prompt("Deadlift", ImageKind::Exercise).contains("performing Deadlift exercise"));
        assert!(image_prompt("Greek Yogurt", ImageKind::Meal).contains("image of Greek Yogurt."));
    }

    #[tokio::test]
    async fn test_unconfigured_service_returns_placeholder() {
        let service = ImageService::from_config(&ProvidersConfig::unconfigured(), &Client::new());
        for kind in [ImageKind::Exercise, ImageKind::Meal] {
            let url = service.generate("Mountain Climbers", kind).await;
            assert!(url.contains("Mountain%20Climbers"));
            assert!(url.contains(kind.placeholder_color()));
        }
    }

    #[tokio::test]
    async fn test_failed_provider_falls_through_to_next() {
        let service = ImageService::new(vec![
            Arc::new(FixedProvider {
                configured: true,
                result: Err("boom"),
            }),
            Arc::new(FixedProvider {
                configured: true,
                result: Ok("https://img.example/squat.png"),
            }),
        ]);
        assert_eq!(
            service.generate("Squats", ImageKind::Exercise).await,
            "https://img.example/squat.png"
        );
    }

    #[tokio::test]
    async fn test_unconfigured_provider_is_skipped() {
        let service = ImageService::new(vec![Arc::new(FixedProvider {
            configured: false,
            result: Ok("https://never.example"),
        })]);
        assert_eq!(
            service.generate("Plank", ImageKind::Exercise).await,
            placeholder_url("Plank", ImageKind::Exercise)
        );
    }
}
