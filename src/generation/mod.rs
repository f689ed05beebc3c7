// ABOUTME: Plan generation orchestrator with an ordered chain of plan sources
// ABOUTME: Tries each source in turn and falls back to templates, so generation never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! # Plan Generation
//!
//! The orchestrator holds an explicit, ordered list of [`PlanSource`]s built
//! at construction time. Sources are attempted strictly one after another:
//!
//! - `Ok(Some(draft))`: adopted; absent sections are backfilled from templates
//! - `Ok(None)`: the source is not configured, skipped quietly
//! - `Err(_)`: the source failed, logged and skipped
//!
//! When every source is exhausted the template generator builds the plan.
//! Callers cannot tell which source produced a plan except through logs and
//! [`GeneratedPlan::source`].

mod draft;
mod llm_source;

pub use draft::PlanDraft;
pub use llm_source::{LlmPlanSource, PromptStyle};

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use fitmind_core::models::{Plan, UserProfile};

use crate::config::ProvidersConfig;
use crate::errors::AppError;
use crate::llm::{GeminiProvider, OpenAiProvider};
use crate::templates;

/// Name reported for plans built entirely from templates
pub const TEMPLATE_SOURCE: &str = "template";

/// A producer of plan content
#[async_trait]
pub trait PlanSource: Send + Sync {
    /// Identifier used in logs
    fn name(&self) -> &str;

    /// Produce a draft for the profile
    ///
    /// # Errors
    ///
    /// Any failure (transport, status, unparseable output) is an error; the
    /// orchestrator treats it as recoverable.
    async fn produce(&self, profile: &UserProfile) -> Result<Option<PlanDraft>, AppError>;
}

/// A plan together with where it came from
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    /// The complete plan
    pub plan: Plan,
    /// Name of the source whose draft was adopted, or [`TEMPLATE_SOURCE`]
    pub source: String,
    /// Sections filled in from templates
    pub backfilled: Vec<&'static str>,
}

/// Sequential fallback chain ending in the template generator
pub struct GenerationOrchestrator {
    sources: Vec<Arc<dyn PlanSource>>,
}

impl GenerationOrchestrator {
    /// Orchestrator over an explicit source order
    #[must_use]
    pub fn new(sources: Vec<Arc<dyn PlanSource>>) -> Self {
        Self { sources }
    }

    /// Standard chain: `OpenAI`, then Gemini, then templates
    #[must_use]
    pub fn from_config(providers: &ProvidersConfig, client: &Client) -> Self {
        let openai = OpenAiProvider::new(providers.openai.clone(), client.clone());
        let gemini = GeminiProvider::new(providers.gemini.clone(), client.clone());

        Self::new(vec![
            Arc::new(LlmPlanSource::new(Arc::new(openai), PromptStyle::SystemRole)),
            Arc::new(LlmPlanSource::new(Arc::new(gemini), PromptStyle::JsonSuffix)),
        ])
    }

    /// Source names in attempt order, templates excluded
    #[must_use]
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|source| source.name()).collect()
    }

    /// Generate a plan; always succeeds
    #[instrument(skip(self, profile), fields(user = %profile.user_id()))]
    pub async fn generate(&self, profile: &UserProfile) -> GeneratedPlan {
        let created_at = Utc::now();

        for source in &self.sources {
            match source.produce(profile).await {
                Ok(Some(draft)) => {
                    let backfilled = draft.missing_sections();
                    info!(
                        source = source.name(),
                        backfilled = ?backfilled,
                        "Plan generated by provider"
                    );
                    return GeneratedPlan {
                        plan: draft.complete(profile, created_at),
                        source: source.name().to_owned(),
                        backfilled,
                    };
                }
                Ok(None) => {
                    debug!(source = source.name(), "Plan source not configured, skipping");
                }
                Err(e) => {
                    warn!(source = source.name(), error = %e, "Plan source failed, trying next");
                }
            }
        }

        info!("Plan generated from templates");
        GeneratedPlan {
            plan: templates::build_plan(profile, created_at),
            source: TEMPLATE_SOURCE.to_owned(),
            backfilled: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitmind_core::models::Tips;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Behavior {
        Unavailable,
        Fail,
        TipsOnly,
    }

    struct ScriptedSource {
        name: &'static str,
        behavior: Behavior,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(name: &'static str, behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                name,
                behavior,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PlanSource for ScriptedSource {
        fn name(&self) -> &str {
            self.name
        }

        async fn produce(&self, _profile: &UserProfile) -> Result<Option<PlanDraft>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                Behavior::Unavailable => Ok(None),
                Behavior::Fail => Err(AppError::external_service(self.name, "HTTP 500")),
                Behavior::TipsOnly => Ok(Some(PlanDraft {
                    tips: Some(Tips {
                        lifestyle: vec![format!("from {}", self.name)],
                        motivation: Vec::new(),
                        posture: Vec::new(),
                        recovery: Vec::new(),
                    }),
                    ..PlanDraft::default()
                })),
            }
        }
    }

    fn profile() -> UserProfile {
        serde_json::from_value(serde_json::json!({
            "name": "Alice", "age": 30, "height": 165, "weight": 60,
            "fitnessGoal": "weight-loss", "fitnessLevel": "beginner",
            "workoutLocation": "home", "dietaryPreference": "vegetarian"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_first_usable_source_wins_and_later_sources_are_not_called() {
        let primary = ScriptedSource::new("primary", Behavior::TipsOnly);
        let secondary = ScriptedSource::new("secondary", Behavior::TipsOnly);
        let orchestrator = GenerationOrchestrator::new(vec![primary.clone(), secondary.clone()]);

        let generated = orchestrator.generate(&profile()).await;
        assert_eq!(generated.source, "primary");
        assert_eq!(generated.plan.tips.lifestyle, ["from primary"]);
        assert_eq!(generated.backfilled, ["workoutPlan", "dietPlan", "progress"]);
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn test_failure_and_unavailable_fall_through_in_order() {
        let primary = ScriptedSource::new("primary", Behavior::Fail);
        let secondary = ScriptedSource::new("secondary", Behavior::Unavailable);
        let tertiary = ScriptedSource::new("tertiary", Behavior::TipsOnly);
        let orchestrator = GenerationOrchestrator::new(vec![
            primary.clone(),
            secondary.clone(),
            tertiary.clone(),
        ]);

        let generated = orchestrator.generate(&profile()).await;
        assert_eq!(generated.source, "tertiary");
        assert_eq!((primary.calls(), secondary.calls(), tertiary.calls()), (1, 1, 1));
    }

    #[tokio::test]
    async fn test_exhausted_chain_uses_templates() {
        let orchestrator = GenerationOrchestrator::new(vec![
            ScriptedSource::new("primary", Behavior::Fail),
            ScriptedSource::new("secondary", Behavior::Fail),
        ]);
        let generated = orchestrator.generate(&profile()).await;
        assert_eq!(generated.source, TEMPLATE_SOURCE);
        assert_eq!(
            generated.plan,
            templates::build_plan(&profile(), generated.plan.created_at)
        );
    }

    #[tokio::test]
    async fn test_unconfigured_standard_chain_matches_templates() {
        let orchestrator = GenerationOrchestrator::from_config(
            &ProvidersConfig::unconfigured(),
            &Client::new(),
        );
        assert_eq!(orchestrator.source_names(), ["openai", "gemini"]);

        let generated = orchestrator.generate(&profile()).await;
        assert_eq!(generated.source, TEMPLATE_SOURCE);
        assert_eq!(
            generated.plan,
            templates::build_plan(&profile(), generated.plan.created_at)
        );
    }
}
