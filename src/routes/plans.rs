// ABOUTME: Plan generation route
// ABOUTME: Validates the profile and runs the provider chain, which always yields a plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use fitmind_core::models::{Plan, UserProfile};

use super::JsonBody;
use crate::errors::AppError;
use crate::resources::ServerResources;

/// Plan routes implementation
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create the plan generation route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/generate-plan", post(Self::handle_generate))
            .with_state(resources)
    }

    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        JsonBody(profile): JsonBody<UserProfile>,
    ) -> Result<Json<Plan>, AppError> {
        profile.validate()?;

        let generated = resources.orchestrator.generate(&profile).await;
        info!(
            plan_id = %generated.plan.id,
            source = %generated.source,
            backfilled = ?generated.backfilled,
            "Plan generated"
        );
        Ok(Json(generated.plan))
    }
}
