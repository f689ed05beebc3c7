// ABOUTME: PDF export route for a plan and the profile it was generated for
// ABOUTME: Streams the rendered document back as an attachment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde::Deserialize;
use tracing::error;

use fitmind_core::models::{Plan, UserProfile};

use super::JsonBody;
use crate::errors::AppError;
use crate::pdf::{pdf_filename, render_plan_pdf};

/// `POST /api/export-pdf` body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPdfRequest {
    /// Plan to render
    #[serde(default)]
    pub plan: Option<Plan>,
    /// Profile shown in the document header
    #[serde(default)]
    pub user_data: Option<UserProfile>,
}

/// Export routes implementation
pub struct ExportRoutes;

impl ExportRoutes {
    /// Create the PDF export route
    pub fn routes() -> Router {
        Router::new().route("/api/export-pdf", post(Self::handle_export))
    }

    async fn handle_export(
        JsonBody(request): JsonBody<ExportPdfRequest>,
    ) -> Result<Response, AppError> {
        let (Some(plan), Some(profile)) = (request.plan, request.user_data) else {
            return Err(AppError::invalid_input("Missing plan or user data"));
        };

        let document = render_plan_pdf(&plan, &profile).map_err(|e| {
            error!(plan_id = %plan.id, error = %e, "PDF rendering failed");
            AppError::internal("Failed to generate PDF")
        })?;

        let disposition = format!("attachment; filename=\"{}\"", pdf_filename(&profile));
        Ok((
            [
                (header::CONTENT_TYPE, "application/pdf".to_owned()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            document,
        )
            .into_response())
    }
}
