// ABOUTME: Text-to-speech route returning MPEG audio or a local-synthesis signal
// ABOUTME: Every non-audio answer carries useBrowserSpeech so the client can still speak
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::JsonBody;
use crate::resources::ServerResources;
use crate::speech::{PlanSection, SpeechOutcome};

/// `POST /api/text-to-speech` body
#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    /// Text to read aloud
    #[serde(default)]
    pub text: Option<String>,
    /// Plan tab the text came from
    #[serde(default)]
    pub section: Option<PlanSection>,
}

/// JSON answer when no audio is returned
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserSpeechResponse {
    /// Informational message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Failure description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Always true: the client should synthesize locally
    pub use_browser_speech: bool,
}

impl BrowserSpeechResponse {
    fn fallback() -> Self {
        Self {
            message: Some("Use browser speech synthesis".to_owned()),
            error: None,
            use_browser_speech: true,
        }
    }

    fn failure(error: &str) -> Self {
        Self {
            message: None,
            error: Some(error.to_owned()),
            use_browser_speech: true,
        }
    }
}

/// Speech routes implementation
pub struct SpeechRoutes;

impl SpeechRoutes {
    /// Create the text-to-speech route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/text-to-speech", post(Self::handle_speak))
            .with_state(resources)
    }

    async fn handle_speak(
        State(resources): State<Arc<ServerResources>>,
        JsonBody(request): JsonBody<SpeechRequest>,
    ) -> Response {
        let Some(text) = request.text.filter(|text| !text.trim().is_empty()) else {
            return (
                StatusCode::BAD_REQUEST,
                Json(BrowserSpeechResponse::failure("Missing text")),
            )
                .into_response();
        };
        let section = request.section.map_or("unspecified", |s| s.as_str());

        match resources.speech.synthesize(&text).await {
            Ok(SpeechOutcome::Audio(audio)) => {
                info!(section, bytes = audio.len(), "Returning synthesized speech");
                ([(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response()
            }
            Ok(SpeechOutcome::UseBrowserSpeech) => {
                Json(BrowserSpeechResponse::fallback()).into_response()
            }
            Err(e) => {
                error!(section, error = %e, "Text-to-speech failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(BrowserSpeechResponse::failure(
                        "Text-to-speech service failed",
                    )),
                )
                    .into_response()
            }
        }
    }
}
