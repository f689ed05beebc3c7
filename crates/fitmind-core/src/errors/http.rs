// ABOUTME: Axum IntoResponse integration for AppError
// ABOUTME: Renders errors as a status code plus the JSON error body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;

use super::{AppError, ErrorResponse};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
