// ABOUTME: Unified error handling re-exported from fitmind-core
// ABOUTME: AppError with ErrorCode, its HTTP mapping and the JSON error body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

pub use fitmind_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
