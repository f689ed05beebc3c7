// ABOUTME: Core types for the FitMind fitness coaching platform
// ABOUTME: Foundation crate with the plan data model and unified error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

#![deny(unsafe_code)]

//! # `FitMind` Core
//!
//! Foundation crate shared by the server, the CLI and the generation pipeline.
//! It changes rarely so the rest of the workspace compiles incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: User profile, generated plan and progress records

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (`UserProfile`, `Plan`, `WorkoutDay`, `Meal`, ...)
pub mod models;
