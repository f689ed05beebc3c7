// ABOUTME: Helper modules for fitmind-cli
// ABOUTME: Terminal output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

pub mod display;
