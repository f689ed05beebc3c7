// ABOUTME: Client-local state: key-value persistence, progress counters, plan session, daily quote
// ABOUTME: Everything here runs on the client side and is synchronous
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! # Client state
//!
//! The [`KeyValueStore`] capability stands in for browser storage. Progress is
//! keyed by plan id, so a regenerated plan starts from zero while the old
//! plan's record stays in the store untouched.

mod quote;
mod session;
mod store;
mod tracker;

pub use quote::{DailyQuote, MOTIVATIONAL_QUOTES};
pub use session::PlanSession;
pub use store::{FileStore, KeyValueStore, KeyValueStoreExt, MemoryStore};
pub use tracker::{progress_key, ProgressTracker};
