// ABOUTME: Client-state integration tests over the JSON file store
// ABOUTME: Session restore, clamped progress per plan id and the daily quote across reopen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use fitmind::config::ProvidersConfig;
use fitmind::generation::GenerationOrchestrator;
use fitmind::http_client::build_client;
use fitmind::models::{ProgressRecord, UserProfile};
use fitmind::progress::{
    progress_key, DailyQuote, FileStore, KeyValueStoreExt, PlanSession, ProgressTracker,
};
use fitmind::templates;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tempfile::TempDir;

fn outdoor_profile() -> UserProfile {
    let mut body = common::alice_json();
    body["workoutLocation"] = json!("outdoor");
    serde_json::from_value(body).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 12).unwrap()
}

#[tokio::test]
async fn test_generated_plan_survives_store_reopen() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let profile = common::alice_profile();

    let orchestrator = GenerationOrchestrator::from_config(
        &ProvidersConfig::unconfigured(),
        &build_client(None),
    );
    let generated = orchestrator.generate(&profile).await;
    assert_eq!(generated.source, "template");

    {
        let store = FileStore::open(&path).unwrap();
        PlanSession::new(&store)
            .activate(&generated.plan, &profile)
            .unwrap();
    }

    let store = FileStore::open(&path).unwrap();
    let (plan, restored) = PlanSession::new(&store).restore().unwrap().unwrap();
    assert_eq!(plan, generated.plan);
    assert_eq!(restored.name, "Alice");
}

#[test]
fn test_ten_workouts_against_six_training_days() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path().join("store.json")).unwrap();
    let plan = templates::build_plan(&outdoor_profile(), Utc::now());
    assert_eq!(plan.workout_plan.training_day_count(), 6);

    let mut tracker = ProgressTracker::load(&store, &plan, today()).unwrap();
    for _ in 0..10 {
        tracker.complete_workout().unwrap();
    }
    assert_eq!(tracker.record().completed_workouts, 6);

    let saved: ProgressRecord = store.get_json(&progress_key(&plan.id)).unwrap().unwrap();
    assert_eq!(saved.completed_workouts, 6);
    assert_eq!(saved.total_workouts, 6);
}

#[test]
fn test_regenerated_plan_starts_from_zero() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path().join("store.json")).unwrap();
    let profile = common::alice_profile();
    let session = PlanSession::new(&store);

    let first = templates::build_plan(&profile, Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap());
    session.activate(&first, &profile).unwrap();
    let mut tracker = ProgressTracker::load(&store, &first, today()).unwrap();
    tracker.complete_workout().unwrap();
    tracker.complete_goal().unwrap();

    let second =
        templates::build_plan(&profile, Utc.with_ymd_and_hms(2025, 5, 2, 8, 0, 0).unwrap());
    assert_ne!(first.id, second.id);
    session.activate(&second, &profile).unwrap();
    let fresh = ProgressTracker::load(&store, &second, today()).unwrap();
    assert_eq!(fresh.record().completed_workouts, 0);
    assert_eq!(fresh.record().weekly_goals_completed, 0);

    // The first plan's record is left as it was
    let old = ProgressTracker::load(&store, &first, today()).unwrap();
    assert_eq!(old.record().completed_workouts, 1);
}

#[test]
fn test_back_to_form_clears_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let profile = common::alice_profile();
    let plan = templates::build_plan(&profile, Utc::now());

    let store = FileStore::open(&path).unwrap();
    let session = PlanSession::new(&store);
    session.activate(&plan, &profile).unwrap();
    session.clear().unwrap();
    drop(store);

    let reopened = FileStore::open(&path).unwrap();
    assert!(PlanSession::new(&reopened).restore().unwrap().is_none());
}

#[test]
fn test_daily_quote_is_stable_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    let first = {
        let store = FileStore::open(&path).unwrap();
        DailyQuote::today(&store, today(), &mut StdRng::seed_from_u64(3)).unwrap()
    };
    let store = FileStore::open(&path).unwrap();
    let again = DailyQuote::today(&store, today(), &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(first, again);
}
