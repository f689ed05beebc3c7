// ABOUTME: Plan lifecycle commands: generate, show, export and reset
// ABOUTME: Generation runs locally through the provider chain or remotely through a server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use fitmind::config::ServerConfig;
use fitmind::generation::GenerationOrchestrator;
use fitmind::http_client::build_client;
use fitmind::models::{Plan, UserProfile};
use fitmind::pdf::{pdf_filename, render_plan_pdf};
use fitmind::progress::{FileStore, PlanSession};
use fitmind::speech::PlanSection;
use tracing::info;

use super::active_plan;
use crate::helpers::display;

/// Generate a plan for the profile in `profile_path` and activate it
pub async fn generate(store: &FileStore, profile_path: &Path, server: Option<&str>) -> Result<()> {
    let raw = fs::read_to_string(profile_path)
        .with_context(|| format!("Failed to read {}", profile_path.display()))?;
    let profile: UserProfile = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid profile", profile_path.display()))?;
    profile.validate()?;

    let plan = match server {
        Some(base_url) => generate_remote(base_url, &profile).await?,
        None => {
            let config = ServerConfig::from_env()?;
            let client = build_client(config.providers.request_timeout);
            let orchestrator = GenerationOrchestrator::from_config(&config.providers, &client);
            let generated = orchestrator.generate(&profile).await;
            info!(source = %generated.source, "Plan generated locally");
            generated.plan
        }
    };

    PlanSession::new(store).activate(&plan, &profile)?;
    display::plan_summary(&plan, &profile);
    Ok(())
}

async fn generate_remote(base_url: &str, profile: &UserProfile) -> Result<Plan> {
    let url = format!("{}/api/generate-plan", base_url.trim_end_matches('/'));
    let response = build_client(None)
        .post(&url)
        .json(profile)
        .send()
        .await
        .with_context(|| format!("Failed to reach {url}"))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("Server rejected the profile ({status}): {body}");
    }
    response
        .json::<Plan>()
        .await
        .context("Server returned an unreadable plan")
}

/// Print the active plan, or one section of it
pub fn show(store: &FileStore, section: Option<PlanSection>) -> Result<()> {
    let (plan, profile) = active_plan(store)?;
    match section {
        None => display::plan_summary(&plan, &profile),
        Some(PlanSection::Workout) => display::workout(&plan),
        Some(PlanSection::Diet) => display::diet(&plan),
        Some(PlanSection::Tips) => display::tips(&plan),
    }
    Ok(())
}

/// Write the active plan as a PDF
pub fn export(store: &FileStore, out: Option<PathBuf>) -> Result<()> {
    let (plan, profile) = active_plan(store)?;
    let out = out.unwrap_or_else(|| PathBuf::from(pdf_filename(&profile)));
    let document = render_plan_pdf(&plan, &profile)?;
    fs::write(&out, document).with_context(|| format!("Failed to write {}", out.display()))?;
    println!("Plan exported to {}", out.display());
    Ok(())
}

/// Forget the active plan
pub fn reset(store: &FileStore) -> Result<()> {
    PlanSession::new(store).clear()?;
    println!("Active plan cleared. Generate a new one with `fitmind-cli generate`.");
    Ok(())
}
