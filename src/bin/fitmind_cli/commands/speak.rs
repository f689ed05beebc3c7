// ABOUTME: Narration command: provider audio saved to a file, text printed otherwise
// ABOUTME: Terminal AudioPlayer standing in for the browser's audio element and speech API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use fitmind::config::ServerConfig;
use fitmind::errors::{AppError, AppResult};
use fitmind::http_client::build_client;
use fitmind::progress::FileStore;
use fitmind::speech::{
    client_narration, AudioClip, AudioPlayer, ElevenLabsSpeech, PlanSection, PlaybackController,
    SpeechOutcome,
};
use serde_json::json;
use tracing::debug;

use super::active_plan;

/// Player that saves encoded audio to disk and prints local-speech text
struct TerminalPlayer {
    output: PathBuf,
}

impl AudioPlayer for TerminalPlayer {
    fn play(&mut self, clip: &AudioClip) -> AppResult<()> {
        match clip {
            AudioClip::Encoded { data, content_type } => {
                fs::write(&self.output, data).map_err(|e| {
                    AppError::storage(format!(
                        "Failed to write {}: {e}",
                        self.output.display()
                    ))
                })?;
                println!("Saved {content_type} audio to {}", self.output.display());
            }
            AudioClip::LocalSpeech(text) => {
                println!("No speech provider available, reading locally:\n");
                println!("{text}");
            }
        }
        Ok(())
    }

    fn stop(&mut self) {}
}

/// Narrate one section of the active plan
pub async fn speak(
    store: &FileStore,
    section: PlanSection,
    out: PathBuf,
    server: Option<&str>,
) -> Result<()> {
    let (plan, _) = active_plan(store)?;
    let text = client_narration(&plan, section);

    let clip = match server {
        Some(base_url) => speak_remote(base_url, &text, section).await?,
        None => {
            let config = ServerConfig::from_env()?;
            let client = build_client(config.providers.request_timeout);
            let speech = ElevenLabsSpeech::new(config.providers.elevenlabs, client);
            match speech.synthesize(&text).await {
                Ok(SpeechOutcome::Audio(audio)) => AudioClip::mpeg(audio),
                Ok(SpeechOutcome::UseBrowserSpeech) => AudioClip::local_speech(&text),
                Err(e) => {
                    debug!(error = %e, "Speech synthesis failed, reading locally");
                    AudioClip::local_speech(&text)
                }
            }
        }
    };

    let mut controller = PlaybackController::new(TerminalPlayer { output: out });
    controller.play(&clip)?;
    Ok(())
}

async fn speak_remote(base_url: &str, text: &str, section: PlanSection) -> Result<AudioClip> {
    let url = format!("{}/api/text-to-speech", base_url.trim_end_matches('/'));
    let response = build_client(None)
        .post(&url)
        .json(&json!({ "text": text, "section": section }))
        .send()
        .await
        .with_context(|| format!("Failed to reach {url}"))?;

    let is_audio = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("audio/"));

    if response.status().is_success() && is_audio {
        let audio = response.bytes().await.context("Failed to read audio")?;
        return Ok(AudioClip::mpeg(audio));
    }
    debug!(status = %response.status(), "Server asked for local speech");
    Ok(AudioClip::local_speech(text))
}
