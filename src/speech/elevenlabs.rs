// ABOUTME: ElevenLabs text-to-speech adapter returning MPEG audio
// ABOUTME: Missing key or a rejected request means the caller speaks locally instead
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use super::{truncate_chars, SpeechOutcome};
use crate::config::ProviderSettings;
use crate::constants::{defaults, limits, service_names};
use crate::errors::AppError;

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
    style: f32,
    use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.5,
            style: 0.0,
            use_speaker_boost: true,
        }
    }
}

/// `ElevenLabs` speech synthesis for one configured voice
pub struct ElevenLabsSpeech {
    client: Client,
    settings: ProviderSettings,
}

impl ElevenLabsSpeech {
    /// Adapter for the configured voice (`settings.model` is the voice id)
    #[must_use]
    pub const fn new(settings: ProviderSettings, client: Client) -> Self {
        Self { client, settings }
    }

    /// Whether a credential is configured
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.settings.is_configured()
    }

    /// Synthesize `text`, truncated to the provider limit
    ///
    /// # Errors
    ///
    /// Returns an error only when the request cannot be sent or the audio
    /// body cannot be read; provider rejections map to
    /// [`SpeechOutcome::UseBrowserSpeech`].
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn synthesize(&self, text: &str) -> Result<SpeechOutcome, AppError> {
        let Some(api_key) = self.settings.api_key.as_deref() else {
            debug!("Speech provider not configured, using local synthesis");
            return Ok(SpeechOutcome::UseBrowserSpeech);
        };

        let url = format!(
            "{}/text-to-speech/{}",
            self.settings.base_url, self.settings.model
        );
        let request = SpeechRequest {
            text: truncate_chars(text, limits::SPEECH_PROVIDER_MAX_CHARS),
            model_id: defaults::ELEVENLABS_MODEL,
            voice_settings: VoiceSettings::default(),
        };

        let response = self
            .client
            .post(url)
            .header("xi-api-key", api_key)
            .header(reqwest::header::ACCEPT, "audio/mpeg")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                AppError::external_service(
                    service_names::ELEVENLABS,
                    format!("Request failed: {e}"),
                )
                .with_source(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "ElevenLabs rejected speech request, using local synthesis");
            return Ok(SpeechOutcome::UseBrowserSpeech);
        }

        let audio = response.bytes().await.map_err(|e| {
            AppError::external_service(
                service_names::ELEVENLABS,
                format!("Failed to read audio: {e}"),
            )
        })?;
        debug!(bytes = audio.len(), "Speech synthesized");
        Ok(SpeechOutcome::Audio(audio))
    }
}
