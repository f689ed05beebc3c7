// ABOUTME: Text-to-speech for plan sections with a local-synthesis fallback signal
// ABOUTME: Section narration text, the ElevenLabs adapter and exclusive audio playback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! # Speech
//!
//! The server either returns synthesized audio or tells the caller to fall
//! back to its own speech synthesis. Playback on the caller side goes
//! through the [`AudioPlayer`] capability so it can be driven without a
//! browser.

mod elevenlabs;
mod playback;

pub use elevenlabs::ElevenLabsSpeech;
pub use playback::{AudioClip, AudioPlayer, PlaybackController};

use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use fitmind_core::models::Plan;

use crate::constants::limits;

/// Result of a synthesis request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechOutcome {
    /// MPEG audio from the provider
    Audio(Bytes),
    /// No provider audio; the caller should synthesize locally
    UseBrowserSpeech,
}

/// Plan tab being narrated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanSection {
    /// Weekly workouts
    Workout,
    /// Weekly meals
    Diet,
    /// Coaching tips
    Tips,
}

impl PlanSection {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Workout => "workout",
            Self::Diet => "diet",
            Self::Tips => "tips",
        }
    }
}

impl fmt::Display for PlanSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First `max_chars` characters of `text`, never splitting a character
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    text.char_indices()
        .nth(max_chars)
        .map_or(text, |(index, _)| &text[..index])
}

/// Spoken summary of one plan section
#[must_use]
pub fn section_narration(plan: &Plan, section: PlanSection) -> String {
    match section {
        PlanSection::Workout => {
            let days = plan
                .workout_plan
                .days
                .iter()
                .map(|day| {
                    let exercises = day
                        .exercises
                        .iter()
                        .map(|ex| format!("{}, {} sets, {} reps", ex.name, ex.sets, ex.reps))
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("{}: {}. Exercises: {exercises}", day.day, day.focus)
                })
                .collect::<Vec<_>>()
                .join(". ");
            format!("Workout Plan: {}. {days}", plan.workout_plan.description)
        }
        PlanSection::Diet => format!(
            "Diet Plan: {}. Guidelines: {}",
            plan.diet_plan.description,
            plan.diet_plan.guidelines.join(", ")
        ),
        PlanSection::Tips => format!(
            "Lifestyle tips: {}. Motivation: {}. Posture: {}. Recovery: {}",
            plan.tips.lifestyle.join(", "),
            plan.tips.motivation.join(", "),
            plan.tips.posture.join(", "),
            plan.tips.recovery.join(", ")
        ),
    }
}

/// Narration as a client sends it for synthesis, cut to the local speech limit
#[must_use]
pub fn client_narration(plan: &Plan, section: PlanSection) -> String {
    truncate_chars(
        &section_narration(plan, section),
        limits::LOCAL_SPEECH_MAX_CHARS,
    )
    .to_owned()
}
