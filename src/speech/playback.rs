// ABOUTME: Audio playback capability and a controller that keeps playback exclusive
// ABOUTME: Starting a clip always stops whatever is currently playing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use bytes::Bytes;

use super::truncate_chars;
use crate::constants::limits;
use crate::errors::AppResult;

/// Something to play
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioClip {
    /// Encoded audio returned by a speech provider
    Encoded {
        /// MIME type, e.g. `audio/mpeg`
        content_type: String,
        /// Encoded bytes
        data: Bytes,
    },
    /// Text for the player's own speech synthesis
    LocalSpeech(String),
}

impl AudioClip {
    /// MPEG audio clip
    #[must_use]
    pub fn mpeg(data: Bytes) -> Self {
        Self::Encoded {
            content_type: "audio/mpeg".to_owned(),
            data,
        }
    }

    /// Local-synthesis clip, truncated to the local speech limit
    #[must_use]
    pub fn local_speech(text: &str) -> Self {
        Self::LocalSpeech(truncate_chars(text, limits::LOCAL_SPEECH_MAX_CHARS).to_owned())
    }
}

/// Output device for clips
pub trait AudioPlayer: Send {
    /// Start playing a clip
    ///
    /// # Errors
    ///
    /// Returns an error if the clip cannot be played.
    fn play(&mut self, clip: &AudioClip) -> AppResult<()>;

    /// Stop playback; a no-op when nothing is playing
    fn stop(&mut self);
}

/// Exclusive playback over an [`AudioPlayer`]
pub struct PlaybackController<P: AudioPlayer> {
    player: P,
    playing: bool,
}

impl<P: AudioPlayer> PlaybackController<P> {
    /// Controller owning `player`
    pub const fn new(player: P) -> Self {
        Self {
            player,
            playing: false,
        }
    }

    /// Whether a clip was started and not stopped since
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Stop the current clip, then start `clip`
    ///
    /// # Errors
    ///
    /// Returns the player's error; playback is then considered stopped.
    pub fn play(&mut self, clip: &AudioClip) -> AppResult<()> {
        self.player.stop();
        self.playing = false;
        self.player.play(clip)?;
        self.playing = true;
        Ok(())
    }

    /// Stop the current clip
    pub fn stop(&mut self) {
        self.player.stop();
        self.playing = false;
    }

    /// Speaker-button behaviour: stop when playing, otherwise play `clip`
    ///
    /// # Errors
    ///
    /// Returns the player's error when starting playback fails.
    pub fn toggle(&mut self, clip: &AudioClip) -> AppResult<bool> {
        if self.playing {
            self.stop();
            return Ok(false);
        }
        self.play(clip)?;
        Ok(true)
    }

    /// Access the underlying player
    pub const fn player(&self) -> &P {
        &self.player
    }
}
