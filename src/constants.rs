// ABOUTME: System-wide constants for the FitMind API
// ABOUTME: Environment variable names, provider endpoints, defaults and storage keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! # Constants Module
//!
//! Hardcoded defaults and the names of the environment variables that
//! override them. Configuration itself is read in [`crate::config`].

/// Service names used in logs and error messages
pub mod service_names {
    /// This server
    pub const FITMIND_SERVER: &str = "fitmind-server";
    /// `OpenAI` chat and image APIs
    pub const OPENAI: &str = "OpenAI";
    /// Google Gemini API
    pub const GEMINI: &str = "Gemini";
    /// Replicate predictions API
    pub const REPLICATE: &str = "Replicate";
    /// `ElevenLabs` speech API
    pub const ELEVENLABS: &str = "ElevenLabs";
}

/// Environment variable names
pub mod env_vars {
    /// Listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// `*` or comma-separated origin list
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Outbound provider timeout in seconds, 0 disables it
    pub const PROVIDER_TIMEOUT_SECS: &str = "PROVIDER_TIMEOUT_SECS";

    /// Primary text provider and primary image provider credential
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    /// `OpenAI` API base URL
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    /// `OpenAI` chat model
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";

    /// Secondary text provider credential
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Gemini API base URL
    pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
    /// Gemini model
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";

    /// Secondary image provider credential
    pub const REPLICATE_API_TOKEN: &str = "REPLICATE_API_TOKEN";
    /// Replicate API base URL
    pub const REPLICATE_BASE_URL: &str = "REPLICATE_BASE_URL";

    /// Speech provider credential
    pub const ELEVENLABS_API_KEY: &str = "ELEVENLABS_API_KEY";
    /// `ElevenLabs` API base URL
    pub const ELEVENLABS_BASE_URL: &str = "ELEVENLABS_BASE_URL";
    /// `ElevenLabs` voice identifier
    pub const ELEVENLABS_VOICE_ID: &str = "ELEVENLABS_VOICE_ID";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;
    /// Default bind address
    pub const HOST: &str = "127.0.0.1";
    /// Default CORS policy
    pub const CORS_ALLOWED_ORIGINS: &str = "*";

    /// `OpenAI` API base
    pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
    /// `OpenAI` chat model
    pub const OPENAI_MODEL: &str = "gpt-3.5-turbo";
    /// `OpenAI` image model
    pub const OPENAI_IMAGE_MODEL: &str = "dall-e-3";

    /// Gemini API base
    pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    /// Gemini model
    pub const GEMINI_MODEL: &str = "gemini-pro";

    /// Replicate API base
    pub const REPLICATE_BASE_URL: &str = "https://api.replicate.com/v1";
    /// Stable Diffusion model version
    pub const REPLICATE_MODEL_VERSION: &str =
        "ac732df83cea7fff18b8472768c88ad041fa750ff7682a21affe81863cbe77e4";

    /// `ElevenLabs` API base
    pub const ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io/v1";
    /// `ElevenLabs` voice ("Rachel")
    pub const ELEVENLABS_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
    /// `ElevenLabs` model
    pub const ELEVENLABS_MODEL: &str = "eleven_monolingual_v1";
}

/// Limits applied to generation requests
pub mod limits {
    /// Max tokens requested from the chat provider
    pub const PLAN_MAX_TOKENS: u32 = 4000;
    /// Sampling temperature for plan generation
    pub const PLAN_TEMPERATURE: f32 = 0.7;
    /// Characters of text sent to the speech provider
    pub const SPEECH_PROVIDER_MAX_CHARS: usize = 2500;
    /// Characters of text read by local speech synthesis
    pub const LOCAL_SPEECH_MAX_CHARS: usize = 2000;
    /// Body preview length in provider error logs
    pub const ERROR_BODY_PREVIEW_CHARS: usize = 200;
}

/// Keys used in the client key-value store
pub mod storage_keys {
    /// Last generated plan
    pub const PLAN: &str = "fitnessPlan";
    /// Profile the last plan was generated from
    pub const USER_DATA: &str = "userData";
    /// Prefix for per-plan progress records
    pub const PROGRESS_PREFIX: &str = "progress_";
    /// Calendar day the cached quote was picked
    pub const QUOTE_DATE: &str = "quoteDate";
    /// Cached quote text
    pub const DAILY_QUOTE: &str = "dailyQuote";
}
