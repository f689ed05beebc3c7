// ABOUTME: Shared server state handed to every router
// ABOUTME: Built once at start-up from ServerConfig with one pooled HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::generation::GenerationOrchestrator;
use crate::http_client::build_client;
use crate::images::ImageService;
use crate::speech::ElevenLabsSpeech;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Plan generation chain
    pub orchestrator: Arc<GenerationOrchestrator>,
    /// Image generation chain
    pub images: Arc<ImageService>,
    /// Text-to-speech adapter
    pub speech: Arc<ElevenLabsSpeech>,
}

impl ServerResources {
    /// Wire every service from `config`
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let client = build_client(config.providers.request_timeout);
        let orchestrator = GenerationOrchestrator::from_config(&config.providers, &client);
        let images = ImageService::from_config(&config.providers, &client);
        let speech = ElevenLabsSpeech::new(config.providers.elevenlabs.clone(), client);
        Self::with_services(config, orchestrator, images, speech)
    }

    /// Assemble resources from pre-built services (tests swap in scripted sources)
    #[must_use]
    pub fn with_services(
        config: ServerConfig,
        orchestrator: GenerationOrchestrator,
        images: ImageService,
        speech: ElevenLabsSpeech,
    ) -> Self {
        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
            images: Arc::new(images),
            speech: Arc::new(speech),
        }
    }
}
