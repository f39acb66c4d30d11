//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use contentgen_core::{
    CompletionClient, ContentGenerator, GeneratorConfig, RemoteError, RequestyClient,
};

use crate::config::Config;

/// State shared across all HTTP handlers. Immutable after startup.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Generation dispatcher (credential, fallback policy, remote client).
    pub generator: ContentGenerator,
}

impl AppState {
    /// Wire the production Requesty client into a generator.
    pub fn from_config(config: Config) -> Result<Self, RemoteError> {
        let api_key = config.credential.api_key().unwrap_or_default().to_owned();
        let client = RequestyClient::new(config.remote.clone(), api_key)?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Build state around any [`CompletionClient`].
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let generator = ContentGenerator::new(
            GeneratorConfig {
                credential: config.credential.clone(),
                fallback: config.fallback,
            },
            client,
        );
        Self {
            config: Arc::new(config),
            generator,
        }
    }
}
