//! Generation dispatcher.
//!
//! Decides between the remote model and demo content for every request:
//!
//! 1. No usable credential: serve demo content, never touch the remote client.
//! 2. Otherwise compose the prompt and call the remote client.
//! 3. Hand the remote result to [`ContentGenerator::resolve_content`] (or its
//!    campaign twin), which applies the [`FallbackPolicy`].

use std::sync::Arc;

use strum::{Display, EnumString};
use tracing::{info, warn};

use crate::campaign::{GeneratedCampaign, campaign_prompt, demo_campaign, parse_campaign};
use crate::demo::{DemoKind, demo_content};
use crate::error::{GenerateError, RemoteError};
use crate::remote::CompletionClient;
use crate::templates::compose_prompt;

/// Placeholder values shipped in sample env files; treated as "no key".
const SENTINEL_KEYS: [&str; 2] = ["your_requesty_key_here", "demo_mode"];

/// Credential state for the remote model.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Demo,
    Live(String),
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::Demo => f.write_str("Demo"),
            Credential::Live(_) => f.write_str("Live(<redacted>)"),
        }
    }
}

impl Credential {
    /// Absent, blank and sentinel values all mean demo mode.
    pub fn from_value(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() && !SENTINEL_KEYS.contains(&v.trim()) => {
                Credential::Live(v.trim().to_owned())
            }
            _ => Credential::Demo,
        }
    }

    pub fn is_usable(&self) -> bool {
        matches!(self, Credential::Live(_))
    }

    pub fn api_key(&self) -> Option<&str> {
        match self {
            Credential::Live(key) => Some(key),
            Credential::Demo => None,
        }
    }
}

/// What happens when the remote call fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FallbackPolicy {
    /// Substitute demo content; callers always see success.
    #[default]
    #[strum(to_string = "demo", serialize = "demo-safe")]
    DemoSafe,
    /// Propagate the failure to the caller.
    Strict,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub credential: Credential,
    pub fallback: FallbackPolicy,
}

/// Where a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Provenance {
    Remote,
    Demo,
}

/// A generated value tagged with its [`Provenance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated<T> {
    pub value: T,
    pub source: Provenance,
}

impl<T> Generated<T> {
    fn remote(value: T) -> Self {
        Self { value, source: Provenance::Remote }
    }

    fn demo(value: T) -> Self {
        Self { value, source: Provenance::Demo }
    }
}

/// Stateless dispatcher shared by all requests.
#[derive(Clone)]
pub struct ContentGenerator {
    config: GeneratorConfig,
    client: Arc<dyn CompletionClient>,
}

impl std::fmt::Debug for ContentGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ContentGenerator {
    pub fn new(config: GeneratorConfig, client: Arc<dyn CompletionClient>) -> Self {
        Self { config, client }
    }

    pub fn is_live(&self) -> bool {
        self.config.credential.is_usable()
    }

    pub fn fallback_policy(&self) -> FallbackPolicy {
        self.config.fallback
    }

    /// Generate text for a content type (tag or override prompt) and topic.
    pub async fn generate(
        &self,
        content_type: &str,
        topic: &str,
    ) -> Result<Generated<String>, GenerateError> {
        let kind = DemoKind::classify(content_type);

        if !self.is_live() {
            let text = demo_content(kind, topic);
            info!(chars = text.len(), ?kind, "demo mode: generated demo content");
            return Ok(Generated::demo(text));
        }

        let prompt = compose_prompt(content_type, topic);
        info!(topic, prompt_len = prompt.len(), "generating content with remote model");
        let result = self.client.complete(&prompt).await;
        self.resolve_content(result, kind, topic)
    }

    /// Apply the fallback policy to a remote text result.
    ///
    /// `Ok` text is returned untouched. An error becomes demo content under
    /// [`FallbackPolicy::DemoSafe`] and is returned under
    /// [`FallbackPolicy::Strict`].
    pub fn resolve_content(
        &self,
        result: Result<String, RemoteError>,
        kind: DemoKind,
        topic: &str,
    ) -> Result<Generated<String>, GenerateError> {
        match result {
            Ok(text) => {
                info!(chars = text.len(), "remote model generated content");
                Ok(Generated::remote(text))
            }
            Err(e) => match self.config.fallback {
                FallbackPolicy::DemoSafe => {
                    warn!(
                        error = %e,
                        ?kind,
                        "remote generation failed; falling back to demo content"
                    );
                    Ok(Generated::demo(demo_content(kind, topic)))
                }
                FallbackPolicy::Strict => Err(e.into()),
            },
        }
    }

    /// Generate a one-week campaign plan for `topic`.
    pub async fn generate_campaign(
        &self,
        topic: &str,
    ) -> Result<Generated<GeneratedCampaign>, GenerateError> {
        if !self.is_live() {
            info!(topic, "demo mode: generating demo campaign");
            return Ok(Generated::demo(demo_campaign(topic)));
        }

        let prompt = campaign_prompt(topic);
        info!(topic, "generating campaign with remote model");
        let result = match self.client.complete(&prompt).await {
            Ok(text) => parse_campaign(&text).map_err(GenerateError::from),
            Err(e) => Err(GenerateError::from(e)),
        };
        self.resolve_campaign(result, topic)
    }

    /// Campaign counterpart of [`Self::resolve_content`]; parse failures are
    /// handled the same way as remote failures.
    pub fn resolve_campaign(
        &self,
        result: Result<GeneratedCampaign, GenerateError>,
        topic: &str,
    ) -> Result<Generated<GeneratedCampaign>, GenerateError> {
        match result {
            Ok(campaign) => {
                info!(
                    topic,
                    posts = campaign.social_posts.len(),
                    "remote model generated campaign"
                );
                Ok(Generated::remote(campaign))
            }
            Err(e) => match self.config.fallback {
                FallbackPolicy::DemoSafe => {
                    warn!(
                        error = %e,
                        topic,
                        "campaign generation failed; falling back to demo campaign"
                    );
                    Ok(Generated::demo(demo_campaign(topic)))
                }
                FallbackPolicy::Strict => Err(e),
            },
        }
    }
}
