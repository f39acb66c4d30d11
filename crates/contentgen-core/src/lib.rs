//! contentgen-core – prompt composition, remote generation and demo fallback.
//!
//! The crate never reads the process environment: the credential and the
//! fallback policy are handed to [`ContentGenerator`] by the caller, which
//! keeps the dispatcher deterministic under test.

pub mod campaign;
pub mod demo;
pub mod error;
pub mod generator;
pub mod keywords;
pub mod remote;
pub mod templates;

pub use campaign::{BlogIdea, GeneratedCampaign, SocialPost};
pub use demo::DemoKind;
pub use error::{CampaignError, GenerateError, RemoteError, ValidationError};
pub use generator::{
    ContentGenerator, Credential, FallbackPolicy, Generated, GeneratorConfig, Provenance,
};
pub use remote::{CompletionClient, RemoteSettings, RequestyClient};
pub use templates::{ContentType, Length, PromptBrief, Tone};
