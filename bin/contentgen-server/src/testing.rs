//! Test doubles shared by the route tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use contentgen_core::{CompletionClient, Credential, FallbackPolicy, RemoteError};

use crate::config::Config;
use crate::state::AppState;

type Reply = Box<dyn Fn() -> Result<String, RemoteError> + Send + Sync>;

/// [`CompletionClient`] with a fixed reply that counts calls.
pub struct ScriptedClient {
    reply: Reply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn ok(text: &'static str) -> Arc<Self> {
        Self::with(Box::new(move || Ok(text.to_owned())))
    }

    pub fn err(make: fn() -> RemoteError) -> Arc<Self> {
        Self::with(Box::new(move || Err(make())))
    }

    fn with(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().ok()?.last().cloned()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, prompt: &str) -> Result<String, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_owned());
        }
        (self.reply)()
    }
}

pub fn demo_state(client: Arc<ScriptedClient>) -> Arc<AppState> {
    Arc::new(AppState::with_client(Config::default(), client))
}

pub fn live_state(client: Arc<ScriptedClient>, fallback: FallbackPolicy) -> Arc<AppState> {
    let config = Config {
        credential: Credential::Live("sk-test".into()),
        fallback,
        ..Config::default()
    };
    Arc::new(AppState::with_client(config, client))
}
