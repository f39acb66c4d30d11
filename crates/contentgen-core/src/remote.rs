//! Remote chat-completion client.
//!
//! [`CompletionClient`] is the seam the dispatcher talks to; the production
//! implementation is [`RequestyClient`], which speaks the OpenAI-compatible
//! `/chat/completions` wire format.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RemoteError;

pub const DEFAULT_ENDPOINT: &str = "https://router.requesty.ai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Upstream error bodies are cut to this many characters before they are
/// carried in a [`RemoteError`].
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Turns a prompt into generated text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, RemoteError>;
}

/// Fixed request parameters for [`RequestyClient`].
#[derive(Debug, Clone)]
pub struct RemoteSettings {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Upper bound on a single call, connection included.
    pub timeout: Duration,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            max_tokens: 2048,
            temperature: 0.7,
            timeout: Duration::from_secs(30),
        }
    }
}

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [WireMessage<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Default, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ReplyMessage>,
}

#[derive(Debug, Default, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionResponse {
    fn into_text(self) -> Result<String, RemoteError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|text| !text.is_empty())
            .ok_or(RemoteError::EmptyResponse)
    }
}

// ── Requesty client ──────────────────────────────────────────────────────────

/// reqwest-backed client for the Requesty router (or any OpenAI-compatible
/// endpoint).
#[derive(Clone)]
pub struct RequestyClient {
    http: reqwest::Client,
    settings: RemoteSettings,
    api_key: String,
}

impl std::fmt::Debug for RequestyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestyClient")
            .field("endpoint", &self.settings.endpoint)
            .field("model", &self.settings.model)
            .finish_non_exhaustive()
    }
}

impl RequestyClient {
    pub fn new(settings: RemoteSettings, api_key: impl Into<String>) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        Ok(Self {
            http,
            settings,
            api_key: api_key.into(),
        })
    }

    pub fn settings(&self) -> &RemoteSettings {
        &self.settings
    }
}

#[async_trait]
impl CompletionClient for RequestyClient {
    async fn complete(&self, prompt: &str) -> Result<String, RemoteError> {
        let body = CompletionRequest {
            model: &self.settings.model,
            messages: [WireMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        debug!(
            endpoint = %self.settings.endpoint,
            model = %self.settings.model,
            prompt_len = prompt.len(),
            "sending chat completion"
        );

        let response = self
            .http
            .post(&self.settings.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let snippet: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
            return Err(RemoteError::Unavailable(format!(
                "upstream returned {status}: {snippet}"
            )));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| RemoteError::Unavailable(format!("undecodable upstream body: {e}")))?;
        parsed.into_text()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{bearer_token, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, timeout: Duration) -> RequestyClient {
        let settings = RemoteSettings {
            endpoint: format!("{}/v1/chat/completions", server.uri()),
            timeout,
            ..RemoteSettings::default()
        };
        RequestyClient::new(settings, "sk-test").unwrap()
    }

    fn reply(content: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
        }))
    }

    #[test]
    fn defaults_match_router_contract() {
        let s = RemoteSettings::default();
        assert_eq!(s.model, "google/gemini-2.5-flash");
        assert_eq!(s.max_tokens, 2048);
        assert!((s.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(s.endpoint, DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn sends_single_user_message_and_returns_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(bearer_token("sk-test"))
            .and(body_partial_json(json!({
                "model": "google/gemini-2.5-flash",
                "messages": [{ "role": "user", "content": "write a haiku" }],
                "max_tokens": 2048
            })))
            .respond_with(reply(json!("leaves fall softly")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(5));
        let text = client.complete("write a haiku").await.unwrap();
        assert_eq!(text, "leaves fall softly");
    }

    #[tokio::test]
    async fn non_success_status_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let err = client_for(&server, Duration::from_secs(5))
            .complete("hi")
            .await
            .unwrap_err();
        match err {
            RemoteError::Unavailable(msg) => {
                assert!(msg.contains("401"), "{msg}");
                assert!(msg.contains("invalid api key"), "{msg}");
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_or_empty_content_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;
        let err = client_for(&server, Duration::from_secs(5))
            .complete("hi")
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteError::EmptyResponse));

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply(json!("")))
            .mount(&server)
            .await;
        let err = client_for(&server, Duration::from_secs(5))
            .complete("hi")
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteError::EmptyResponse));
    }

    #[tokio::test]
    async fn non_json_success_body_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;
        let err = client_for(&server, Duration::from_secs(5))
            .complete("hi")
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteError::Unavailable(_)));
    }

    #[tokio::test]
    async fn slow_upstream_times_out_as_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply(json!("late")).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;
        let err = client_for(&server, Duration::from_millis(50))
            .complete("hi")
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteError::Unavailable(_)));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let client = RequestyClient::new(RemoteSettings::default(), "sk-secret").unwrap();
        assert!(!format!("{client:?}").contains("sk-secret"));
    }
}
