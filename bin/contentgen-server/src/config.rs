//! Server configuration, loaded from environment variables at startup.

use std::time::Duration;

use contentgen_core::{Credential, FallbackPolicy, RemoteSettings};

/// Runtime configuration for contentgen-server.
///
/// Every field has a sensible default so the server works out-of-the-box
/// (in demo mode) without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:5000"`, or `0.0.0.0:$PORT`).
    pub bind_address: String,

    /// Remote model credential; absent or sentinel values mean demo mode.
    pub credential: Credential,

    /// Chat-completion endpoint, model and sampling parameters.
    pub remote: RemoteSettings,

    /// Whether remote failures degrade to demo content or surface as 502.
    pub fallback: FallbackPolicy,

    /// Comma-separated allowed origins; `None` allows any origin.
    pub cors_allowed_origins: Option<String>,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Serve Swagger UI and the OpenAPI document.
    pub enable_swagger: bool,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = RemoteSettings::default();
        let bind_address = std::env::var("CONTENTGEN_BIND").unwrap_or_else(|_| {
            match std::env::var("PORT") {
                Ok(port) => format!("0.0.0.0:{port}"),
                Err(_) => "0.0.0.0:5000".to_owned(),
            }
        });
        let fallback: FallbackPolicy = std::env::var("CONTENTGEN_FALLBACK")
            .ok()
            .and_then(|v| match v.trim().to_ascii_lowercase().parse() {
                Ok(policy) => Some(policy),
                Err(_) => {
                    eprintln!(
                        "WARN: CONTENTGEN_FALLBACK='{v}' is not 'demo' or 'strict'; using 'demo'"
                    );
                    None
                }
            })
            .unwrap_or_default();

        Self {
            bind_address,
            credential: Credential::from_value(std::env::var("REQUESTY_API_KEY").ok()),
            remote: RemoteSettings {
                endpoint: env_or("CONTENTGEN_API_URL", &defaults.endpoint),
                model: env_or("CONTENTGEN_MODEL", &defaults.model),
                max_tokens: parse_env("CONTENTGEN_MAX_TOKENS", defaults.max_tokens),
                temperature: parse_env("CONTENTGEN_TEMPERATURE", defaults.temperature),
                timeout: Duration::from_secs(parse_env(
                    "CONTENTGEN_TIMEOUT_SECS",
                    defaults.timeout.as_secs(),
                )),
            },
            fallback,
            cors_allowed_origins: std::env::var("CONTENTGEN_CORS_ORIGINS").ok(),
            log_level: env_or("CONTENTGEN_LOG", "info"),
            log_json: env_flag("CONTENTGEN_LOG_JSON", false),
            enable_swagger: env_flag("CONTENTGEN_ENABLE_SWAGGER", true),
        }
    }
}

impl Default for Config {
    /// Demo-mode configuration that never touches the environment.
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_owned(),
            credential: Credential::Demo,
            remote: RemoteSettings::default(),
            fallback: FallbackPolicy::default(),
            cors_allowed_origins: None,
            log_level: "info".to_owned(),
            log_json: false,
            enable_swagger: true,
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}
