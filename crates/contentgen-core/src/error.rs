use thiserror::Error;

/// A request field failed validation. Surfaced to callers as a 4xx.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}")]
    MissingField(&'static str),

    #[error("unknown tone '{0}'")]
    UnknownTone(String),

    #[error("unknown length '{0}'")]
    UnknownLength(String),
}

/// Failures of the remote chat-completion call.
///
/// Both variants are treated the same way by the dispatcher: they trigger the
/// fallback policy.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Network error, timeout, auth failure, rate limit or any non-2xx status.
    #[error("remote unavailable: {0}")]
    Unavailable(String),

    /// HTTP success but `choices[0].message.content` was absent or empty.
    #[error("remote returned no content")]
    EmptyResponse,
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RemoteError::Unavailable(format!("request timed out: {e}"))
        } else {
            RemoteError::Unavailable(e.to_string())
        }
    }
}

/// The remote model's campaign reply could not be used.
#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("campaign reply is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("campaign reply has the wrong shape: {0}")]
    Shape(String),
}

/// Errors that escape the dispatcher. Only produced under
/// [`crate::FallbackPolicy::Strict`].
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("malformed structured response: {0}")]
    MalformedStructuredResponse(#[from] CampaignError),
}
