use super::validate::ValidationError;
use thiserror::Error;

/// Sum type representing every way posting a message can fail.
///
/// Nothing is retried internally; see [SlackError::is_retryable] for a hint
/// as to which failures are worth retrying.
#[derive(Debug, Error)]
pub enum SlackError {
    /// The message breaks one of Slack's structural limits.
    #[error("invalid message: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to serialise message: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP client couldn't be built from the [TransportConfig], for
    /// example because of an unsupported proxy scheme.
    ///
    /// [TransportConfig]: super::webhook::TransportConfig
    #[error("invalid transport configuration: {0}")]
    Config(reqwest::Error),

    /// DNS, connection, TLS, proxy, or timeout failures, including those
    /// whilst reading the response body.
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Slack responded with a non-success status. Slack reports the reason as
    /// a bare string such as `invalid_token` or `channel_not_found`, which is
    /// kept verbatim in `body`.
    #[error("webhook returned {status}: {body}")]
    Delivery { status: u16, body: String },

    /// The webhook responded with a redirect whilst redirects were disabled.
    /// This usually means a revoked or mistyped webhook URL.
    #[error("Incorrect token (redirection)")]
    Redirect {
        status: u16,
        location: Option<String>,
    },
}

impl SlackError {
    /// Whether the same request might succeed if sent again later.
    pub fn is_retryable(&self) -> bool {
        match self {
            SlackError::Transport(_) => true,
            SlackError::Delivery { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Failures parsing an inbound interactive callback.
#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("malformed form body: {0}")]
    Form(#[from] serde_urlencoded::de::Error),

    #[error("malformed callback payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("form body has no `payload` field")]
    MissingPayload,
}

/// Failures authenticating an inbound request by its signature.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("missing request signature or timestamp")]
    Missing,

    #[error("request timestamp is too old")]
    Stale,

    #[error("invalid request signature")]
    Invalid,
}
