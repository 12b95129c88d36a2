use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    /// Network or TLS failure, or the HTTP client could not be built.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The channel answered with a non-2xx status.
    #[error("publish rejected with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to sign request: {0}")]
    Signing(String),

    #[error("invalid publish URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Anything other than a real post, e.g. a closed stdout in dry-run mode.
    #[error("publish failed: {0}")]
    Other(String),
}
