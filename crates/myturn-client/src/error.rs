use thiserror::Error;

/// Errors returned by a single location search.
///
/// Every variant is terminal for the query that produced it; callers decide
/// whether to skip the point and continue.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Connection, TLS, or timeout failure before a response arrived. Also
    /// returned when the underlying `reqwest::Client` cannot be built.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The endpoint answered with a 4xx or 5xx status.
    #[error("search endpoint rejected request with HTTP {status} ({url})")]
    UpstreamRejected { status: u16, url: String },

    /// The response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    BodyUnreadable(#[source] reqwest::Error),

    /// The body was read but is not the expected search response shape.
    #[error("malformed search response for {context}: {source}")]
    MalformedResponse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured endpoint is not a valid URL.
    #[error("invalid search URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl QueryError {
    /// Short failure class used as a structured log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::UpstreamRejected { .. } => "upstream_rejected",
            Self::BodyUnreadable(_) => "body_unreadable",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::InvalidEndpoint { .. } => "invalid_endpoint",
        }
    }
}
