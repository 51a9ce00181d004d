//! Failure taxonomy for activities API calls.

/// Why an API call did not produce the expected body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed or the body could not be read.
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status and a structured body.
    #[error("request rejected: status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// The body was not the JSON shape the endpoint promises.
    #[error("response parse failed: {0}")]
    Parse(String),
}

impl ApiError {
    /// Server-provided explanation, when the server sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            Self::Network(_) | Self::Parse(_) => None,
        }
    }
}
