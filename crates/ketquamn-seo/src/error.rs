//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised by document generation and outbound calls.
#[derive(Debug, Error)]
pub enum SeoError {
    /// Writing an XML document failed.
    #[error("xml generation failed: {0}")]
    Xml(String),

    /// An outbound HTTP request could not be completed.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A document could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The metrics source could not be loaded.
    #[error("metrics source unavailable: {0}")]
    MetricsUnavailable(String),

    /// An analytics sink rejected an event.
    #[error("analytics sink error: {0}")]
    Sink(String),
}

pub type Result<T> = std::result::Result<T, SeoError>;

impl SeoError {
    pub(crate) fn xml(err: impl std::fmt::Display) -> Self {
        SeoError::Xml(err.to_string())
    }
}
