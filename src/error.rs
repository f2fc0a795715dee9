use reqwest::StatusCode;
use thiserror::Error;

pub type FeedResult<T> = std::result::Result<T, FeedError>;

/// Failures while retrieving or parsing a listing feed
#[derive(Error, Debug)]
pub enum FeedError {
    /// Transport-level failure (DNS, connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed answered with a non-success status
    #[error("Feed returned status {0}")]
    Status(StatusCode),

    #[error("Invalid JSON feed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid XML feed: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Document parsed but did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}
