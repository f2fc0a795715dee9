use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Wire format of the remote listing feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    Json,
    Html,
    Xml,
}

/// Parameters for talking to a listing feed
#[derive(Debug, Clone)]
pub struct FeedParams {
    /// Feed endpoint
    pub url: String,
    pub format: FeedFormat,
    /// Whole-request timeout
    pub timeout: Duration,
    pub user_agent: String,
    /// Symbol prefixed to prices the feed sends as bare numbers
    pub currency: String,
}

impl FeedParams {
    pub fn new(url: impl Into<String>, format: FeedFormat) -> Self {
        Self {
            url: url.into(),
            format,
            ..Self::default()
        }
    }
}

impl Default for FeedParams {
    fn default() -> Self {
        Self {
            url: String::new(),
            format: FeedFormat::Json,
            timeout: Duration::from_secs(30),
            user_agent: concat!("sold-showcase/", env!("CARGO_PKG_VERSION")).to_string(),
            currency: "€".to_string(),
        }
    }
}
