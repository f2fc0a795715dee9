use crate::feeds::{FeedFormat, FeedParams};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset; applies to every target
pub const DEFAULT_LOG_FILTER: &str = "info";

/// `RUST_LOG` if it parses, otherwise [`DEFAULT_LOG_FILTER`]
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[derive(Parser, Debug)]
#[command(name = "sold-showcase")]
#[command(about = "Builds the recent-sales showcase: curated sales, feed listings and map framing")]
#[command(version)]
pub struct Args {
    /// Listing feed endpoint; without it only the curated sales are shown
    #[arg(long, env = "SHOWCASE_FEED_URL")]
    pub feed_url: Option<String>,

    #[arg(long, value_enum, default_value = "json", env = "SHOWCASE_FEED_FORMAT")]
    pub feed_format: FeedFormat,

    /// Feed request timeout in seconds
    #[arg(long, default_value = "30", env = "SHOWCASE_FEED_TIMEOUT_SECS")]
    pub timeout_secs: u64,

    /// Currency symbol for prices the feed sends as plain numbers
    #[arg(long, default_value = "€")]
    pub currency: String,

    #[arg(long, default_value = "1024")]
    pub map_width: u32,

    #[arg(long, default_value = "600")]
    pub map_height: u32,

    /// Where to write the working set snapshot
    #[arg(short, long, default_value = "working_set.json")]
    pub output: PathBuf,
}

impl Args {
    pub fn feed_params(&self) -> Option<FeedParams> {
        let url = self.feed_url.as_deref()?.trim();
        if url.is_empty() {
            return None;
        }

        Some(FeedParams {
            timeout: Duration::from_secs(self.timeout_secs),
            currency: self.currency.clone(),
            ..FeedParams::new(url, self.feed_format)
        })
    }
}
