use crate::error::FeedResult;
use crate::feeds::html::HtmlFeed;
use crate::feeds::json::JsonFeed;
use crate::feeds::traits::FeedSource;
use crate::feeds::types::{FeedFormat, FeedParams};
use crate::feeds::xml::XmlFeed;
use crate::models::Property;
use tracing::{info, warn};

/// Builds the feed source matching `params.format`
pub fn build_source(params: FeedParams) -> FeedResult<Box<dyn FeedSource>> {
    let source: Box<dyn FeedSource> = match params.format {
        FeedFormat::Json => Box::new(JsonFeed::new(params)?),
        FeedFormat::Html => Box::new(HtmlFeed::new(params)?),
        FeedFormat::Xml => Box::new(XmlFeed::new(params)?),
    };
    Ok(source)
}

/// Fetches the feed, failing soft to an empty listing set
///
/// Callers cannot tell "no listings" apart from "fetch failed"; the failure
/// only shows up in the logs.
pub async fn fetch_properties(source: &dyn FeedSource) -> Vec<Property> {
    match source.fetch().await {
        Ok(properties) => {
            info!(
                "Fetched {} properties from {} feed",
                properties.len(),
                source.source_name()
            );
            properties
        }
        Err(e) => {
            warn!("Error loading properties from {} feed: {}", source.source_name(), e);
            Vec::new()
        }
    }
}
