use crate::error::FeedResult;
use crate::models::Property;
use async_trait::async_trait;

/// A remote listing feed that can be normalized into [`Property`] records
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch and parse the feed, preserving feed order
    async fn fetch(&self) -> FeedResult<Vec<Property>>;

    fn source_name(&self) -> &'static str;
}
