pub mod fetcher;
pub mod html;
pub mod json;
pub mod normalize;
pub mod traits;
pub mod types;
pub mod xml;

pub use fetcher::{build_source, fetch_properties};
pub use traits::FeedSource;
pub use types::{FeedFormat, FeedParams};
