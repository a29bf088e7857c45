//! News feed: wire models, the fetching seam and the view that ties them
//! to rendering and playback.

pub mod models;
pub mod source;
pub mod view;

pub use models::{Article, FeedStats, Language, NewsEnvelope, NewsPage, NewsPayload, SourceType};
pub use source::{FetchError, HttpNewsSource, NewsSource};
pub use view::NewsFeedView;
