//! Maud HTML components for the feed page.
//!
//! - `layout`: Page skeleton with PWA metadata and inline scripts
//! - `badge`: Source, source type and language badges
//! - `card`: Article cards, the article list, stats banner and loading state
//! - `media`: Audio player and thumbnail

pub mod badge;
pub mod card;
pub mod layout;
pub mod media;

pub use layout::BaseLayout;

pub use badge::{LanguageBadge, SourceBadge, SourceTypeBadge};

pub use card::{ArticleCard, ArticleList, LoadingIndicator, StatsBanner};

pub use media::{AudioPlayer, Thumbnail};
