//! Card components for the article list.
//!
//! This module provides maud components for rendering article cards, the
//! list that holds them, the aggregate stats banner and the loading state.

use maud::{html, Markup, Render};

use crate::components::badge::{LanguageBadge, SourceBadge, SourceTypeBadge};
use crate::components::media::{AudioPlayer, Thumbnail};
use crate::feed::models::{Article, FeedStats};
use crate::playback::AudioId;

/// An article card.
///
/// The position in the list is needed to give the audio control its id.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::ArticleCard;
///
/// let card = ArticleCard::new(&article, 0);
/// ```
#[derive(Debug, Clone)]
pub struct ArticleCard<'a> {
    pub article: &'a Article,
    pub index: usize,
}

impl<'a> ArticleCard<'a> {
    /// Create a new article card.
    #[must_use]
    pub const fn new(article: &'a Article, index: usize) -> Self {
        Self { article, index }
    }
}

impl Render for ArticleCard<'_> {
    fn render(&self) -> Markup {
        let article = self.article;

        html! {
            article class="article-card" {
                div class="article-header" {
                    h3 class="article-title" { (article.title) }
                    @if let Some(thumb) = article.thumbnail.as_deref() {
                        (Thumbnail::new(thumb))
                    }
                }
                p class="meta" {
                    (SourceBadge::new(&article.source))
                    (SourceTypeBadge::new(article.source_type))
                    (LanguageBadge::new(article.language))
                    span class="published" { (article.published) }
                }
                p class="article-body" { (article.body_text()) }
                @if let Some(audio) = article.audio_url.as_deref() {
                    (AudioPlayer::new(AudioId::for_index(self.index), audio))
                }
                div class="article-link" {
                    a class="read-more" href=(article.link) target="_blank" rel="noopener noreferrer" {
                        "元記事を読む →"
                    }
                }
            }
        }
    }
}

/// The article list, in the order the server returned it.
#[derive(Debug, Clone)]
pub struct ArticleList<'a> {
    pub articles: &'a [Article],
}

impl<'a> ArticleList<'a> {
    #[must_use]
    pub const fn new(articles: &'a [Article]) -> Self {
        Self { articles }
    }
}

impl Render for ArticleList<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="article-list" {
                @for (index, article) in self.articles.iter().enumerate() {
                    (ArticleCard::new(article, index))
                }
            }
        }
    }
}

/// Banner with the backend's aggregate counts.
#[derive(Debug, Clone, Copy)]
pub struct StatsBanner {
    pub stats: FeedStats,
}

impl StatsBanner {
    #[must_use]
    pub const fn new(stats: FeedStats) -> Self {
        Self { stats }
    }
}

impl Render for StatsBanner {
    fn render(&self) -> Markup {
        let stats = self.stats;

        html! {
            div class="stats-banner" {
                "記事総数: " (stats.total) " | RSS: " (stats.rss_count) " | API: " (stats.api_count)
            }
        }
    }
}

/// Shown instead of the list until the first fetch settles.
#[derive(Debug, Clone, Copy)]
pub struct LoadingIndicator;

impl Render for LoadingIndicator {
    fn render(&self) -> Markup {
        html! {
            div class="loading" { "読み込み中..." }
        }
    }
}
