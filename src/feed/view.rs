//! The news feed view: one fetch on mount, a rendered article list and
//! single-playback audio.

use maud::{html, Markup, Render};
use tracing::{debug, error, info};

use super::models::{Article, FeedStats, NewsPage};
use super::source::NewsSource;
use crate::components::{ArticleList, LoadingIndicator, StatsBanner};
use crate::constants::{APP_NAME, PAGE_SIZE, SERVICE_WORKER_PATH};
use crate::platform::Platform;
use crate::playback::{AudioId, AudioOutput, PlaybackController};

/// Feed state plus the collaborators it needs to fill itself.
///
/// Starts empty and loading. [`mount`](Self::mount) fetches exactly once;
/// the result replaces the articles and stats wholesale and the loading
/// flag is cleared whatever the outcome.
#[derive(Debug)]
pub struct NewsFeedView<S> {
    source: S,
    articles: Vec<Article>,
    loading: bool,
    stats: Option<FeedStats>,
    playback: PlaybackController,
    mounted: bool,
}

impl<S: NewsSource> NewsFeedView<S> {
    #[must_use]
    pub fn new(source: S, output: Box<dyn AudioOutput>) -> Self {
        Self {
            source,
            articles: Vec::new(),
            loading: true,
            stats: None,
            playback: PlaybackController::new(output),
            mounted: false,
        }
    }

    /// Register the service worker when the host supports it, then fetch.
    ///
    /// Only the first call does anything. If the returned future is
    /// dropped before the fetch settles, no state is touched.
    pub async fn mount(&mut self, platform: Option<&dyn Platform>) {
        if self.mounted {
            debug!("Feed already mounted, skipping fetch");
            return;
        }
        self.mounted = true;

        if let Some(platform) = platform {
            register_service_worker(platform);
        }

        self.fetch_news().await;
    }

    async fn fetch_news(&mut self) {
        match self.source.fetch_page(PAGE_SIZE).await {
            Ok(page) => self.apply(page),
            Err(e) => error!("Error fetching news: {e}"),
        }
        self.loading = false;
    }

    fn apply(&mut self, page: NewsPage) {
        info!(
            articles = page.articles.len(),
            total = page.stats.map(|s| s.total),
            "Loaded news"
        );
        self.playback.attach(&page.articles);
        self.articles = page.articles;
        if page.stats.is_some() {
            self.stats = page.stats;
        }
    }
}

impl<S> NewsFeedView<S> {
    /// Start the audio control `id`, pausing the one last recorded as
    /// playing. `audio_url` is only logged.
    ///
    /// Returns whether `id` started.
    pub fn play_audio(&mut self, audio_url: &str, id: AudioId) -> bool {
        debug!(audio = %id, url = audio_url, "Play requested");
        self.playback.play(id)
    }

    /// A control reported the end of playback.
    pub fn audio_ended(&mut self, id: AudioId) {
        debug!(audio = %id, "Playback ended");
        self.playback.ended(id);
    }

    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn stats(&self) -> Option<FeedStats> {
        self.stats
    }

    #[must_use]
    pub fn current_playing(&self) -> Option<AudioId> {
        self.playback.current()
    }

    #[must_use]
    pub fn is_playing(&self, id: AudioId) -> bool {
        self.playback.is_playing(id)
    }
}

impl<S> Render for NewsFeedView<S> {
    fn render(&self) -> Markup {
        html! {
            h1 class="app-title" { "📻 " (APP_NAME) }
            @if let Some(stats) = self.stats {
                (StatsBanner::new(stats))
            }
            @if self.loading {
                (LoadingIndicator)
            } @else {
                (ArticleList::new(&self.articles))
            }
        }
    }
}

fn register_service_worker(platform: &dyn Platform) {
    if !platform.supports_service_worker() {
        debug!("Service workers unsupported, skipping registration");
        return;
    }
    if let Err(e) = platform.register_service_worker(SERVICE_WORKER_PATH) {
        debug!("Service worker registration failed: {e}");
    }
}
