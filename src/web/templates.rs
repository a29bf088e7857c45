//! Full-page templates.

use maud::Render;

use crate::components::BaseLayout;
use crate::constants::APP_NAME;
use crate::feed::NewsFeedView;
use crate::platform::PageScripts;

const PAGE_DESCRIPTION: &str = "ニュース記事を音声で聞けるPWAアプリ";

/// Render the feed page around a mounted (or still loading) view.
#[must_use]
pub fn render_home<S>(view: &NewsFeedView<S>, scripts: &PageScripts) -> String {
    let title = format!("{APP_NAME} - ニュース音声アプリ");
    let service_workers = scripts.service_workers();

    BaseLayout::new(&title)
        .with_description(PAGE_DESCRIPTION)
        .with_service_workers(&service_workers)
        .render(view.render())
        .into_string()
}
