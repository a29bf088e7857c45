use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use super::templates;
use super::AppState;
use crate::feed::NewsFeedView;
use crate::platform::PageScripts;
use crate::playback::DetachedOutput;

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/healthz", get(health))
}

/// Mount a fresh feed view and render it. Fetch failures still render the
/// page, just without articles.
async fn home(State(state): State<AppState>) -> Html<String> {
    let scripts = PageScripts::new();
    let mut view = NewsFeedView::new(state.source.clone(), Box::new(DetachedOutput));
    view.mount(Some(&scripts)).await;

    Html(templates::render_home(&view, &scripts))
}

async fn health() -> &'static str {
    "ok"
}
