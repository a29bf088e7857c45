//! Base layout component for the feed page.
//!
//! This module provides the HTML skeleton: PWA head metadata, the main
//! container and the inline scripts the page needs in the browser.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::constants::{MANIFEST_PATH, THEME_COLOR};

/// Single-playback discipline for native audio controls.
/// Starting one feed audio pauses the one that was last playing.
const PLAYBACK_SCRIPT: &str = r#"(function() {
    var current = null;
    document.addEventListener('play', function(e) {
        var el = e.target;
        if (!el.hasAttribute || !el.hasAttribute('data-feed-audio')) return;
        if (current && current !== el) {
            var prev = document.getElementById(current);
            if (prev) prev.pause();
        }
        current = el.id;
    }, true);
    document.addEventListener('ended', function(e) {
        if (e.target.hasAttribute && e.target.hasAttribute('data-feed-audio')) current = null;
    }, true);
})();"#;

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("My Page")
///     .with_service_workers(&["/sw.js".to_string()])
///     .render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    description: Option<&'a str>,
    service_workers: &'a [String],
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given document title.
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            description: None,
            service_workers: &[],
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    /// Service worker scripts the browser should register on load.
    #[must_use]
    pub fn with_service_workers(mut self, scripts: &'a [String]) -> Self {
        self.service_workers = scripts;
        self
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="ja" {
                head {
                    meta charset="UTF-8";
                    title { (self.title) }
                    @if let Some(description) = self.description {
                        meta name="description" content=(description);
                    }
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    link rel="manifest" href=(MANIFEST_PATH);
                    meta name="theme-color" content=(THEME_COLOR);
                    link rel="stylesheet" href="/css/style.css";
                }
                body {
                    main class="container" {
                        (content)
                    }
                    script { (PreEscaped(PLAYBACK_SCRIPT)) }
                    @if !self.service_workers.is_empty() {
                        script { (PreEscaped(service_worker_script(self.service_workers))) }
                    }
                }
            }
        }
    }
}

/// Capability-guarded registration; failures stay in the browser console.
fn service_worker_script(scripts: &[String]) -> String {
    let mut js = String::from("if ('serviceWorker' in navigator) {\n");
    for script in scripts {
        let literal = serde_json::to_string(script)
            .unwrap_or_else(|_| "\"\"".to_string())
            .replace("</", "<\\/");
        js.push_str(&format!(
            "    navigator.serviceWorker.register({literal}).catch(function() {{}});\n"
        ));
    }
    js.push('}');
    js
}
