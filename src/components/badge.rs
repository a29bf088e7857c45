//! Badge components for article metadata.
//!
//! Each article shows its publisher, whether it came from RSS or a search
//! API, and whether it was translated.

use maud::{html, Markup, Render};

use crate::feed::models::{Language, SourceType};

/// Publisher name badge.
#[derive(Debug, Clone)]
pub struct SourceBadge<'a> {
    pub source: &'a str,
}

impl<'a> SourceBadge<'a> {
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source }
    }
}

impl Render for SourceBadge<'_> {
    fn render(&self) -> Markup {
        html! {
            span class="badge source-badge" { "📰 " (self.source) }
        }
    }
}

/// RSS vs API origin badge.
#[derive(Debug, Clone, Copy)]
pub struct SourceTypeBadge {
    pub source_type: SourceType,
}

impl SourceTypeBadge {
    #[must_use]
    pub const fn new(source_type: SourceType) -> Self {
        Self { source_type }
    }

    /// Get the CSS class for this badge.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.source_type {
            SourceType::Rss => "badge source-type-rss",
            SourceType::Api => "badge source-type-api",
        }
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self.source_type {
            SourceType::Rss => "\u{1F4E1}", // 📡
            SourceType::Api => "\u{1F50D}", // 🔍
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.source_type {
            SourceType::Rss => "RSS",
            SourceType::Api => "API",
        }
    }
}

impl Render for SourceTypeBadge {
    fn render(&self) -> Markup {
        html! {
            span class=(self.css_class()) { (self.icon()) " " (self.label()) }
        }
    }
}

/// Language badge: English articles are shown translated into Japanese.
#[derive(Debug, Clone, Copy)]
pub struct LanguageBadge {
    pub language: Language,
}

impl LanguageBadge {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.language {
            Language::En => "EN→JP",
            Language::Other => "JP",
        }
    }

    #[must_use]
    pub const fn flag(&self) -> &'static str {
        match self.language {
            Language::En => "🇺🇸",
            Language::Other => "🇯🇵",
        }
    }
}

impl Render for LanguageBadge {
    fn render(&self) -> Markup {
        let title = match self.language {
            Language::En => "Translated from English",
            Language::Other => "Japanese source",
        };

        html! {
            span class="badge language-badge" title=(title) { (self.flag()) " " (self.label()) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_badge_render() {
        let html = SourceBadge::new("NHK").render().into_string();

        assert!(html.contains("source-badge"));
        assert!(html.contains("📰 NHK"));
    }

    #[test]
    fn test_source_badge_escapes() {
        let html = SourceBadge::new("<b>Evil</b>").render().into_string();

        assert!(html.contains("&lt;b&gt;Evil&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_source_type_badge() {
        let rss = SourceTypeBadge::new(SourceType::Rss).render().into_string();
        let api = SourceTypeBadge::new(SourceType::Api).render().into_string();

        assert!(rss.contains("source-type-rss"));
        assert!(rss.contains("📡 RSS"));
        assert!(api.contains("source-type-api"));
        assert!(api.contains("🔍 API"));
    }

    #[test]
    fn test_language_badge() {
        let en = LanguageBadge::new(Language::En).render().into_string();
        let other = LanguageBadge::new(Language::Other).render().into_string();

        assert!(en.contains("EN→JP"));
        assert!(other.contains("🇯🇵 JP"));
        assert!(!other.contains("EN→JP"));
    }
}
