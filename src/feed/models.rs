//! Wire types for the news endpoint and the normalized page the view holds.
//!
//! The endpoint answers in one of two shapes: an envelope carrying
//! `articles` plus aggregate counts, or a bare array of articles from older
//! servers. [`NewsPayload`] decodes either and [`NewsPage`] is what the rest
//! of the crate sees.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Where an article was collected from. Drives the RSS/API badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Rss,
    /// Any non-RSS origin. The backend currently sends `brave_api`.
    #[serde(other)]
    Api,
}

/// Original language of an article. English articles are translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[serde(other)]
    Other,
}

/// A single article as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub link: String,
    /// Display-formatted timestamp, shown verbatim.
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub source: String,
    pub source_type: SourceType,
    pub language: Language,
    #[serde(default, deserialize_with = "non_blank")]
    pub summary: Option<String>,
    #[serde(default, rename = "audioUrl", deserialize_with = "non_blank")]
    pub audio_url: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub thumbnail: Option<String>,
}

impl Article {
    /// Text shown under the title: the summary when there is one.
    #[must_use]
    pub fn body_text(&self) -> &str {
        self.summary.as_deref().unwrap_or(&self.description)
    }
}

/// Aggregate counts across the backend's whole corpus, not just this page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedStats {
    pub total: u64,
    pub rss_count: u64,
    pub api_count: u64,
}

/// Envelope shape: `{ articles, total, rss_count, api_count }`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsEnvelope {
    pub articles: Vec<Article>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub rss_count: Option<u64>,
    #[serde(default)]
    pub api_count: Option<u64>,
}

/// Either response shape, decoded at the boundary.
#[derive(Debug, Clone)]
pub enum NewsPayload {
    Legacy(Vec<Article>),
    Envelope(NewsEnvelope),
}

impl NewsPayload {
    /// Pick the shape from the top-level JSON value, then decode that shape
    /// only, so errors name the offending field.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not JSON, is neither an array nor an
    /// object, or does not match the chosen shape.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(body)? {
            value @ Value::Array(_) => Ok(Self::Legacy(serde_json::from_value(value)?)),
            value @ Value::Object(_) => Ok(Self::Envelope(serde_json::from_value(value)?)),
            other => Err(serde_json::Error::custom(format!(
                "expected an array of articles or an envelope object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Normalized page: articles in server order plus optional stats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsPage {
    pub articles: Vec<Article>,
    pub stats: Option<FeedStats>,
}

impl From<NewsPayload> for NewsPage {
    fn from(payload: NewsPayload) -> Self {
        match payload {
            NewsPayload::Legacy(articles) => Self {
                articles,
                stats: None,
            },
            NewsPayload::Envelope(envelope) => {
                let stats = envelope.total.map(|total| FeedStats {
                    total,
                    rss_count: envelope.rss_count.unwrap_or(0),
                    api_count: envelope.api_count.unwrap_or(0),
                });
                Self {
                    articles: envelope.articles,
                    stats,
                }
            }
        }
    }
}

impl NewsPage {
    /// Decode a response body in either shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not JSON or matches neither shape.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        NewsPayload::from_json(body).map(Self::from)
    }
}

/// Treat missing, empty and whitespace-only strings as absent.
fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = r#"{
        "title": "T",
        "description": "D",
        "link": "https://x",
        "published": "2024-01-01",
        "source": "S",
        "source_type": "rss",
        "language": "en"
    }"#;

    #[test]
    fn test_envelope_with_stats() {
        let body = format!(r#"{{"articles":[{ARTICLE}],"total":42,"rss_count":30,"api_count":12}}"#);
        let page = NewsPage::from_json(body.as_bytes()).unwrap();

        assert_eq!(page.articles.len(), 1);
        assert_eq!(
            page.stats,
            Some(FeedStats {
                total: 42,
                rss_count: 30,
                api_count: 12
            })
        );
    }

    #[test]
    fn test_envelope_without_total_has_no_stats() {
        let body = format!(r#"{{"articles":[{ARTICLE}],"rss_count":1}}"#);
        let page = NewsPage::from_json(body.as_bytes()).unwrap();

        assert_eq!(page.articles.len(), 1);
        assert!(page.stats.is_none());
    }

    #[test]
    fn test_envelope_total_only_defaults_counts() {
        let page = NewsPage::from_json(br#"{"articles":[],"total":7}"#).unwrap();
        assert_eq!(
            page.stats,
            Some(FeedStats {
                total: 7,
                rss_count: 0,
                api_count: 0
            })
        );
    }

    #[test]
    fn test_legacy_array() {
        let body = format!("[{ARTICLE}]");
        let page = NewsPage::from_json(body.as_bytes()).unwrap();

        assert_eq!(page.articles.len(), 1);
        assert_eq!(page.articles[0].title, "T");
        assert!(page.stats.is_none());
    }

    #[test]
    fn test_empty_legacy_array() {
        let page = NewsPage::from_json(b"[]").unwrap();
        assert!(page.articles.is_empty());
        assert!(page.stats.is_none());
    }

    #[test]
    fn test_object_without_articles_is_rejected() {
        assert!(NewsPage::from_json(br#"{"detail":"Error fetching news"}"#).is_err());
    }

    #[test]
    fn test_decode_error_names_missing_field() {
        let err = NewsPage::from_json(br#"[{"link":"https://x","source_type":"rss","language":"en"}]"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field `title`"), "{err}");

        let err = NewsPage::from_json(br#"{"detail":"Error fetching news"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `articles`"), "{err}");
    }

    #[test]
    fn test_scalar_body_is_rejected() {
        let err = NewsPage::from_json(b"42").unwrap_err();
        assert!(err.to_string().contains("got a number"), "{err}");
    }

    #[test]
    fn test_not_json_is_rejected() {
        assert!(NewsPage::from_json(b"<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_source_type_mapping() {
        let rss: SourceType = serde_json::from_str(r#""rss""#).unwrap();
        let api: SourceType = serde_json::from_str(r#""api""#).unwrap();
        let brave: SourceType = serde_json::from_str(r#""brave_api""#).unwrap();

        assert_eq!(rss, SourceType::Rss);
        assert_eq!(api, SourceType::Api);
        assert_eq!(brave, SourceType::Api);
    }

    #[test]
    fn test_language_mapping() {
        let en: Language = serde_json::from_str(r#""en""#).unwrap();
        let ja: Language = serde_json::from_str(r#""ja""#).unwrap();

        assert_eq!(en, Language::En);
        assert_eq!(ja, Language::Other);
    }

    #[test]
    fn test_optional_fields_blank_are_absent() {
        let json = r#"{
            "title": "T", "link": "https://x", "source_type": "rss", "language": "ja",
            "summary": "  ", "audioUrl": "", "thumbnail": ""
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();

        assert!(article.summary.is_none());
        assert!(article.audio_url.is_none());
        assert!(article.thumbnail.is_none());
        assert_eq!(article.description, "");
        assert_eq!(article.source, "");
    }

    #[test]
    fn test_audio_url_uses_camel_case() {
        let json = r#"{
            "title": "T", "link": "https://x", "source_type": "rss", "language": "en",
            "audioUrl": "/static/audio/abc.mp3"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.audio_url.as_deref(), Some("/static/audio/abc.mp3"));
    }

    #[test]
    fn test_body_text_prefers_summary() {
        let mut article: Article = serde_json::from_str(ARTICLE).unwrap();
        assert_eq!(article.body_text(), "D");

        article.summary = Some("要約".to_string());
        assert_eq!(article.body_text(), "要約");
    }
}
