//! Audio player and thumbnail components.

use maud::{html, Markup, Render};

use crate::playback::AudioId;

/// Audio control for an article summary. The element id is the article's
/// [`AudioId`], which the page script uses for single playback.
#[derive(Debug, Clone)]
pub struct AudioPlayer<'a> {
    /// Element id of the audio control
    pub id: AudioId,
    /// Source URL for the audio
    pub src: &'a str,
}

impl<'a> AudioPlayer<'a> {
    /// Create a new audio player.
    #[must_use]
    pub fn new(id: AudioId, src: &'a str) -> Self {
        Self { id, src }
    }

    /// Infer the audio MIME type from the source URL extension.
    fn inferred_type(&self) -> &'static str {
        let path = self.src.split(|c: char| c == '?' || c == '#').next().unwrap_or("");
        let extension = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match extension.as_str() {
            "wav" => "audio/wav",
            "ogg" | "oga" => "audio/ogg",
            "m4a" => "audio/mp4",
            "aac" => "audio/aac",
            "webm" => "audio/webm",
            _ => "audio/mpeg", // gTTS output is mp3
        }
    }
}

impl Render for AudioPlayer<'_> {
    fn render(&self) -> Markup {
        let audio_type = self.inferred_type();

        html! {
            div class="audio-wrapper" {
                audio id=(self.id.to_string()) controls preload="metadata" data-feed-audio {
                    source src=(self.src) type=(audio_type);
                    "Your browser does not support the audio element."
                }
            }
        }
    }
}

/// Small square article thumbnail.
#[derive(Debug, Clone)]
pub struct Thumbnail<'a> {
    pub src: &'a str,
}

impl<'a> Thumbnail<'a> {
    #[must_use]
    pub const fn new(src: &'a str) -> Self {
        Self { src }
    }
}

impl Render for Thumbnail<'_> {
    fn render(&self) -> Markup {
        html! {
            img class="article-thumb" src=(self.src) alt="" loading="lazy";
        }
    }
}
