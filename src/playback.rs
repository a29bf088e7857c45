//! Single-playback bookkeeping for the feed's audio controls.
//!
//! Every article with audio gets a handle, keyed by [`AudioId`]. Starting
//! one control through [`PlaybackController::play`] first pauses whichever
//! control was last recorded as playing. This is bookkeeping, not a lock:
//! a handle driven from elsewhere is not tracked.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use crate::feed::models::Article;

/// Identifier of one audio control, derived from the article's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioId(usize);

impl AudioId {
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for AudioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "audio-{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("audio {id} refused to start: {reason}")]
    Rejected { id: AudioId, reason: String },
}

/// A playable audio resource owned by the view.
pub trait AudioHandle: Send {
    /// Start or resume playback.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource refuses to start.
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pause playback. Pausing a paused handle does nothing.
    fn pause(&mut self);

    /// Playback reached the end of the resource.
    fn finished(&mut self) {
        self.pause();
    }

    fn is_playing(&self) -> bool;
}

/// Opens handles for audio sources.
pub trait AudioOutput: Send + Sync {
    fn open(&self, id: AudioId, src: &str) -> Box<dyn AudioHandle>;
}

/// Output whose handles only track state. Used when the real element lives
/// elsewhere, e.g. in a browser rendering the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedOutput;

#[derive(Debug)]
struct DetachedHandle {
    playing: bool,
}

impl AudioHandle for DetachedHandle {
    fn play(&mut self) -> Result<(), PlaybackError> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

impl AudioOutput for DetachedOutput {
    fn open(&self, _id: AudioId, _src: &str) -> Box<dyn AudioHandle> {
        Box::new(DetachedHandle { playing: false })
    }
}

/// Maps audio ids to handles and remembers which one is playing.
pub struct PlaybackController {
    output: Box<dyn AudioOutput>,
    handles: HashMap<AudioId, Box<dyn AudioHandle>>,
    current: Option<AudioId>,
}

impl PlaybackController {
    #[must_use]
    pub fn new(output: Box<dyn AudioOutput>) -> Self {
        Self {
            output,
            handles: HashMap::new(),
            current: None,
        }
    }

    /// Replace all handles with one per article that carries audio.
    pub fn attach(&mut self, articles: &[Article]) {
        if let Some(id) = self.current.take() {
            if let Some(handle) = self.handles.get_mut(&id) {
                handle.pause();
            }
        }
        self.handles = articles
            .iter()
            .enumerate()
            .filter_map(|(index, article)| {
                let src = article.audio_url.as_deref()?;
                let id = AudioId::for_index(index);
                Some((id, self.output.open(id, src)))
            })
            .collect();
        debug!(handles = self.handles.len(), "Attached audio handles");
    }

    /// Pause the recorded control, then start `id` and record it.
    ///
    /// Returns whether `id` started. A missing previous handle is skipped.
    pub fn play(&mut self, id: AudioId) -> bool {
        if let Some(previous) = self.current.take() {
            match self.handles.get_mut(&previous) {
                Some(handle) => handle.pause(),
                None => debug!(audio = %previous, "Previous audio no longer present"),
            }
        }

        let Some(handle) = self.handles.get_mut(&id) else {
            debug!(audio = %id, "No audio control for id");
            return false;
        };

        match handle.play() {
            Ok(()) => {
                self.current = Some(id);
                true
            }
            Err(e) => {
                warn!(audio = %id, "Audio playback failed: {e}");
                false
            }
        }
    }

    /// Playback finished on `id`. The handle is marked stopped and the
    /// record is cleared only if `id` is the one recorded as playing.
    pub fn ended(&mut self, id: AudioId) {
        if let Some(handle) = self.handles.get_mut(&id) {
            handle.finished();
        }
        if self.current == Some(id) {
            self.current = None;
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<AudioId> {
        self.current
    }

    #[cfg(test)]
    fn contains(&self, id: AudioId) -> bool {
        self.handles.contains_key(&id)
    }

    #[must_use]
    pub fn is_playing(&self, id: AudioId) -> bool {
        self.handles.get(&id).is_some_and(|h| h.is_playing())
    }
}

impl fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("handles", &self.handles.len())
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::models::{Language, SourceType};

    fn article(audio: Option<&str>) -> Article {
        Article {
            title: "T".to_string(),
            description: "D".to_string(),
            link: "https://example.com".to_string(),
            published: "2024-01-01".to_string(),
            source: "S".to_string(),
            source_type: SourceType::Rss,
            language: Language::En,
            summary: None,
            audio_url: audio.map(str::to_string),
            thumbnail: None,
        }
    }

    struct RefusingOutput;

    struct RefusingHandle(AudioId);

    impl AudioHandle for RefusingHandle {
        fn play(&mut self) -> Result<(), PlaybackError> {
            Err(PlaybackError::Rejected {
                id: self.0,
                reason: "autoplay blocked".to_string(),
            })
        }

        fn pause(&mut self) {}

        fn is_playing(&self) -> bool {
            false
        }
    }

    impl AudioOutput for RefusingOutput {
        fn open(&self, id: AudioId, _src: &str) -> Box<dyn AudioHandle> {
            Box::new(RefusingHandle(id))
        }
    }

    #[test]
    fn test_audio_id_display() {
        assert_eq!(AudioId::for_index(0).to_string(), "audio-0");
        assert_eq!(AudioId::for_index(7).to_string(), "audio-7");
    }

    #[test]
    fn test_attach_only_articles_with_audio() {
        let mut controller = PlaybackController::new(Box::new(DetachedOutput));
        controller.attach(&[article(Some("/a.mp3")), article(None), article(Some("/c.mp3"))]);

        assert!(controller.contains(AudioId::for_index(0)));
        assert!(!controller.contains(AudioId::for_index(1)));
        assert!(controller.contains(AudioId::for_index(2)));
    }

    #[test]
    fn test_play_pauses_previous() {
        let mut controller = PlaybackController::new(Box::new(DetachedOutput));
        controller.attach(&[article(Some("/a.mp3")), article(Some("/b.mp3"))]);
        let a = AudioId::for_index(0);
        let b = AudioId::for_index(1);

        assert!(controller.play(a));
        assert!(controller.is_playing(a));

        assert!(controller.play(b));
        assert!(!controller.is_playing(a));
        assert!(controller.is_playing(b));
        assert_eq!(controller.current(), Some(b));
    }

    #[test]
    fn test_play_missing_target_clears_current() {
        let mut controller = PlaybackController::new(Box::new(DetachedOutput));
        controller.attach(&[article(Some("/a.mp3")), article(None)]);
        let a = AudioId::for_index(0);

        controller.play(a);
        assert!(!controller.play(AudioId::for_index(1)));
        assert!(!controller.is_playing(a));
        assert_eq!(controller.current(), None);
    }

    #[test]
    fn test_refused_play_is_not_recorded() {
        let mut controller = PlaybackController::new(Box::new(RefusingOutput));
        controller.attach(&[article(Some("/a.mp3"))]);

        assert!(!controller.play(AudioId::for_index(0)));
        assert_eq!(controller.current(), None);
    }

    #[test]
    fn test_ended_clears_current() {
        let mut controller = PlaybackController::new(Box::new(DetachedOutput));
        controller.attach(&[article(Some("/a.mp3"))]);
        controller.play(AudioId::for_index(0));

        controller.ended(AudioId::for_index(0));
        assert_eq!(controller.current(), None);
        assert!(!controller.is_playing(AudioId::for_index(0)));
    }

    #[test]
    fn test_ended_then_play_other_leaves_one_playing() {
        let mut controller = PlaybackController::new(Box::new(DetachedOutput));
        controller.attach(&[article(Some("/a.mp3")), article(Some("/b.mp3"))]);
        let a = AudioId::for_index(0);
        let b = AudioId::for_index(1);

        controller.play(a);
        controller.ended(a);
        controller.play(b);

        assert!(!controller.is_playing(a));
        assert!(controller.is_playing(b));
        assert_eq!(controller.current(), Some(b));
    }

    #[test]
    fn test_ended_for_other_control_keeps_current() {
        let mut controller = PlaybackController::new(Box::new(DetachedOutput));
        controller.attach(&[article(Some("/a.mp3")), article(Some("/b.mp3"))]);
        let a = AudioId::for_index(0);
        let b = AudioId::for_index(1);

        controller.play(a);
        controller.play(b);
        controller.ended(a);

        assert_eq!(controller.current(), Some(b));
        assert!(controller.is_playing(b));
    }

    #[test]
    fn test_reattach_resets_bookkeeping() {
        let mut controller = PlaybackController::new(Box::new(DetachedOutput));
        controller.attach(&[article(Some("/a.mp3"))]);
        controller.play(AudioId::for_index(0));

        controller.attach(&[article(None)]);
        assert_eq!(controller.current(), None);
        assert!(!controller.contains(AudioId::for_index(0)));
    }
}
