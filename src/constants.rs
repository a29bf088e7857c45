//! Shared constants used across the application.

/// Display name used in the page heading and document title.
pub const APP_NAME: &str = "VoiceNews";

/// Path of the news endpoint on the backend, resolved against `NEWS_API_URL`.
pub const NEWS_ENDPOINT_PATH: &str = "/api/news";

/// Number of articles requested per page. The feed never asks for more.
pub const PAGE_SIZE: usize = 10;

/// Service worker script registered on mount.
pub const SERVICE_WORKER_PATH: &str = "/sw.js";

/// PWA manifest linked from the page head.
pub const MANIFEST_PATH: &str = "/manifest.json";

/// Theme color advertised to the browser chrome.
pub const THEME_COLOR: &str = "#1976d2";

/// User agent sent to the news backend.
pub const USER_AGENT: &str = concat!("voicenews/", env!("CARGO_PKG_VERSION"));
