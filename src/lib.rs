//! VoiceNews library.
//!
//! A server-rendered news feed: fetches a page of articles from the news
//! backend, renders them with badges and audio summaries, and keeps at most
//! one audio control playing at a time.

pub mod components;
pub mod config;
pub mod constants;
pub mod feed;
pub mod platform;
pub mod playback;
pub mod web;
