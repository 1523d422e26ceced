//! Classifies inbound message text into the fetcher that should handle it.
//!
//! Matching is a case-insensitive substring test on the whole message; there
//! is no URL validation, malformed links fail later inside the fetchers.

use strum::{AsRefStr, Display};

use crate::download::source::{DownloadRequest, MediaKind};

/// Short-form video platform, served by the resolution API.
const VIDEO_DOMAINS: &[&str] = &["tiktok.com"];

/// Long-form video platform (both domain forms), served by yt-dlp as audio.
const AUDIO_DOMAINS: &[&str] = &["youtube.com", "youtu.be"];

/// Result of classifying a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Route {
    Audio,
    Video,
    Unrecognized,
}

impl Route {
    /// Media kind fetched for this route, `None` for unrecognized input.
    pub fn kind(self) -> Option<MediaKind> {
        match self {
            Route::Audio => Some(MediaKind::Audio),
            Route::Video => Some(MediaKind::Video),
            Route::Unrecognized => None,
        }
    }

    /// Builds the fetch request for `text`, `None` for unrecognized input.
    pub fn request(self, text: &str) -> Option<DownloadRequest> {
        self.kind().map(|kind| DownloadRequest::new(text, kind))
    }
}

/// Picks a route for `text`. The short-video domain wins over the long-form ones.
pub fn classify(text: &str) -> Route {
    let lower = text.to_lowercase();

    if VIDEO_DOMAINS.iter().any(|d| lower.contains(d)) {
        Route::Video
    } else if AUDIO_DOMAINS.iter().any(|d| lower.contains(d)) {
        Route::Audio
    } else {
        Route::Unrecognized
    }
}
