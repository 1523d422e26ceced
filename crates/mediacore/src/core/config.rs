//! Configuration values for the bot.
//!
//! Every value is read once from the environment on first access. Call
//! `dotenvy::dotenv()` before touching any of them if a `.env` file should
//! be honoured.

use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Cached yt-dlp binary path
/// Read from YTDL_BIN environment variable or defaults to "yt-dlp"
pub static YTDL_BIN: Lazy<String> = Lazy::new(|| env::var("YTDL_BIN").unwrap_or_else(|_| "yt-dlp".to_string()));

/// Download folder path
/// Read from DOWNLOAD_FOLDER environment variable
/// Default: downloaded_media (relative to the working directory)
pub static DOWNLOAD_FOLDER: Lazy<PathBuf> = Lazy::new(|| {
    env::var("DOWNLOAD_FOLDER")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("downloaded_media"))
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: mediabot.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "mediabot.log".to_string()));

/// Log verbosity for both the terminal and the log file
/// Read from LOG_LEVEL environment variable (error, warn, info, debug, trace, off)
/// Default: info
pub static LOG_LEVEL: Lazy<String> = Lazy::new(|| env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Custom Bot API server (local telegram-bot-api), if any
/// Read from BOT_API_URL environment variable
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| env::var("BOT_API_URL").ok());

/// Endpoint that resolves short-video page URLs into direct media URLs
/// Read from RESOLVER_API_URL environment variable
pub static RESOLVER_API_URL: Lazy<String> =
    Lazy::new(|| env::var("RESOLVER_API_URL").unwrap_or_else(|_| resolver::DEFAULT_API_URL.to_string()));

/// Network configuration
pub mod network {
    use super::Duration;

    /// Timeout for the resolution call and for each read of the media stream (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Write granularity when streaming media to disk
    pub const CHUNK_SIZE: usize = 8 * 1024;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Short-video resolution API configuration
pub mod resolver {
    /// tikwm.com public API
    pub const DEFAULT_API_URL: &str = "https://www.tikwm.com/api/";

    /// Desktop browser UA; the API rejects obvious bots
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
}

/// Audio extraction configuration
pub mod audio {
    /// yt-dlp format selector
    pub const FORMAT_SELECTOR: &str = "bestaudio/best";

    /// Target codec / file extension after transcoding
    pub const EXTENSION: &str = "mp3";

    /// Target bitrate handed to `--audio-quality`
    pub const QUALITY: &str = "320K";

    /// Used when the extractor reports no title
    pub const FALLBACK_TITLE: &str = "audio";
}

/// Video download configuration
pub mod video {
    pub const EXTENSION: &str = "mp4";

    /// Used when no identifier can be derived from the URL
    pub const FALLBACK_STEM: &str = "video";
}
