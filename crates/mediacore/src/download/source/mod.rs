//! Download source abstraction layer.
//!
//! Provides the `MediaSource` trait for pluggable fetch backends and the
//! `Fetchers` set that maps a media kind to its backend.
//!
//! Built-in backends:
//! - `YtDlpSource`: best audio stream via yt-dlp, transcoded to MP3
//! - `TikwmSource`: short videos resolved through the tikwm API, streamed to disk

pub mod tikwm;
pub mod ytdlp;

use crate::core::config;
use crate::core::error::{AppError, AppResult};
use crate::download::error::DownloadError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use strum::{AsRefStr, Display};

/// What a fetch produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    /// Extension of the files this kind ends up as on disk.
    pub fn extension(self) -> &'static str {
        match self {
            MediaKind::Audio => config::audio::EXTENSION,
            MediaKind::Video => config::video::EXTENSION,
        }
    }
}

/// One fetch, built per inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Text the user sent; handed to the fetcher as-is
    pub source_url: String,
    pub kind: MediaKind,
}

impl DownloadRequest {
    pub fn new(source_url: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            source_url: source_url.into(),
            kind,
        }
    }
}

/// A file that a fetcher confirmed on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResult {
    pub file_path: PathBuf,
    pub size_bytes: u64,
}

impl DownloadResult {
    /// Stats `path` and wraps it. Fails when the file is not there.
    pub fn from_existing(path: PathBuf) -> std::io::Result<Self> {
        let size_bytes = std::fs::metadata(&path)?.len();
        Ok(Self {
            file_path: path,
            size_bytes,
        })
    }
}

/// Trait for fetch backends.
///
/// Each backend turns a source URL into a local file inside its download
/// folder and reports failures through the `DownloadError` taxonomy.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Human-readable name of this source (e.g., "yt-dlp", "tikwm")
    fn name(&self) -> &str;

    /// Execute the fetch.
    async fn fetch(&self, url: &str) -> Result<DownloadResult, DownloadError>;
}

/// The pair of backends the bot dispatches to.
#[derive(Clone)]
pub struct Fetchers {
    audio: Arc<dyn MediaSource>,
    video: Arc<dyn MediaSource>,
}

impl Fetchers {
    pub fn new(audio: Arc<dyn MediaSource>, video: Arc<dyn MediaSource>) -> Self {
        Self { audio, video }
    }

    /// Built-in backends writing into `download_dir`, configured from the environment.
    pub fn from_config(download_dir: &Path) -> AppResult<Self> {
        if config::YTDL_BIN.trim().is_empty() {
            return Err(AppError::Config("YTDL_BIN is set but empty".to_string()));
        }

        let audio = ytdlp::YtDlpSource::new(config::YTDL_BIN.as_str(), download_dir);
        let video = tikwm::TikwmSource::new(config::RESOLVER_API_URL.as_str(), download_dir)?;
        Ok(Self::new(Arc::new(audio), Arc::new(video)))
    }

    pub fn source_for(&self, kind: MediaKind) -> &Arc<dyn MediaSource> {
        match kind {
            MediaKind::Audio => &self.audio,
            MediaKind::Video => &self.video,
        }
    }

    /// Runs the request on the matching backend.
    ///
    /// This is the fetch boundary: failures are logged here with their
    /// category and returned to the caller unchanged.
    pub async fn fetch(&self, request: &DownloadRequest) -> Result<DownloadResult, DownloadError> {
        let source = self.source_for(request.kind);
        log::info!("📥 {} fetch via {}: {}", request.kind, source.name(), request.source_url);

        match source.fetch(&request.source_url).await {
            Ok(result) => {
                log::info!(
                    "✅ {} fetch complete: {} ({} bytes)",
                    request.kind,
                    result.file_path.display(),
                    result.size_bytes
                );
                Ok(result)
            }
            Err(e) => {
                log::error!(
                    "❌ {} fetch failed [{}] for {}: {}",
                    source.name(),
                    e.subcategory(),
                    request.source_url,
                    e
                );
                Err(e)
            }
        }
    }
}
