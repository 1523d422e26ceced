//! YtDlpSource: audio backend powered by yt-dlp.
//!
//! Two invocations per fetch: one to read the title (which names the output
//! file), one to pull the best audio stream and transcode it to MP3 through
//! yt-dlp's ffmpeg post-processor. The subprocess runs on tokio's process
//! API so a slow extraction never stalls the dispatcher.

use crate::core::config;
use crate::core::utils::sanitize_filename;
use crate::download::error::DownloadError;
use crate::download::source::{DownloadResult, MediaSource};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::{Output, Stdio};
use tokio::process::Command;

/// Download source extracting MP3 audio via yt-dlp.
pub struct YtDlpSource {
    bin: String,
    download_dir: PathBuf,
}

impl YtDlpSource {
    pub fn new(bin: impl Into<String>, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            bin: bin.into(),
            download_dir: download_dir.into(),
        }
    }

    /// `{download_dir}/{stem}.mp3`: where the transcoded file must end up.
    pub fn expected_output_path(&self, stem: &str) -> PathBuf {
        self.download_dir.join(format!("{}.{}", stem, config::audio::EXTENSION))
    }

    /// File stem for a title as reported by the extractor.
    pub fn stem_for_title(title: &str) -> String {
        let stem = sanitize_filename(title.trim());
        if stem.trim().is_empty() {
            config::audio::FALLBACK_TITLE.to_string()
        } else {
            stem
        }
    }

    /// yt-dlp output template for `stem`. `%` is template syntax, so literal
    /// percent signs from the title are doubled.
    fn output_template(&self, stem: &str) -> PathBuf {
        self.download_dir.join(format!("{}.%(ext)s", stem.replace('%', "%%")))
    }

    async fn run(&self, args: &[&str]) -> Result<Output, DownloadError> {
        log::debug!("Running {} {}", self.bin, args.join(" "));

        let output = Command::new(&self.bin)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| DownloadError::Extraction(format!("Failed to run {}: {}", self.bin, e)))?;

        if output.status.success() {
            Ok(output)
        } else {
            Err(DownloadError::Extraction(format!(
                "{} exited with {}: {}",
                self.bin,
                output.status,
                stderr_summary(&output)
            )))
        }
    }

    /// Asks yt-dlp for the media title without downloading anything.
    async fn fetch_title(&self, url: &str) -> Result<String, DownloadError> {
        let output = self
            .run(&["--no-playlist", "--no-warnings", "--skip-download", "--print", "title", url])
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or(config::audio::FALLBACK_TITLE)
            .to_string())
    }

    async fn extract_audio(&self, url: &str, stem: &str) -> Result<(), DownloadError> {
        let template = self.output_template(stem).to_string_lossy().into_owned();

        self.run(&[
            "--no-playlist",
            "--no-warnings",
            "-f",
            config::audio::FORMAT_SELECTOR,
            "--extract-audio",
            "--audio-format",
            config::audio::EXTENSION,
            "--audio-quality",
            config::audio::QUALITY,
            "-o",
            template.as_str(),
            url,
        ])
        .await
        .map(|_| ())
    }
}

#[async_trait]
impl MediaSource for YtDlpSource {
    fn name(&self) -> &str {
        "yt-dlp"
    }

    async fn fetch(&self, url: &str) -> Result<DownloadResult, DownloadError> {
        let title = self.fetch_title(url).await?;
        let stem = Self::stem_for_title(&title);
        log::info!("🎵 Extracting audio for \"{}\" -> {}.{}", title, stem, config::audio::EXTENSION);

        self.extract_audio(url, &stem).await?;

        let expected = self.expected_output_path(&stem);
        if !expected.exists() {
            return Err(DownloadError::Extraction("MP3 file was not created".to_string()));
        }

        DownloadResult::from_existing(expected)
            .map_err(|e| DownloadError::Extraction(format!("Failed to stat MP3 file: {}", e)))
    }
}

/// Last meaningful stderr line; yt-dlp prints the actual error last.
fn stderr_summary(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    stderr
        .lines()
        .map(str::trim)
        .rfind(|line| !line.is_empty())
        .unwrap_or("no error output")
        .to_string()
}
