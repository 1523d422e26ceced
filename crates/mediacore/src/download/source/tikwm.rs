//! TikwmSource: short-video backend built on the tikwm resolution API.
//!
//! Flow:
//! - POST the page URL to the API (form fields `url`, `hd=1`) and read the
//!   direct media URL from `data.play`
//! - GET that URL and stream the body to `{download_dir}/{id}.mp4` through an
//!   8 KiB write buffer, skipping empty chunks
//! - Reject the result if the file ended up empty
//!
//! The API call and every read of the media stream are bounded by
//! `config::network::timeout()`.

use crate::core::config;
use crate::core::error::AppResult;
use crate::core::utils::{sanitize_filename, video_id_from_url};
use crate::download::error::DownloadError;
use crate::download::source::{DownloadResult, MediaSource};
use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWriteExt, BufWriter};
use url::Url;

/// `{code, msg, data: {play}}`; `data` is left untyped because the API
/// sends other shapes alongside error codes.
#[derive(Debug, Deserialize)]
struct ResolveResponse {
    code: Option<i64>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

impl ResolveResponse {
    fn into_play_url(self) -> Result<String, DownloadError> {
        if self.code != Some(0) {
            return Err(DownloadError::Resolution(format!(
                "API error: {}",
                self.msg.as_deref().unwrap_or("unknown error")
            )));
        }

        self.data
            .as_ref()
            .and_then(|data| data.get("play"))
            .and_then(|play| play.as_str())
            .filter(|play| !play.is_empty())
            .map(str::to_string)
            .ok_or_else(|| DownloadError::Resolution("No video URL found".to_string()))
    }
}

/// Download source for short videos resolved through tikwm.
pub struct TikwmSource {
    client: Client,
    api_url: Url,
    download_dir: PathBuf,
}

impl TikwmSource {
    pub fn new(api_url: &str, download_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(config::resolver::USER_AGENT)
            .connect_timeout(config::network::timeout())
            .build()?;

        Ok(Self {
            client,
            api_url: Url::parse(api_url)?,
            download_dir: download_dir.into(),
        })
    }

    /// `{download_dir}/{id}.mp4` where `id` is the URL's last path segment.
    pub fn output_path(&self, url: &str) -> PathBuf {
        let stem = sanitize_filename(&video_id_from_url(url));
        let stem = if stem.is_empty() {
            config::video::FALLBACK_STEM.to_string()
        } else {
            stem
        };
        self.download_dir.join(format!("{}.{}", stem, config::video::EXTENSION))
    }

    /// Asks the API for a direct, downloadable media URL.
    async fn resolve(&self, url: &str) -> Result<String, DownloadError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .header(ACCEPT, "application/json")
            .form(&[("url", url), ("hd", "1")])
            .timeout(config::network::timeout())
            .send()
            .await?
            .error_for_status()?;

        let body: ResolveResponse = response
            .json()
            .await
            .map_err(|e| DownloadError::Resolution(format!("Malformed API response: {}", e)))?;

        body.into_play_url()
    }

    /// Streams `media_url` into `path`, returning the number of bytes written.
    async fn stream_to_file(&self, media_url: &str, path: &Path) -> Result<u64, DownloadError> {
        let timeout = config::network::timeout();
        let timed_out = || {
            DownloadError::Transfer(format!(
                "Media server did not respond within {}s",
                timeout.as_secs()
            ))
        };

        let response = tokio::time::timeout(timeout, self.client.get(media_url).send())
            .await
            .map_err(|_| timed_out())??
            .error_for_status()?;

        let file = fs_err::tokio::File::create(path)
            .await
            .map_err(|e| DownloadError::Transfer(format!("Failed to create file: {}", e)))?;
        let mut writer = BufWriter::with_capacity(config::network::CHUNK_SIZE, file);

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = tokio::time::timeout(timeout, stream.next())
            .await
            .map_err(|_| timed_out())?
        {
            let chunk = chunk_result.map_err(|e| DownloadError::Transfer(format!("Error reading chunk: {}", e)))?;
            if chunk.is_empty() {
                continue;
            }

            writer
                .write_all(&chunk)
                .await
                .map_err(|e| DownloadError::Transfer(format!("Error writing to file: {}", e)))?;
            written += chunk.len() as u64;
        }

        writer
            .flush()
            .await
            .map_err(|e| DownloadError::Transfer(format!("Failed to flush file: {}", e)))?;

        Ok(written)
    }
}

#[async_trait]
impl MediaSource for TikwmSource {
    fn name(&self) -> &str {
        "tikwm"
    }

    async fn fetch(&self, url: &str) -> Result<DownloadResult, DownloadError> {
        let media_url = self.resolve(url).await?;
        let path = self.output_path(url);
        log::info!("🎬 Streaming {} -> {}", media_url, path.display());

        let written = self.stream_to_file(&media_url, &path).await?;
        log::debug!("Wrote {} bytes to {}", written, path.display());

        match fs_err::tokio::metadata(&path).await {
            Ok(meta) if meta.len() > 0 => Ok(DownloadResult {
                file_path: path,
                size_bytes: meta.len(),
            }),
            _ => Err(DownloadError::Transfer("Downloaded file is empty".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source_for(server: &MockServer, dir: &Path) -> TikwmSource {
        TikwmSource::new(&format!("{}/api/", server.uri()), dir).unwrap()
    }

    async fn mount_api(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/api/"))
            .and(body_string_contains("hd=1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    fn files_in(dir: &Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_output_path_uses_last_segment_without_query() {
        let dir = tempfile::tempdir().unwrap();
        let source = TikwmSource::new("https://www.tikwm.com/api/", dir.path()).unwrap();

        assert_eq!(
            source.output_path("https://www.tiktok.com/@u/video/555?x=1"),
            dir.path().join("555.mp4")
        );
        assert_eq!(source.output_path("https://vm.tiktok.com/"), dir.path().join("video.mp4"));
    }

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        assert!(TikwmSource::new("not a url", "/tmp").is_err());
    }

    #[tokio::test]
    async fn test_fetch_resolves_and_streams_media() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let payload = vec![7u8; 20_000];

        mount_api(
            &server,
            json!({"code": 0, "msg": "success", "data": {"play": format!("{}/media/555.mp4", server.uri())}}),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/media/555.mp4"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
            .mount(&server)
            .await;

        let source = source_for(&server, dir.path());
        let result = source.fetch("https://www.tiktok.com/@u/video/555?x=1").await.unwrap();

        assert_eq!(result.file_path, dir.path().join("555.mp4"));
        assert_eq!(result.size_bytes, 20_000);
        assert_eq!(std::fs::read(&result.file_path).unwrap(), payload);
    }

    #[tokio::test]
    async fn test_api_error_code_fails_without_writing() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        mount_api(&server, json!({"code": 1, "msg": "blocked"})).await;

        let source = source_for(&server, dir.path());
        let err = source.fetch("https://www.tiktok.com/@u/video/555").await.unwrap_err();

        assert_eq!(err.subcategory(), "resolution");
        assert!(err.to_string().contains("blocked"));
        assert_eq!(files_in(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_missing_play_url_fails() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        mount_api(&server, json!({"code": 0, "msg": "success", "data": {}})).await;

        let source = source_for(&server, dir.path());
        let err = source.fetch("https://www.tiktok.com/@u/video/9").await.unwrap_err();

        assert_eq!(err.message(), "No video URL found");
        assert_eq!(files_in(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_empty_media_body_fails() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        mount_api(
            &server,
            json!({"code": 0, "data": {"play": format!("{}/media/empty.mp4", server.uri())}}),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/media/empty.mp4"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let source = source_for(&server, dir.path());
        let err = source.fetch("https://www.tiktok.com/@u/video/42").await.unwrap_err();

        assert_eq!(err.subcategory(), "transfer");
        assert_eq!(err.message(), "Downloaded file is empty");
    }

    #[tokio::test]
    async fn test_api_http_error_is_transfer_failure() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        Mock::given(method("POST"))
            .and(path("/api/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let source = source_for(&server, dir.path());
        let err = source.fetch("https://www.tiktok.com/@u/video/1").await.unwrap_err();

        assert_eq!(err.subcategory(), "transfer");
        assert_eq!(files_in(dir.path()), 0);
    }

    #[test]
    fn test_missing_code_is_an_api_error() {
        let body: ResolveResponse = serde_json::from_value(json!({"data": {"play": "x"}})).unwrap();
        let err = body.into_play_url().unwrap_err();
        assert_eq!(err.message(), "API error: unknown error");
    }
}
