use thiserror::Error;

/// Structured error type for fetch operations.
///
/// Every fetcher reduces its failures to one of these categories; the
/// original cause is kept as the message for logs and replies.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Unsupported or broken source URL, yt-dlp failure, transcode failure,
    /// or the expected output file never appeared
    #[error("{0}")]
    Extraction(String),
    /// The resolution API answered with a non-zero code or without a media URL
    #[error("{0}")]
    Resolution(String),
    /// Network error while talking to the API or streaming the media, or an
    /// empty file after transfer
    #[error("{0}")]
    Transfer(String),
}

impl DownloadError {
    /// Returns subcategory for logs
    pub fn subcategory(&self) -> &'static str {
        match self {
            DownloadError::Extraction(_) => "extraction",
            DownloadError::Resolution(_) => "resolution",
            DownloadError::Transfer(_) => "transfer",
        }
    }

    /// Returns the inner message
    pub fn message(&self) -> &str {
        match self {
            DownloadError::Extraction(msg) | DownloadError::Resolution(msg) | DownloadError::Transfer(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for DownloadError {
    fn from(err: reqwest::Error) -> Self {
        DownloadError::Transfer(err.to_string())
    }
}
