use thiserror::Error;

/// Centralized error type for startup and plumbing failures
///
/// Fetch failures have their own taxonomy in
/// [`DownloadError`](crate::download::DownloadError); this enum covers
/// everything around them (filesystem setup, HTTP client construction,
/// configuration).
///
/// # Example
///
/// ```no_run
/// use mediacore::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
