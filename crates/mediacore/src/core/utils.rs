use std::path::Path;

/// Characters rejected by at least one common filesystem.
const ILLEGAL_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Strips characters that are illegal in common filesystems from a media title.
///
/// Removed characters: `<` `>` `:` `"` `/` `\` `|` `?` `*`.
/// Everything else (spaces, dots, unicode) is left untouched; there is no
/// length clamping and no reserved-name handling.
///
/// # Example
///
/// ```
/// use mediacore::core::utils::sanitize_filename;
///
/// assert_eq!(sanitize_filename("AC/DC: Back In Black?"), "ACDC Back In Black");
/// ```
pub fn sanitize_filename(title: &str) -> String {
    title.chars().filter(|c| !ILLEGAL_FILENAME_CHARS.contains(c)).collect()
}

/// Formats a byte count as mebibytes with two decimals, e.g. `"3.47 MB"`.
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Derives a file stem from the last path segment of a URL, query string dropped.
///
/// `https://www.tiktok.com/@u/video/555?x=1` -> `555`
pub fn video_id_from_url(url: &str) -> String {
    let last_segment = url.trim().rsplit('/').next().unwrap_or_default();
    last_segment.split('?').next().unwrap_or_default().to_string()
}

/// Final path component as a displayable string (`"?"` when there is none).
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "?".to_string())
}

/// Creates the download folder (and parents) if it is missing.
pub async fn ensure_download_dir(path: &Path) -> std::io::Result<()> {
    fs_err::tokio::create_dir_all(path).await
}
