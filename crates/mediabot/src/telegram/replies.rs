//! User-facing reply texts.

use indoc::indoc;
use mediacore::core::utils::{file_name_of, format_size_mb};
use mediacore::{DownloadResult, MediaKind};

pub const WELCOME: &str = indoc! {"
    🎵 Media Downloader Bot 🎵

    Send me:
    - TikTok URL to download videos
    - YouTube URL to convert to MP3

    I'll save everything to your local folder!"};

pub const UNRECOGNIZED: &str = "Please send a valid TikTok or YouTube URL";

pub const KEEP_ONLY_BUTTON: &str = "No, just save it";
pub const SAVED_ONLY: &str = "✅ Saved to your downloads folder!";
pub const FILE_NOT_FOUND: &str = "❌ Error: File not found";
pub const SEND_FAILED: &str = "❌ Failed to send the file";

pub fn progress(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Audio => "⏳ Converting YouTube video to MP3...",
        MediaKind::Video => "⏳ Downloading TikTok video...",
    }
}

pub fn fetch_failed(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Audio => "❌ Failed to convert YouTube video",
        MediaKind::Video => "❌ Failed to download TikTok video",
    }
}

/// Summary shown with the confirmation keyboard.
///
/// Audio names only the file, video shows the full saved path.
pub fn fetch_summary(kind: MediaKind, result: &DownloadResult) -> String {
    let size = format_size_mb(result.size_bytes);
    match kind {
        MediaKind::Audio => format!(
            "✅ YouTube audio converted!\n🎵 Saved as: {}\n📏 Size: {}\n\nSend you the MP3 in Telegram?",
            file_name_of(&result.file_path),
            size
        ),
        MediaKind::Video => format!(
            "✅ TikTok video downloaded!\n📁 Saved to: {}\n📏 Size: {}\n\nSend you the video in Telegram?",
            result.file_path.display(),
            size
        ),
    }
}

pub fn send_button(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Audio => "Yes, send me the MP3",
        MediaKind::Video => "Yes, send me the video",
    }
}

pub fn caption(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Audio => "Here's your YouTube audio!",
        MediaKind::Video => "Here's your TikTok video!",
    }
}

pub fn sent(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Audio => "✅ Audio sent!",
        MediaKind::Video => "✅ Video sent!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_welcome_has_no_indentation() {
        assert!(WELCOME.starts_with("🎵 Media Downloader Bot 🎵\n\nSend me:\n- TikTok"));
        assert!(WELCOME.ends_with("local folder!"));
    }

    #[test]
    fn test_audio_summary_shows_file_name_and_size() {
        let result = DownloadResult {
            file_path: PathBuf::from("downloaded_media/Song.mp3"),
            size_bytes: 3 * 1024 * 1024 + 512 * 1024,
        };

        assert_eq!(
            fetch_summary(MediaKind::Audio, &result),
            "✅ YouTube audio converted!\n🎵 Saved as: Song.mp3\n📏 Size: 3.50 MB\n\nSend you the MP3 in Telegram?"
        );
    }

    #[test]
    fn test_video_summary_shows_full_path() {
        let result = DownloadResult {
            file_path: PathBuf::from("downloaded_media/555.mp4"),
            size_bytes: 1024 * 1024,
        };

        let text = fetch_summary(MediaKind::Video, &result);
        assert!(text.contains("📁 Saved to: downloaded_media/555.mp4"));
        assert!(text.contains("📏 Size: 1.00 MB"));
    }
}
