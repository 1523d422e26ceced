//! Shared harness: a wiremock server standing in for the Telegram Bot API,
//! a temp download folder, and canned updates.

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use teloxide::types::{CallbackQuery, Message};
use teloxide::Bot;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use mediabot::HandlerDeps;
use mediacore::download::source::MediaSource;
use mediacore::{Conversations, DownloadError, DownloadResult, Fetchers};

pub const CHAT_ID: i64 = 123456789;
pub const USER_ID: u64 = 123456789;

pub struct TelegramMock {
    pub server: MockServer,
    pub bot: Bot,
    pub downloads: TempDir,
}

impl TelegramMock {
    pub async fn new() -> Self {
        let mock = Self::start().await;
        mock.mock_all_telegram_api().await;
        mock
    }

    /// Like [`TelegramMock::new`], but `method_name` answers with an API
    /// error (mounted first, so it wins over the catch-all).
    pub async fn with_failing(method_name: &str) -> Self {
        let mock = Self::start().await;
        let error = serde_json::json!({
            "ok": false,
            "error_code": 413,
            "description": "Request Entity Too Large"
        });
        Mock::given(method("POST"))
            .and(path_regex(format!("(?i)/bot[^/]+/{}$", method_name.to_lowercase())))
            .respond_with(ResponseTemplate::new(413).set_body_json(error))
            .mount(&mock.server)
            .await;
        mock.mock_all_telegram_api().await;
        mock
    }

    async fn start() -> Self {
        let server = MockServer::start().await;
        let bot = Bot::new("test_token_12345:ABCDEF").set_api_url(server.uri().parse().unwrap());
        let downloads = tempfile::tempdir().unwrap();

        Self { server, bot, downloads }
    }

    pub fn download_dir(&self) -> &Path {
        self.downloads.path()
    }

    /// `answerCallbackQuery` returns `true`; every other method gets a
    /// plain message back, which is a valid result for all of them.
    async fn mock_all_telegram_api(&self) {
        Mock::given(method("POST"))
            .and(path_regex("(?i)/bot[^/]+/answercallbackquery"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true, "result": true })))
            .mount(&self.server)
            .await;

        Mock::given(method("POST"))
            .and(path_regex("(?i)/bot[^/]+/setmycommands"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true, "result": true })))
            .mount(&self.server)
            .await;

        let message = serde_json::json!({
            "ok": true,
            "result": {
                "message_id": 42,
                "from": { "id": 987654321, "is_bot": true, "first_name": "TestBot" },
                "chat": { "id": CHAT_ID, "type": "private" },
                "date": 1735992000,
                "text": "Response"
            }
        });
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(message))
            .mount(&self.server)
            .await;
    }

    /// Requests whose Bot API method matches `name` (case-insensitive).
    pub async fn requests_to(&self, name: &str) -> Vec<Request> {
        let suffix = format!("/{}", name.to_lowercase());
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.url.path().to_lowercase().ends_with(&suffix))
            .collect()
    }

    /// `text` fields of every `sendMessage`, in order.
    pub async fn sent_texts(&self) -> Vec<String> {
        self.json_field("sendMessage", "text").await
    }

    /// `text` fields of every `editMessageText`, in order.
    pub async fn edited_texts(&self) -> Vec<String> {
        self.json_field("editMessageText", "text").await
    }

    async fn json_field(&self, method_name: &str, field: &str) -> Vec<String> {
        self.requests_to(method_name)
            .await
            .iter()
            .filter_map(|r| serde_json::from_slice::<serde_json::Value>(&r.body).ok())
            .filter_map(|body| body[field].as_str().map(str::to_string))
            .collect()
    }

    /// Body of the last `sendMessage` request.
    pub async fn last_sent_body(&self) -> serde_json::Value {
        let requests = self.requests_to("sendMessage").await;
        let last = requests.last().expect("no sendMessage request");
        serde_json::from_slice(&last.body).unwrap()
    }
}

pub fn deps_with(fetchers: Fetchers) -> HandlerDeps {
    HandlerDeps::new(fetchers, Arc::new(Conversations::new()))
}

pub fn text_message(text: &str) -> Message {
    let json = serde_json::json!({
        "message_id": 1,
        "date": 1735992000,
        "chat": {
            "id": CHAT_ID,
            "type": "private",
            "first_name": "Test",
            "username": "testuser"
        },
        "from": {
            "id": USER_ID,
            "is_bot": false,
            "first_name": "Test",
            "username": "testuser",
            "language_code": "en"
        },
        "text": text
    });

    serde_json::from_value(json).expect("Failed to deserialize message")
}

pub fn button_press(data: &str) -> CallbackQuery {
    let json = serde_json::json!({
        "id": "callback_123",
        "from": {
            "id": USER_ID,
            "is_bot": false,
            "first_name": "Test",
            "username": "testuser",
            "language_code": "en"
        },
        "message": {
            "message_id": 42,
            "date": 1735992000,
            "chat": {
                "id": CHAT_ID,
                "type": "private",
                "first_name": "Test",
                "username": "testuser"
            },
            "from": {
                "id": 987654321,
                "is_bot": true,
                "first_name": "TestBot",
                "username": "test_bot"
            },
            "text": "Send you the MP3 in Telegram?"
        },
        "chat_instance": "chat_instance_123",
        "data": data
    });

    serde_json::from_value(json).expect("Failed to deserialize callback")
}

/// Backend that writes a fixed file, or fails, without touching the network.
pub struct StaticSource {
    dir: PathBuf,
    file_name: &'static str,
    size: usize,
    fail: bool,
}

impl StaticSource {
    pub fn writing(dir: &Path, file_name: &'static str, size: usize) -> Arc<Self> {
        Arc::new(Self {
            dir: dir.to_path_buf(),
            file_name,
            size,
            fail: false,
        })
    }

    pub fn failing(dir: &Path) -> Arc<Self> {
        Arc::new(Self {
            dir: dir.to_path_buf(),
            file_name: "never",
            size: 0,
            fail: true,
        })
    }
}

#[async_trait]
impl MediaSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, url: &str) -> Result<DownloadResult, DownloadError> {
        if self.fail {
            return Err(DownloadError::Extraction(format!("cannot fetch {}", url)));
        }
        let path = self.dir.join(self.file_name);
        std::fs::write(&path, vec![0u8; self.size]).map_err(|e| DownloadError::Extraction(e.to_string()))?;
        DownloadResult::from_existing(path).map_err(|e| DownloadError::Extraction(e.to_string()))
    }
}
