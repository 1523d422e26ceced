use std::path::{Path, PathBuf};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

use crate::download::{DownloadResult, MediaKind};

/// The two answers offered after a fetch, encoded as callback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString, IntoStaticStr)]
pub enum ConfirmChoice {
    #[strum(serialize = "send_audio")]
    SendAudio,
    #[strum(serialize = "send_video")]
    SendVideo,
    #[strum(serialize = "dont_send")]
    DontSend,
}

impl ConfirmChoice {
    /// The "send" answer matching a media kind.
    pub fn send(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Audio => ConfirmChoice::SendAudio,
            MediaKind::Video => ConfirmChoice::SendVideo,
        }
    }

    /// Callback data carried by the inline button.
    pub fn callback_data(self) -> &'static str {
        self.into()
    }

    /// Attachment type to transmit, `None` for "don't send".
    pub fn media_kind(self) -> Option<MediaKind> {
        match self {
            ConfirmChoice::SendAudio => Some(MediaKind::Audio),
            ConfirmChoice::SendVideo => Some(MediaKind::Video),
            ConfirmChoice::DontSend => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingFetch(MediaKind),
    AwaitingConfirmation,
    Delivered,
    SavedOnly,
    DeliveryFailed,
}

/// Last successful download of a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDownload {
    pub path: PathBuf,
    pub kind: MediaKind,
}

/// What the delivery handler has to do for a confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryPlan {
    /// Transmit `path` as a `kind` attachment
    Send { path: PathBuf, kind: MediaKind },
    /// Leave the file where it is and acknowledge
    SaveOnly { path: PathBuf },
    /// Nothing stored, or the stored file is gone
    FileNotFound,
}

/// Session context of one chat.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    state: ConversationState,
    last_download: Option<StoredDownload>,
}

impl Conversation {
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn last_download(&self) -> Option<&StoredDownload> {
        self.last_download.as_ref()
    }

    /// A recognized URL arrived. Always allowed; a pending confirmation is
    /// abandoned and its file stays remembered until the new fetch succeeds.
    pub fn begin_fetch(&mut self, kind: MediaKind) {
        self.state = ConversationState::AwaitingFetch(kind);
    }

    /// Remembers the new file, overwriting any previous one.
    pub fn fetch_succeeded(&mut self, kind: MediaKind, result: &DownloadResult) {
        self.last_download = Some(StoredDownload {
            path: result.file_path.clone(),
            kind,
        });
        self.state = ConversationState::AwaitingConfirmation;
    }

    /// Back to idle; nothing is written.
    pub fn fetch_failed(&mut self) {
        self.state = ConversationState::Idle;
    }

    /// Resolves the user's answer against the stored path.
    ///
    /// The path is checked on disk here, since it may have been removed
    /// after the fetch. The slot is not cleared, so pressing a button twice
    /// repeats the action.
    pub fn confirm(&mut self, choice: ConfirmChoice) -> DeliveryPlan {
        let path = match self.last_download.as_ref().map(|d| d.path.as_path()) {
            Some(path) if path_exists(path) => path.to_path_buf(),
            _ => {
                self.state = ConversationState::DeliveryFailed;
                return DeliveryPlan::FileNotFound;
            }
        };

        match choice.media_kind() {
            Some(kind) => DeliveryPlan::Send { path, kind },
            None => {
                self.state = ConversationState::SavedOnly;
                DeliveryPlan::SaveOnly { path }
            }
        }
    }

    /// Outcome of transmitting a `DeliveryPlan::Send`.
    pub fn delivery_finished(&mut self, sent: bool) {
        self.state = if sent {
            ConversationState::Delivered
        } else {
            ConversationState::DeliveryFailed
        };
    }
}

fn path_exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}
