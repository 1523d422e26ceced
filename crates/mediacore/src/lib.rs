//! mediacore - download engine behind the mediabot Telegram bot
//!
//! Everything here is Telegram-agnostic so it can be driven from the bot,
//! the CLI, or tests.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, filename helpers
//! - `download`: URL router and the audio/video fetchers
//! - `session`: per-conversation state machine and its lifecycle manager

pub mod core;
pub mod download;
pub mod session;

// Re-export commonly used types for convenience
pub use core::{config, AppError, AppResult};
pub use download::{classify, DownloadError, DownloadRequest, DownloadResult, Fetchers, MediaKind, Route};
pub use session::{ConfirmChoice, Conversation, ConversationState, Conversations, DeliveryPlan, StoredDownload};
