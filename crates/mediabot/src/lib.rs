//! mediabot - Telegram front end for the mediacore fetchers
//!
//! Routes YouTube links to MP3 extraction and TikTok links to video download,
//! saves the result locally, then asks whether to send it back in the chat.

pub mod cli;
pub mod telegram;

pub use telegram::{create_bot, schema, HandlerDeps, HandlerError};
